use super::*;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_admin_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> Response {
    let result = state
        .role_admin_service
        .create_role(payload.name.as_str())
        .await;

    respond(after_create_role(result))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Response> {
    let result = match parse_role_id(role_id.as_str()) {
        Ok(role_id) => state.role_admin_service.delete_role(role_id).await,
        Err(error) => Err(error),
    };

    Ok(respond(after_delete_role(result)?))
}
