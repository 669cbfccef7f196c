use super::*;

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .role_admin_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn user_role_assignments_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserRoleAssignmentsResponse>> {
    let user_id = parse_user_id(user_id.as_str())?;
    let view = state.role_admin_service.user_role_assignments(user_id).await?;

    Ok(Json(UserRoleAssignmentsResponse::from(view)))
}

pub async fn submit_user_role_assignments_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<SubmitRoleAssignmentsRequest>,
) -> ApiResult<Response> {
    let user_id = parse_user_id(user_id.as_str())?;
    let action = state
        .role_admin_service
        .submit_user_role_assignments(user_id, payload.roles.as_str());

    Ok(respond(action))
}
