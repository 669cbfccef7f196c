use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use roledesk_application::{ListingTarget, NextAction, after_create_role, after_delete_role};
use roledesk_core::{AppError, AppResult};
use roledesk_domain::{RoleId, UserId};

use crate::dto::{
    CreateRoleRequest, HealthResponse, RoleResponse, SubmitRoleAssignmentsRequest, UserResponse,
    UserRoleAssignmentsResponse,
};
use crate::error::{ApiResult, ErrorResponse};
use crate::state::AppState;

pub mod health;
pub mod roles;
pub mod users;

// Path ids are opaque; anything that does not parse is a miss, not a
// malformed-request error.
fn parse_role_id(value: &str) -> AppResult<RoleId> {
    RoleId::parse(value).map_err(|_| AppError::NotFound(format!("role '{value}' was not found")))
}

fn parse_user_id(value: &str) -> AppResult<UserId> {
    UserId::parse(value).map_err(|_| AppError::NotFound(format!("user '{value}' was not found")))
}

fn listing_path(target: ListingTarget) -> &'static str {
    match target {
        ListingTarget::Roles => "/api/roles",
        ListingTarget::Users => "/api/users",
    }
}

/// Renders a flow outcome as an HTTP response: redirects become 303s with
/// the advisory message carried as a `notice` query parameter, form errors
/// become a 422 with the message list.
fn respond(action: NextAction) -> Response {
    match action {
        NextAction::ShowListing => Redirect::to(listing_path(ListingTarget::Roles)).into_response(),
        NextAction::ShowForm { errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(errors)),
        )
            .into_response(),
        NextAction::Redirect { target, notice } => {
            let path = listing_path(target);
            match notice {
                Some(notice) => {
                    let query: String = url::form_urlencoded::Serializer::new(String::new())
                        .append_pair("notice", notice.as_str())
                        .finish();
                    Redirect::to(format!("{path}?{query}").as_str()).into_response()
                }
                None => Redirect::to(path).into_response(),
            }
        }
    }
}
