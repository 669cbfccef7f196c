//! Framework-independent control flow outcomes.
//!
//! Operations signal what the caller-facing adapter should do next instead
//! of issuing framework redirects themselves; web and CLI adapters
//! interpret the returned action.

use roledesk_core::{AppError, AppResult};

use crate::role_admin_service::RoleRecord;

/// Listing surfaces a redirect can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingTarget {
    /// The role listing.
    Roles,
    /// The user listing.
    Users,
}

/// Next action a caller-facing adapter should take after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Render the requested listing.
    ShowListing,
    /// Re-render the input form with one or more error messages.
    ShowForm {
        /// Messages to attach to the form.
        errors: Vec<String>,
    },
    /// Redirect to a listing, optionally carrying an advisory message.
    Redirect {
        /// Listing to redirect to.
        target: ListingTarget,
        /// Advisory message to surface on the listing.
        notice: Option<String>,
    },
}

impl NextAction {
    /// Creates a plain redirect without an advisory message.
    #[must_use]
    pub fn redirect(target: ListingTarget) -> Self {
        Self::Redirect {
            target,
            notice: None,
        }
    }
}

/// Maps a role creation outcome onto the form flow: success returns to the
/// role listing, any failure re-renders the form with the error messages.
pub fn after_create_role(result: AppResult<RoleRecord>) -> NextAction {
    match result {
        Ok(_) => NextAction::redirect(ListingTarget::Roles),
        Err(error) => NextAction::ShowForm {
            errors: error.messages(),
        },
    }
}

/// Maps a role deletion outcome onto the listing flow: an unknown role
/// degrades to an advisory redirect, store failures propagate.
pub fn after_delete_role(result: AppResult<()>) -> AppResult<NextAction> {
    match result {
        Ok(()) => Ok(NextAction::redirect(ListingTarget::Roles)),
        Err(AppError::NotFound(message)) => Ok(NextAction::Redirect {
            target: ListingTarget::Roles,
            notice: Some(message),
        }),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use roledesk_core::AppError;
    use roledesk_domain::RoleId;

    use crate::role_admin_service::RoleRecord;

    use super::{ListingTarget, NextAction, after_create_role, after_delete_role};

    fn role() -> RoleRecord {
        RoleRecord {
            id: RoleId::new(),
            name: "Admin".to_owned(),
            normalized_name: "ADMIN".to_owned(),
        }
    }

    #[test]
    fn successful_create_returns_to_role_listing() {
        let action = after_create_role(Ok(role()));
        assert_eq!(action, NextAction::redirect(ListingTarget::Roles));
    }

    #[test]
    fn failed_create_re_renders_the_form_with_messages() {
        let action = after_create_role(Err(AppError::Store(vec![
            "first".to_owned(),
            "second".to_owned(),
        ])));
        assert_eq!(
            action,
            NextAction::ShowForm {
                errors: vec!["first".to_owned(), "second".to_owned()],
            }
        );
    }

    #[test]
    fn conflicting_create_carries_the_conflict_message() {
        let action = after_create_role(Err(AppError::Conflict(
            "role 'Admin' already exists".to_owned(),
        )));
        assert_eq!(
            action,
            NextAction::ShowForm {
                errors: vec!["role 'Admin' already exists".to_owned()],
            }
        );
    }

    #[test]
    fn successful_delete_returns_to_role_listing() {
        let action = after_delete_role(Ok(()));
        assert!(matches!(
            action,
            Ok(NextAction::Redirect {
                target: ListingTarget::Roles,
                notice: None,
            })
        ));
    }

    #[test]
    fn unknown_role_delete_redirects_with_advisory() {
        let action = after_delete_role(Err(AppError::NotFound("role was not found".to_owned())));
        assert!(matches!(
            action,
            Ok(NextAction::Redirect {
                target: ListingTarget::Roles,
                notice: Some(message),
            }) if message == "role was not found"
        ));
    }

    #[test]
    fn store_failure_on_delete_propagates() {
        let action = after_delete_role(Err(AppError::store("connection reset")));
        assert!(matches!(action, Err(AppError::Store(_))));
    }
}
