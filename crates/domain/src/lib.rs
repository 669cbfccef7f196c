//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod role;
mod user;

pub use role::{DEFAULT_ROLE_NAMES, RoleId, RoleName};
pub use user::UserId;
