//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_role_repository;
mod in_memory_user_repository;
mod postgres_role_repository;
mod postgres_user_repository;

#[cfg(test)]
mod service_flow_tests;

pub use in_memory_role_repository::InMemoryRoleRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use postgres_role_repository::PostgresRoleRepository;
pub use postgres_user_repository::PostgresUserRepository;
