//! # Todo Shared Library
//!
//! Storage-side building blocks used by the Todo API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migration runner
//! - `models`: `Item` and `User` entities with their queries
//! - `auth`: Password hashing

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Todo shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
