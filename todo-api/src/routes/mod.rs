/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `items`: Todo item CRUD
/// - `users`: User CRUD with password hashing
/// - `health`: Health check endpoint
/// - `openapi`: API description document

pub mod health;
pub mod items;
pub mod openapi;
pub mod users;
