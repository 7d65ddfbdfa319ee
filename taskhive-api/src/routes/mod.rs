/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)
/// - `tasks`: Task CRUD endpoints
/// - `users`: Current-account endpoint

pub mod health;
pub mod auth;
pub mod tasks;
pub mod users;
