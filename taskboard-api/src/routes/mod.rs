/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User management endpoints
/// - `tasks`: Task management and assignment endpoints

pub mod health;
pub mod tasks;
pub mod users;
