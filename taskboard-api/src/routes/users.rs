/// User management endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create a user
/// - `GET /users` - List users
/// - `DELETE /users/{id}` - Delete a user (fails while tasks reference it)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_shared::models::user::{CreateUser, User};
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Message-only response for mutations with no entity body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable result
    pub message: String,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "name": "John Doe" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "name": "John Doe" }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: name missing or empty
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<User>> {
    req.validate()?;

    let user = User::create(&state.db, CreateUser { name: req.name }).await?;

    Ok(Json(user))
}

/// List all users in insertion order
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;

    Ok(Json(users))
}

/// Delete a user
///
/// The database foreign key is the source of truth for the referential
/// rule: the delete statement runs unconditionally and a constraint
/// violation is translated to a client error. Deleting a user that does
/// not exist still reports success (zero rows affected).
///
/// # Endpoint
///
/// ```text
/// DELETE /users/{id}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: at least one task is still assigned to this user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    match User::delete(&state.db, id).await {
        Ok(_) => Ok(Json(MessageResponse {
            message: "User deleted".to_string(),
        })),
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => Err(
            ApiError::ReferentialIntegrity("Cannot delete user with tasks".to_string()),
        ),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_fails_validation() {
        let req = CreateUserRequest {
            name: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nonempty_name_passes_validation() {
        let req = CreateUserRequest {
            name: "John Doe".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
