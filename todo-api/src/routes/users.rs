/// User endpoints
///
/// # Endpoints
///
/// - `GET /users` - List all users, hashes included
/// - `POST /users` - Create a user
/// - `PUT /users/:id` - Rename a user and optionally set a new password
/// - `DELETE /users/:id` - Delete a user
///
/// Requests carry the plaintext password in `passwordHash`; responses carry
/// the stored Argon2id hash in the same field.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use todo_shared::{
    auth::password,
    models::user::{NewUser, User, UserInput},
};

/// List all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "username": "dana", "passwordHash": "secret" }
/// ```
///
/// # Response
///
/// `201 Created` with `Location: /users/{id}`; `passwordHash` in the body is
/// the stored hash.
///
/// # Errors
///
/// - `500 Internal Server Error`: missing `passwordHash`, empty or over-long
///   username, or storage failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserInput>,
) -> ApiResult<impl IntoResponse> {
    // An empty password is still hashed; only an absent one is refused
    let plain = input
        .password_hash
        .as_deref()
        .ok_or_else(|| ApiError::InternalError("User created without passwordHash".to_string()))?;
    let password_hash = password::hash_password(plain)?;

    let user = User::create(
        &state.db,
        NewUser {
            username: input.username,
            password_hash,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User created");

    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Update a user
///
/// `username` is always overwritten. The stored hash is replaced only when
/// the body carries a non-empty `passwordHash`.
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UserInput>,
) -> ApiResult<Json<User>> {
    let mut user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if let Some(new_password) = input.new_password() {
        user.password_hash = password::hash_password(new_password)?;
        tracing::debug!(user_id = id, "Password hash replaced");
    }
    user.username = input.username;

    let user = user.save(&state.db).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

/// Delete a user
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
