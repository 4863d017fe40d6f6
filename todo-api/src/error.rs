/// Error handling for the API server
///
/// Handlers return `ApiResult<T>`; the error side converts into an HTTP
/// response. There are only two outcomes besides success: the addressed row
/// does not exist, or something below the handler failed.
///
/// # Example
///
/// ```no_run
/// use todo_api::error::{ApiError, ApiResult};
/// use todo_shared::models::item::Item;
/// use axum::Json;
/// # use sqlx::PgPool;
///
/// async fn handler(pool: PgPool, id: i32) -> ApiResult<Json<Item>> {
///     let item = Item::find_by_id(&pool, id).await?.ok_or(ApiError::NotFound)?;
///     Ok(Json(item))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use todo_shared::auth::password::PasswordError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Not found (404), sent without a body
    NotFound,

    /// Internal server error (500)
    ///
    /// The message is logged, never sent to the client.
    InternalError(String),
}

/// Body of a 500 response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = Json(ErrorResponse {
                    error: "internal_error".to_string(),
                    message: "An internal error occurred".to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Storage failures surface as generic server errors
///
/// Constraint violations included: the schema is the only validation there
/// is, and its failures are not shaped for clients.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalError(format!("Database error: {}", err))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}
