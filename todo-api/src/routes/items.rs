/// Todo item endpoints
///
/// # Endpoints
///
/// - `GET /items` - List all items
/// - `POST /items` - Create an item
/// - `PUT /items/:id` - Replace an item's name and completion flag
/// - `DELETE /items/:id` - Delete an item
///
/// # Item JSON
///
/// ```json
/// { "id": 1, "name": "Buy milk", "isComplete": false }
/// ```

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
use todo_shared::models::item::{Item, ItemInput};

/// List all items
///
/// No pagination; the whole table comes back in storage order.
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    let items = Item::list(&state.db).await?;
    Ok(Json(items))
}

/// Create an item
///
/// # Endpoint
///
/// ```text
/// POST /items
/// Content-Type: application/json
///
/// { "name": "Buy milk", "isComplete": false }
/// ```
///
/// # Response
///
/// `201 Created` with `Location: /items/{id}` and the stored item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> ApiResult<impl IntoResponse> {
    let item = Item::create(&state.db, input).await?;
    tracing::info!(item_id = item.id, "Item created");

    let location = format!("/items/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// Update an item
///
/// Only `name` and `isComplete` are copied from the body; both are always
/// overwritten, so an omitted `name` clears it.
///
/// # Errors
///
/// - `404 Not Found`: no item with this id
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ItemInput>,
) -> ApiResult<Json<Item>> {
    let mut item = Item::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    item.name = input.name;
    item.is_complete = input.is_complete;

    // None here means the row was deleted after the lookup
    let item = item.save(&state.db).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(item))
}

/// Delete an item
///
/// # Errors
///
/// - `404 Not Found`: no item with this id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    if !Item::delete(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(item_id = id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}
