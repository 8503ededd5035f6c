//! Route handlers for the item resource
//!
//! Each handler is a single request-to-response transition: translate the
//! request, call the repository, build the response. Every failure funnels
//! through [`ApiError`](crate::error::ApiError).

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{
    error::ApiError,
    extract::{ApiJson, ApiPath, ApiQuery},
    schemas::{CreateItemRequest, ItemListResponse, ItemResponse, ListQuery, UpdateItemRequest},
    server::AppState,
};

/// `GET /` welcome endpoint
pub async fn root() -> Json<Value> {
    Json(json!({"message": "Welcome to Todo API"}))
}

/// `GET /health` storage reachability probe
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.repository.health_check().await?;
    Ok(Json(json!({"status": "healthy"})))
}

/// `GET /items` with pagination metadata
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<ItemListResponse>, ApiError> {
    let window = query.window();

    let items = state.repository.list(window).await?;
    let total = state.repository.count().await?;

    Ok(Json(ItemListResponse {
        total,
        count: items.len(),
        page: window.page,
        page_size: window.page_size,
        data: items.into_iter().map(ItemResponse::from).collect(),
    }))
}

/// `POST /items` creating one item
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let new_item = body.validate().map_err(ApiError::Validation)?;

    let item = state.repository.create(new_item).await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// `GET /items/{id}` fetching one item
pub async fn get_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .repository
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    Ok(Json(ItemResponse::from(item)))
}

/// `PUT /items/{id}` applying a partial update
pub async fn update_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(body): ApiJson<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let updates = body.validate().map_err(ApiError::Validation)?;

    let item = state.repository.update(id, updates).await?;

    Ok(Json(ItemResponse::from(item)))
}

/// `DELETE /items/{id}` removing one item
pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
