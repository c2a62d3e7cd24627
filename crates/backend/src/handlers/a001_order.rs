use axum::{extract::Path, Json};
use serde_json::json;

use contracts::domain::a001_order::aggregate::OrderId;
use contracts::domain::common::AggregateId;

use crate::domain::a001_order;

/// GET /orders
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a001_order::aggregate::Order>>, axum::http::StatusCode> {
    match a001_order::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /orders/:order_id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a001_order::aggregate::Order>, axum::http::StatusCode> {
    let order_id = match OrderId::from_string(&id) {
        Ok(order_id) => order_id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_order::service::get_by_id(order_id.value()).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /orders
pub async fn create(
    Json(dto): Json<contracts::domain::a001_order::aggregate::OrderDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_order::service::create(dto).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// PUT /orders/:order_id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<contracts::domain::a001_order::aggregate::OrderDto>,
) -> Result<(), axum::http::StatusCode> {
    let order_id = match OrderId::from_string(&id) {
        Ok(order_id) => order_id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_order::service::update_items(order_id.value(), dto).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /orders/:order_id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let order_id = match OrderId::from_string(&id) {
        Ok(order_id) => order_id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_order::service::delete(order_id.value()).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
