use contracts::domain::a001_order::aggregate::{Order, OrderDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all orders
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/orders"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new order
pub async fn create_order(dto: &OrderDto) -> Result<i64, String> {
    let response = Request::post(&api_url("/orders"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create order: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

/// Update order items
pub async fn update_order(id: i64, dto: &OrderDto) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/orders/{}", id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update order: {}", response.status()));
    }

    Ok(())
}

/// Delete order
pub async fn delete_order(id: i64) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order: {}", response.status()));
    }

    Ok(())
}
