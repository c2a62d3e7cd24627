//! API layer for order details

use contracts::domain::a001_order::aggregate::Order;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch a single order by id
pub async fn fetch_by_id(id: i64) -> Result<Order, String> {
    let response = Request::get(&api_url(&format!("/orders/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
