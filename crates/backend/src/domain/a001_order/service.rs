use super::repository;
use contracts::domain::a001_order::aggregate::{Order, OrderDto};

pub async fn create(dto: OrderDto) -> anyhow::Result<i64> {
    let aggregate = Order::new_for_insert(
        dto.items,
        dto.local_d,
        dto.local_t,
        dto.quantity,
        dto.on_hand,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await
}

/// Обновление заказа меняет только items; false — заказ не найден
pub async fn update_items(id: i64, dto: OrderDto) -> anyhow::Result<bool> {
    if dto.items.trim().is_empty() {
        return Err(anyhow::anyhow!("Validation failed: Items must not be empty"));
    }
    repository::update_items(id, &dto.items).await
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Order>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    repository::list_all().await
}
