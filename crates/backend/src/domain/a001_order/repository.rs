use contracts::domain::a001_order::aggregate::{Order, OrderId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i64,
    pub items: String,
    pub local_d: chrono::NaiveDate,
    pub local_t: chrono::NaiveTime,
    pub quantity: i32,
    pub on_hand: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        Order {
            order_id: Some(OrderId::new(m.order_id)),
            items: m.items,
            local_d: m.local_d,
            local_t: m.local_t,
            quantity: m.quantity,
            on_hand: m.on_hand,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Все заказы по возрастанию даты заказа
pub async fn list_all() -> anyhow::Result<Vec<Order>> {
    let items: Vec<Order> = Entity::find()
        .order_by_asc(Column::LocalD)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: i64) -> anyhow::Result<Option<Order>> {
    let result = Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Вставка с автоинкрементным ключом; возвращает присвоенный id
pub async fn insert(aggregate: &Order) -> anyhow::Result<i64> {
    let active = ActiveModel {
        order_id: NotSet,
        items: Set(aggregate.items.clone()),
        local_d: Set(aggregate.local_d),
        local_t: Set(aggregate.local_t),
        quantity: Set(aggregate.quantity),
        on_hand: Set(aggregate.on_hand),
    };
    let inserted = active.insert(conn()).await?;
    Ok(inserted.order_id)
}

/// Обновляет только колонку items (исторический контракт обновления заказа)
pub async fn update_items(id: i64, items: &str) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Items, Expr::value(items))
        .filter(Column::OrderId.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete(id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_model_into_order() {
        let model = Model {
            order_id: 3,
            items: "Coffee beans".to_string(),
            local_d: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            local_t: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            quantity: 2,
            on_hand: false,
        };
        let order: Order = model.into();
        assert_eq!(order.order_id, Some(OrderId::new(3)));
        assert_eq!(order.items, "Coffee beans");
        assert_eq!(order.quantity, 2);
        assert!(!order.on_hand);
    }
}
