use crate::domain::common::{AggregateId, AggregateRoot};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(OrderId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ. Имена JSON-полей зафиксированы историческим wire-форматом:
/// `orderId`, `items`, `localD` (YYYY-MM-DD), `localT` (HH:MM),
/// `quantity`, `onHand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: Option<OrderId>,

    pub items: String,

    #[serde(rename = "localD")]
    pub local_d: NaiveDate,

    #[serde(rename = "localT", with = "hh_mm")]
    pub local_t: NaiveTime,

    pub quantity: i32,

    #[serde(rename = "onHand")]
    pub on_hand: bool,
}

impl Order {
    pub fn new_for_insert(
        items: String,
        local_d: NaiveDate,
        local_t: NaiveTime,
        quantity: i32,
        on_hand: bool,
    ) -> Self {
        Self {
            order_id: None,
            items,
            local_d,
            local_t,
            quantity,
            on_hand,
        }
    }

    /// Обновление затрагивает только состав заказа
    pub fn update_items(&mut self, items: String) {
        self.items = items;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.items.trim().is_empty() {
            return Err("Items must not be empty".into());
        }
        if self.quantity < 0 {
            return Err("Quantity must not be negative".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Option<Self::Id> {
        self.order_id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: Option<String>,
    pub items: String,
    #[serde(rename = "localD")]
    pub local_d: NaiveDate,
    #[serde(rename = "localT", with = "hh_mm")]
    pub local_t: NaiveTime,
    pub quantity: i32,
    #[serde(rename = "onHand", default)]
    pub on_hand: bool,
}

/// Время заказа сериализуется с точностью до минуты ("10:00"),
/// как его писала исходная система. При чтении принимается и
/// форма с секундами.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        Order {
            order_id: Some(OrderId::new(7)),
            items: "Bananas".to_string(),
            local_d: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            local_t: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            quantity: 5,
            on_hand: true,
        }
    }

    #[test]
    fn test_order_wire_shape() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orderId": 7,
                "items": "Bananas",
                "localD": "2024-01-01",
                "localT": "10:00",
                "quantity": 5,
                "onHand": true
            })
        );
    }

    #[test]
    fn test_order_round_trip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn test_local_t_accepts_seconds() {
        let json = r#"{
            "orderId": null,
            "items": "Apples",
            "localD": "2024-06-30",
            "localT": "23:59:59",
            "quantity": 1,
            "onHand": false
        }"#;
        let parsed: Order = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.local_t, NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(parsed.order_id, None);
    }

    #[test]
    fn test_order_id_string_round_trip() {
        let id = OrderId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(OrderId::from_string("42"), Ok(id));
        assert!(OrderId::from_string("not-a-number").is_err());
    }

    #[test]
    fn test_validate() {
        let mut order = sample_order();
        assert!(order.validate().is_ok());

        order.items = "   ".to_string();
        assert!(order.validate().is_err());

        order.items = "Bananas".to_string();
        order.quantity = -1;
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_update_items_leaves_rest_untouched() {
        let mut order = sample_order();
        order.update_items("Oranges".to_string());
        assert_eq!(order.items, "Oranges");
        assert_eq!(order.quantity, 5);
        assert_eq!(order.local_d, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Order::full_name(), "a001_order");
    }
}
