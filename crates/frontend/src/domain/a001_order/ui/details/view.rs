use super::view_model::{DetailsState, OrderDetailsViewModel};
use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;

#[component]
pub fn OrderDetails(vm: OrderDetailsViewModel) -> impl IntoView {
    view! {
        <div class="order-details">
            {move || match vm.state.get() {
                DetailsState::Hidden => {
                    view! { <div class="order-details-body"></div> }.into_any()
                }
                DetailsState::Loading { .. } => {
                    view! { <div class="order-details-body loading">"Loading..."</div> }
                        .into_any()
                }
                DetailsState::Shown(order) => {
                    view! {
                        <div class="order-details-body" inner_html=details_markup(&order)></div>
                    }
                        .into_any()
                }
            }}
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
        </div>
    }
}

/// Блок деталей заказа в историческом формате страницы заказов
pub fn details_markup(order: &Order) -> String {
    format!(
        "<br>Date: {}<br>Time: {}<br>Quantity: {}<br>On Hand? : {}<br>",
        order.local_d.format("%Y-%m-%d"),
        order.local_t.format("%H:%M"),
        order.quantity,
        order.on_hand
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use contracts::domain::a001_order::aggregate::OrderId;

    #[test]
    fn test_details_markup_exact_format() {
        let order = Order {
            order_id: Some(OrderId::new(1)),
            items: "Tea".to_string(),
            local_d: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            local_t: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            quantity: 5,
            on_hand: true,
        };
        assert_eq!(
            details_markup(&order),
            "<br>Date: 2024-01-01<br>Time: 10:00<br>Quantity: 5<br>On Hand? : true<br>"
        );
    }

    #[test]
    fn test_details_markup_off_hand() {
        let order = Order {
            order_id: None,
            items: "Nails".to_string(),
            local_d: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            local_t: NaiveTime::from_hms_opt(23, 5, 0).unwrap(),
            quantity: 0,
            on_hand: false,
        };
        assert_eq!(
            details_markup(&order),
            "<br>Date: 2023-12-31<br>Time: 23:05<br>Quantity: 0<br>On Hand? : false<br>"
        );
    }
}
