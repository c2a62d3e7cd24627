use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a001_order::aggregate::{Order, OrderDto};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_order::api;
use crate::domain::a001_order::ui::details::{OrderDetails, OrderDetailsViewModel};

/// Собирает DTO из сырых значений формы
fn build_dto(
    items: &str,
    date: &str,
    time: &str,
    quantity: &str,
    on_hand: bool,
) -> Result<OrderDto, String> {
    if items.trim().is_empty() {
        return Err("Items must not be empty".to_string());
    }
    let local_d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Invalid date, expected YYYY-MM-DD".to_string())?;
    let local_t = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| "Invalid time, expected HH:MM".to_string())?;
    let quantity: i32 = quantity
        .trim()
        .parse()
        .map_err(|_| "Invalid quantity".to_string())?;
    if quantity < 0 {
        return Err("Quantity must not be negative".to_string());
    }
    Ok(OrderDto {
        id: None,
        items: items.trim().to_string(),
        local_d,
        local_t,
        quantity,
        on_hand,
    })
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Форма добавления/редактирования
    let (edit_id, set_edit_id) = signal(None::<i64>);
    let (form_items, set_form_items) = signal(String::new());
    let (form_date, set_form_date) = signal(String::new());
    let (form_time, set_form_time) = signal(String::new());
    let (form_quantity, set_form_quantity) = signal(String::new());
    let (form_on_hand, set_form_on_hand) = signal(false);

    // Функция загрузки данных
    let load_orders = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::fetch_orders().await {
                Ok(data) => set_orders.set(data),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Загрузить данные при монтировании
    Effect::new(move || {
        load_orders();
    });

    let reset_form = move || {
        set_edit_id.set(None);
        set_form_items.set(String::new());
        set_form_date.set(String::new());
        set_form_time.set(String::new());
        set_form_quantity.set(String::new());
        set_form_on_hand.set(false);
    };

    let submit = move |_| {
        let dto = match build_dto(
            &form_items.get_untracked(),
            &form_date.get_untracked(),
            &form_time.get_untracked(),
            &form_quantity.get_untracked(),
            form_on_hand.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        spawn_local(async move {
            let result = match edit_id.get_untracked() {
                Some(id) => api::update_order(id, &dto).await,
                None => api::create_order(&dto).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    reset_form();
                    load_orders();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="orders-page">
            <h2>{Order::list_name()}</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="order-form">
                <h3>
                    {move || {
                        if edit_id.get().is_some() { "Edit Order" } else { "New Order" }
                    }}
                </h3>

                <div class="form-group">
                    <label for="items">"Items"</label>
                    <input
                        type="text"
                        id="items"
                        prop:value=move || form_items.get()
                        on:input=move |ev| set_form_items.set(event_target_value(&ev))
                        placeholder="What was ordered"
                    />
                </div>

                <div class="form-group">
                    <label for="local_d">"Date"</label>
                    <input
                        type="date"
                        id="local_d"
                        prop:value=move || form_date.get()
                        on:input=move |ev| set_form_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="local_t">"Time"</label>
                    <input
                        type="time"
                        id="local_t"
                        prop:value=move || form_time.get()
                        on:input=move |ev| set_form_time.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="quantity">"Quantity"</label>
                    <input
                        type="number"
                        id="quantity"
                        prop:value=move || form_quantity.get()
                        on:input=move |ev| set_form_quantity.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="on_hand">"On Hand"</label>
                    <input
                        type="checkbox"
                        id="on_hand"
                        prop:checked=move || form_on_hand.get()
                        on:change=move |ev| set_form_on_hand.set(event_target_checked(&ev))
                    />
                </div>

                <div class="form-actions">
                    <button on:click=submit>
                        {move || {
                            if edit_id.get().is_some() { "Save Order" } else { "Add Order" }
                        }}
                    </button>
                    {move || {
                        edit_id
                            .get()
                            .map(|_| {
                                view! { <button on:click=move |_| reset_form()>"Cancel"</button> }
                            })
                    }}
                </div>
            </div>

            {move || loading.get().then(|| view! { <div class="loading">"Loading..."</div> })}

            <ul class="orders-list">
                {move || {
                    orders
                        .get()
                        .into_iter()
                        .map(|order| {
                            let id = order.id().map(|v| v.value()).unwrap_or_default();
                            let vm = OrderDetailsViewModel::new(id);
                            let items = order.items.clone();
                            let order_for_edit = order.clone();
                            view! {
                                <li class="order-row">
                                    <div class="order-line">
                                        <span class="order-items">{items}</span>
                                        <button on:click=move |_| vm.toggle()>"View Details"</button>
                                        <button on:click=move |_| {
                                            set_edit_id.set(order_for_edit.order_id.map(|v| v.value()));
                                            set_form_items.set(order_for_edit.items.clone());
                                            set_form_date
                                                .set(order_for_edit.local_d.format("%Y-%m-%d").to_string());
                                            set_form_time
                                                .set(order_for_edit.local_t.format("%H:%M").to_string());
                                            set_form_quantity.set(order_for_edit.quantity.to_string());
                                            set_form_on_hand.set(order_for_edit.on_hand);
                                        }>"Edit"</button>
                                        <button on:click=move |_| {
                                            spawn_local(async move {
                                                match api::delete_order(id).await {
                                                    Ok(()) => load_orders(),
                                                    Err(e) => set_error.set(Some(e)),
                                                }
                                            });
                                        }>"Delete"</button>
                                    </div>
                                    <OrderDetails vm=vm />
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            {move || {
                (!loading.get() && orders.get().is_empty())
                    .then(|| view! { <div class="empty">"No orders yet"</div> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_dto_valid() {
        let dto = build_dto("Bananas", "2024-01-01", "10:00", "5", true).unwrap();
        assert_eq!(dto.items, "Bananas");
        assert_eq!(dto.local_d, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dto.local_t, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(dto.quantity, 5);
        assert!(dto.on_hand);
    }

    #[test]
    fn test_build_dto_trims_items() {
        let dto = build_dto("  Tea  ", "2024-01-01", "10:00", "1", false).unwrap();
        assert_eq!(dto.items, "Tea");
    }

    #[test]
    fn test_build_dto_rejects_blank_items() {
        assert!(build_dto("   ", "2024-01-01", "10:00", "5", true).is_err());
    }

    #[test]
    fn test_build_dto_rejects_bad_date_and_time() {
        assert!(build_dto("Tea", "01.01.2024", "10:00", "5", true).is_err());
        assert!(build_dto("Tea", "2024-01-01", "10am", "5", true).is_err());
    }

    #[test]
    fn test_build_dto_rejects_bad_quantity() {
        assert!(build_dto("Tea", "2024-01-01", "10:00", "five", true).is_err());
        assert!(build_dto("Tea", "2024-01-01", "10:00", "-2", true).is_err());
    }
}
