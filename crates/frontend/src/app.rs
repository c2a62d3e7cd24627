use crate::domain::a001_order::ui::list::OrdersPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrdersPage />
    }
}
