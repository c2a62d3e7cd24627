//! Order Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch)
//! - view_model.rs: ViewModel with toggle command and display state
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::{DetailsState, OrderDetailsViewModel};
