pub mod aggregate;

pub use aggregate::{Order, OrderDto, OrderId};
