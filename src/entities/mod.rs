//! The two resources served by the API

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishFields};
pub use order::{Order, OrderDescriptor, OrderFields, OrderLine, OrderStatus};
