//! The remote table store the storefront reads its menu from and writes
//! orders to.
//!
//! Two implementations exist: [`RestStore`] talks to a PostgREST-style HTTP
//! API, [`ActorStore`] keeps the tables in-process on top of the resource
//! actors.

pub mod actor;
pub mod error;
pub mod rest;

pub use actor::ActorStore;
pub use error::*;
pub use rest::RestStore;

use crate::model::{MenuItem, Order, OrderCreate, OrderId, OrderLine};
use async_trait::async_trait;

#[async_trait]
pub trait TableStore: Send + Sync {
    /// Rows of `menu_items` with `is_available = true`, ordered by category.
    async fn fetch_available_menu(&self) -> Result<Vec<MenuItem>, StoreError>;

    /// Inserts one `orders` row and returns it with its assigned id.
    async fn insert_order(&self, order: OrderCreate) -> Result<Order, StoreError>;

    /// Inserts the `order_items` rows of one order.
    async fn insert_order_lines(&self, lines: Vec<OrderLine>) -> Result<(), StoreError>;

    /// Removes an `orders` row.
    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError>;
}
