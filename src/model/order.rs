//! Orders and their denormalized line snapshots (`orders` / `order_items` tables).

use crate::model::{MenuItemId, SizeVariant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Payment status written at creation; there is no gateway callback to move it later.
pub const PAYMENT_CONFIRMED: &str = "confirmed";

/// Order status written at creation.
pub const ORDER_PLACED: &str = "placed";

/// Store-assigned identifier of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed order as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Final total, delivery charge included.
    pub total_amount: f64,
    pub payment_status: String,
    pub order_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utr_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Lines attached by the in-memory store. Remote rows live in their own table.
    #[serde(skip)]
    pub lines: Vec<OrderLine>,
}

/// Payload for inserting an order row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total_amount: f64,
    pub payment_status: String,
    pub order_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utr_number: Option<String>,
}

/// One `order_items` row: a snapshot of a cart line at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: OrderId,
    /// Nullable so the line survives deletion of the catalog row.
    pub menu_item_id: Option<MenuItemId>,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeVariant>,
}
