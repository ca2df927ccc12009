//! Custom actions for the order actor.
//!
//! Orders take no updates; the only operation beyond create/get/delete is
//! attaching the line snapshots, which is the second of the two writes.

use crate::model::OrderLine;

/// Custom actions for [`Order`](crate::model::Order) entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Stores the `order_items` rows of the order. Allowed once.
    AttachLines(Vec<OrderLine>),
}

/// Results from [`OrderAction`]s - variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Number of lines stored.
    LinesAttached(usize),
}
