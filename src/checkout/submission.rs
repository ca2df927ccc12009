//! The two order writes.

use crate::cart::CartLine;
use crate::model::{Order, OrderCreate, OrderLine};
use crate::store::{StoreError, TableStore};
use tracing::{error, info, instrument, warn};

/// Writes the order row, then one line row per cart line tagged with the
/// returned order id.
///
/// If the line write fails the order row is deleted again so no order exists
/// without lines. A failed delete is logged and the line-write error is still
/// what the caller gets. Nothing is retried.
#[instrument(skip_all, fields(lines = lines.len()))]
pub async fn submit_order(
    store: &dyn TableStore,
    order: OrderCreate,
    lines: &[CartLine],
) -> Result<Order, StoreError> {
    let created = store.insert_order(order).await?;
    info!(order_id = %created.id, "Order row written");

    let rows: Vec<OrderLine> = lines
        .iter()
        .map(|line| line.to_order_line(&created.id))
        .collect();

    if let Err(e) = store.insert_order_lines(rows).await {
        warn!(order_id = %created.id, error = %e, "Line write failed, removing order row");
        if let Err(cleanup) = store.delete_order(&created.id).await {
            error!(order_id = %created.id, error = %cleanup, "Compensating delete failed");
        }
        return Err(e);
    }

    info!(order_id = %created.id, "Order lines written");
    Ok(created)
}
