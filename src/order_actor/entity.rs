//! Entity trait implementation for [`Order`].
//!
//! Validation of the customer fields happens in `on_create`, so a rejected
//! order never reaches the table.

use super::{OrderAction, OrderActionResult, OrderError};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type UpdateParams = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            customer_address: params.customer_address,
            total_amount: params.total_amount,
            payment_status: params.payment_status,
            order_status: params.order_status,
            utr_number: params.utr_number,
            created_at: None,
            lines: Vec::new(),
        })
    }

    /// Checks required fields and stamps the creation time.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), OrderError> {
        let required = [
            ("customer_name", &self.customer_name),
            ("customer_phone", &self.customer_phone),
            ("customer_address", &self.customer_address),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(OrderError::ValidationError(format!("{field} is required")));
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(OrderError::ValidationError(format!(
                "invalid total_amount {}",
                self.total_amount
            )));
        }

        self.created_at = Some(Utc::now());
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Err(OrderError::Immutable(self.id.to_string()))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AttachLines(lines) => {
                if !self.lines.is_empty() {
                    return Err(OrderError::LinesAlreadyAttached(self.id.to_string()));
                }
                if lines.is_empty() {
                    return Err(OrderError::ValidationError("an order needs at least one line".into()));
                }
                if let Some(stray) = lines.iter().find(|line| line.order_id != self.id) {
                    return Err(OrderError::ValidationError(format!(
                        "line for order {} attached to {}",
                        stray.order_id, self.id
                    )));
                }

                let count = lines.len();
                self.lines = lines;
                Ok(OrderActionResult::LinesAttached(count))
            }
        }
    }
}
