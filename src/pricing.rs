//! Price resolution and the delivery surcharge rule.

use crate::model::{MenuItem, MenuItemId, SizeVariant};
use crate::money::{to_decimal, to_f64};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while resolving a price.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// The row carries neither a flat price nor a price for the requested size.
    #[error("No price for item {item} (size: {size:?})")]
    Unpriced {
        item: MenuItemId,
        size: Option<SizeVariant>,
    },
}

/// Resolves the unit price of `item` for an optional size.
///
/// A flat price wins over variant prices. Variant items need a size; there is
/// no silent zero for an unresolvable price.
pub fn unit_price(item: &MenuItem, size: Option<SizeVariant>) -> Result<f64, PricingError> {
    let price = match (item.price, size) {
        (Some(price), _) => Some(price),
        (None, Some(SizeVariant::Half)) => item.half_price,
        (None, Some(SizeVariant::Full)) => item.full_price,
        (None, None) => None,
    };
    price.ok_or_else(|| PricingError::Unpriced {
        item: item.id.clone(),
        size,
    })
}

/// Flat delivery fee charged up to and including a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryPolicy {
    pub fee: f64,
    /// Subtotals strictly above this ship free.
    pub free_above: f64,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            fee: 30.0,
            free_above: 300.0,
        }
    }
}

impl DeliveryPolicy {
    pub fn new(fee: f64, free_above: f64) -> Self {
        Self { fee, free_above }
    }

    /// Surcharge for `subtotal`: the fee at or below the threshold, zero above it.
    pub fn delivery_charge(&self, subtotal: f64) -> f64 {
        if subtotal > self.free_above {
            0.0
        } else {
            self.fee
        }
    }

    /// Breaks a cart subtotal down into what the summary shows.
    pub fn summarize(&self, subtotal: f64) -> OrderSummary {
        let delivery_charge = self.delivery_charge(subtotal);
        let total = to_f64(to_decimal(subtotal) + to_decimal(delivery_charge));
        // Shown as "add N more": threshold + 1 - subtotal, whole-rupee step.
        let free_delivery_gap = (delivery_charge > 0.0).then(|| {
            to_f64(to_decimal(self.free_above) + rust_decimal::Decimal::ONE - to_decimal(subtotal))
        });

        OrderSummary {
            subtotal,
            delivery_charge,
            total,
            free_delivery_gap,
        }
    }
}

/// Totals displayed on the details step and charged at payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub delivery_charge: f64,
    pub total: f64,
    pub free_delivery_gap: Option<f64>,
}

impl OrderSummary {
    pub fn is_free_delivery(&self) -> bool {
        self.delivery_charge == 0.0
    }
}
