//! Error types for the checkout flow.

use crate::store::StoreError;
use thiserror::Error;

/// Why a checkout step was refused.
///
/// Validation errors leave the flow where it was. A submission error leaves
/// it on the payment step with everything the customer typed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Missing delivery fields: {}", .0.join(", "))]
    MissingDeliveryFields(Vec<&'static str>),

    #[error("Payment has not been initiated")]
    PaymentNotInitiated,

    #[error("Payment reference must have 12 digits, got {0}")]
    InvalidReference(usize),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Order submission failed: {0}")]
    Submission(#[from] StoreError),
}

impl CheckoutError {
    /// Alert text shown to the customer.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::MissingDeliveryFields(_) => "Please fill in all delivery fields",
            CheckoutError::PaymentNotInitiated | CheckoutError::InvalidReference(_) => {
                "Please enter a valid 12-digit UTR number"
            }
            CheckoutError::EmptyCart => "Your cart is empty",
            CheckoutError::InvalidTransition { .. } => "This step is not available right now",
            CheckoutError::Submission(_) => "Failed to place order. Please try again.",
        }
    }
}
