//! Checkout state machine: details, then payment, then success.
//!
//! ```text
//! Details ──continue_to_payment──▶ Payment { initiated } ──place_order──▶ Success
//!    ▲                                  │
//!    └──────────back_to_details─────────┘
//! ```
//!
//! `initiated` flips to true when the customer opens a payment app or says
//! they scanned the QR code; only then is the reference entry shown. Going back
//! to details resets it. `Success` is terminal: the flow is dropped with
//! [`CheckoutFlow::finish`] and the next checkout starts a fresh one.

pub mod details;
pub mod error;
pub mod reference;
pub mod submission;

pub use details::DeliveryDetails;
pub use error::CheckoutError;
pub use reference::{PaymentReference, REFERENCE_LEN};
pub use submission::submit_order;

use crate::cart::Cart;
use crate::model::{OrderCreate, OrderId, ORDER_PLACED, PAYMENT_CONFIRMED};
use crate::pricing::{DeliveryPolicy, OrderSummary};
use crate::store::TableStore;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStep {
    Details,
    Payment { initiated: bool },
    Success { order_id: OrderId },
}

impl CheckoutStep {
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutStep::Details => "details",
            CheckoutStep::Payment { .. } => "payment",
            CheckoutStep::Success { .. } => "success",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    details: DeliveryDetails,
    reference: PaymentReference,
    policy: DeliveryPolicy,
}

impl CheckoutFlow {
    pub fn new(policy: DeliveryPolicy) -> Self {
        Self {
            step: CheckoutStep::Details,
            details: DeliveryDetails::default(),
            reference: PaymentReference::default(),
            policy,
        }
    }

    pub fn step(&self) -> &CheckoutStep {
        &self.step
    }

    pub fn details(&self) -> &DeliveryDetails {
        &self.details
    }

    /// The form stays editable; it is checked again when the order is placed.
    pub fn details_mut(&mut self) -> &mut DeliveryDetails {
        &mut self.details
    }

    pub fn summary(&self, cart: &Cart) -> OrderSummary {
        self.policy.summarize(cart.total())
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        warn!(step = self.step.name(), action, "Invalid checkout transition");
        CheckoutError::InvalidTransition {
            from: self.step.name(),
            action,
        }
    }

    fn check_details(&self) -> Result<(), CheckoutError> {
        let missing = self.details.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        warn!(?missing, "Delivery details incomplete");
        Err(CheckoutError::MissingDeliveryFields(missing))
    }

    /// Details → Payment, once all delivery fields are filled in.
    pub fn continue_to_payment(&mut self) -> Result<(), CheckoutError> {
        if self.step != CheckoutStep::Details {
            return Err(self.invalid("continue to payment"));
        }
        self.check_details()?;
        self.step = CheckoutStep::Payment { initiated: false };
        info!("Checkout moved to payment");
        Ok(())
    }

    /// Payment → Details. Entered data is kept.
    pub fn back_to_details(&mut self) -> Result<(), CheckoutError> {
        if !matches!(self.step, CheckoutStep::Payment { .. }) {
            return Err(self.invalid("go back to details"));
        }
        self.step = CheckoutStep::Details;
        info!("Checkout moved back to details");
        Ok(())
    }

    /// Records that the customer opened a payment app or scanned the code.
    pub fn initiate_payment(&mut self) -> Result<(), CheckoutError> {
        self.set_initiated(true, "initiate payment")
    }

    /// Hides the reference entry again so another method can be picked.
    pub fn change_payment_method(&mut self) -> Result<(), CheckoutError> {
        self.set_initiated(false, "change payment method")
    }

    fn set_initiated(&mut self, value: bool, action: &'static str) -> Result<(), CheckoutError> {
        if let CheckoutStep::Payment { initiated } = &mut self.step {
            *initiated = value;
            info!(initiated = value, "Payment initiation changed");
            return Ok(());
        }
        Err(self.invalid(action))
    }

    /// Stores the reference as typed, minus anything that is not a digit.
    pub fn enter_reference(&mut self, input: &str) -> &PaymentReference {
        self.reference = PaymentReference::from_input(input);
        &self.reference
    }

    pub fn reference(&self) -> &PaymentReference {
        &self.reference
    }

    /// True when the confirm button would be enabled.
    pub fn can_confirm(&self) -> bool {
        matches!(self.step, CheckoutStep::Payment { initiated: true }) && self.reference.is_complete()
    }

    /// Payment → Success.
    ///
    /// Writes the order and its lines. On success the cart is cleared and the
    /// new order id returned. On any failure the flow stays on the payment
    /// step and the cart is untouched.
    pub async fn place_order(
        &mut self,
        cart: &mut Cart,
        store: &dyn TableStore,
    ) -> Result<OrderId, CheckoutError> {
        match self.step {
            CheckoutStep::Payment { initiated: true } => {}
            CheckoutStep::Payment { initiated: false } => {
                warn!("Order confirmed before payment was initiated");
                return Err(CheckoutError::PaymentNotInitiated);
            }
            _ => return Err(self.invalid("place order")),
        }
        if !self.reference.is_complete() {
            warn!(digits = self.reference.len(), "Payment reference incomplete");
            return Err(CheckoutError::InvalidReference(self.reference.len()));
        }
        if cart.is_empty() {
            warn!("Order confirmed with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }
        self.check_details()?;

        let summary = self.summary(cart);
        let order = OrderCreate {
            customer_name: self.details.customer_name.clone(),
            customer_phone: self.details.customer_phone.clone(),
            customer_address: self.details.customer_address.clone(),
            total_amount: summary.total,
            payment_status: PAYMENT_CONFIRMED.to_string(),
            order_status: ORDER_PLACED.to_string(),
            utr_number: Some(self.reference.to_string()),
        };

        let created = match submit_order(store, order, cart.lines()).await {
            Ok(created) => created,
            Err(e) => {
                error!(error = %e, "Order submission failed");
                return Err(CheckoutError::Submission(e));
            }
        };

        cart.clear();
        info!(order_id = %created.id, total = summary.total, "Order placed");
        self.step = CheckoutStep::Success {
            order_id: created.id.clone(),
        };
        Ok(created.id)
    }

    /// The placed order's id, once the flow reached success.
    pub fn order_id(&self) -> Option<&OrderId> {
        match &self.step {
            CheckoutStep::Success { order_id } => Some(order_id),
            _ => None,
        }
    }

    /// "Back to menu": discards the flow, returning the placed order's id if any.
    pub fn finish(self) -> Option<OrderId> {
        match self.step {
            CheckoutStep::Success { order_id } => Some(order_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::StorefrontSystem;
    use crate::model::MenuItem;
    use crate::store::ActorStore;

    fn ready_details(flow: &mut CheckoutFlow) {
        *flow.details_mut() = DeliveryDetails::new("Asha", "9800000000", "12 Lake Road");
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&MenuItem::flat("m1", "Veg Momos", "Momos", 90.0), None)
            .unwrap();
        cart
    }

    #[test]
    fn test_details_block_payment_until_filled() {
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        flow.details_mut().customer_name = "Asha".into();

        let err = flow.continue_to_payment().unwrap_err();
        assert!(matches!(&err, CheckoutError::MissingDeliveryFields(fields) if fields.len() == 2));
        assert_eq!(err.user_message(), "Please fill in all delivery fields");
        assert_eq!(flow.step(), &CheckoutStep::Details);

        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: false });
    }

    #[test]
    fn test_back_navigation_resets_initiation() {
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.initiate_payment().unwrap();
        flow.enter_reference("123456789012");
        assert!(flow.can_confirm());

        flow.back_to_details().unwrap();
        assert_eq!(flow.step(), &CheckoutStep::Details);
        assert_eq!(flow.details().customer_name, "Asha");

        flow.continue_to_payment().unwrap();
        assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: false });
        assert!(!flow.can_confirm());
    }

    #[test]
    fn test_change_payment_method_hides_reference_entry() {
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.initiate_payment().unwrap();
        flow.change_payment_method().unwrap();
        assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: false });
    }

    #[test]
    fn test_payment_actions_need_payment_step() {
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        assert!(matches!(
            flow.initiate_payment(),
            Err(CheckoutError::InvalidTransition { from: "details", .. })
        ));
        assert!(flow.back_to_details().is_err());
    }

    #[test]
    fn test_reference_gates_confirmation() {
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.initiate_payment().unwrap();

        assert_eq!(flow.enter_reference("1234-5678-901").len(), 11);
        assert!(!flow.can_confirm());
        flow.enter_reference("1234 5678 9012");
        assert!(flow.can_confirm());
    }

    #[test]
    fn test_empty_cart_summary_still_reaches_details() {
        let flow = CheckoutFlow::new(DeliveryPolicy::default());
        let summary = flow.summary(&Cart::new());
        assert_eq!(flow.step(), &CheckoutStep::Details);
        assert_eq!(summary.subtotal, 0.0);
        assert_eq!(summary.delivery_charge, 30.0);
    }

    #[tokio::test]
    async fn test_place_order_requires_initiated_payment() {
        let system = StorefrontSystem::new();
        let store = system.store();
        let mut cart = filled_cart();
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.enter_reference("123456789012");

        let err = flow.place_order(&mut cart, &store).await.unwrap_err();
        assert!(matches!(err, CheckoutError::PaymentNotInitiated));
        assert_eq!(cart.len(), 1);

        drop(store);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_place_order_rejects_short_reference_and_empty_cart() {
        let system = StorefrontSystem::new();
        let store: ActorStore = system.store();
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.initiate_payment().unwrap();

        flow.enter_reference("12345");
        let err = flow.place_order(&mut filled_cart(), &store).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidReference(5)));
        assert_eq!(err.user_message(), "Please enter a valid 12-digit UTR number");

        flow.enter_reference("123456789012");
        let err = flow.place_order(&mut Cart::new(), &store).await.unwrap_err();
        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: true });

        drop(store);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_successful_order_clears_cart_and_ends_flow() {
        let system = StorefrontSystem::new();
        let store = system.store();
        let mut cart = filled_cart();
        let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
        ready_details(&mut flow);
        flow.continue_to_payment().unwrap();
        flow.initiate_payment().unwrap();
        flow.enter_reference("402155667788");

        let order_id = flow.place_order(&mut cart, &store).await.unwrap();
        assert!(!order_id.0.is_empty());
        assert!(cart.is_empty());
        assert_eq!(flow.order_id(), Some(&order_id));
        assert!(flow.continue_to_payment().is_err());
        assert_eq!(flow.finish(), Some(order_id));

        drop(store);
        system.shutdown().await.unwrap();
    }
}
