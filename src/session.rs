//! One customer's visit: the menu they see, their cart, and checkout.

use crate::cart::Cart;
use crate::catalog::Menu;
use crate::checkout::{CheckoutError, CheckoutFlow};
use crate::config::StorefrontConfig;
use crate::model::OrderId;
use crate::payment::{Payee, PaymentLinkError, PaymentLinks};
use crate::pricing::{DeliveryPolicy, OrderSummary};
use crate::store::TableStore;
use std::sync::Arc;

/// Owns the session state and the store handle it talks to.
///
/// The cart lives here and nowhere else; callers reach it through
/// [`cart_mut`](Self::cart_mut).
pub struct Storefront {
    store: Arc<dyn TableStore>,
    menu: Menu,
    cart: Cart,
    policy: DeliveryPolicy,
    payee: Payee,
    category_order: Vec<String>,
}

impl Storefront {
    pub fn new(store: Arc<dyn TableStore>, config: &StorefrontConfig) -> Self {
        Self {
            store,
            menu: Menu::default(),
            cart: Cart::new(),
            policy: config.delivery,
            payee: config.payee.clone(),
            category_order: config.category_order.clone(),
        }
    }

    /// Creates the session and loads the menu.
    pub async fn open(store: Arc<dyn TableStore>, config: &StorefrontConfig) -> Self {
        let mut storefront = Self::new(store, config);
        storefront.load_menu().await;
        storefront
    }

    /// Re-fetches the menu. A failed fetch leaves it empty.
    pub async fn load_menu(&mut self) -> &Menu {
        self.menu = Menu::load(self.store.as_ref(), &self.category_order).await;
        &self.menu
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn summary(&self) -> OrderSummary {
        self.policy.summarize(self.cart.total())
    }

    /// A fresh checkout on the details step.
    pub fn begin_checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.policy)
    }

    /// Payment-app links for the current cart total, surcharge included.
    pub fn payment_links(&self) -> Result<PaymentLinks, PaymentLinkError> {
        PaymentLinks::for_amount(&self.payee, self.summary().total)
    }

    /// Places the order for the current cart through `flow`.
    pub async fn place_order(&mut self, flow: &mut CheckoutFlow) -> Result<OrderId, CheckoutError> {
        flow.place_order(&mut self.cart, self.store.as_ref()).await
    }
}
