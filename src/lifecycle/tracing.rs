//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole storefront.
//!
//! ## Configuration
//!
//! Output is compact and hides the module prefix (`with_target(false)`); the
//! actor loops add an `entity_type` field instead. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final table size
//! - **Table Operations**: Create, Get, List, Update, Delete and Actions
//! - **Cart**: line changes at `debug`
//! - **Checkout**: step changes at `info`, refused steps at `warn`, failed
//!   submissions and failed compensating deletes at `error`
//! - **Menu**: fetch failures at `error` (the menu then renders empty)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Step changes and table writes
//! RUST_LOG=info cargo run
//!
//! # Full payloads, cart changes and outgoing HTTP requests
//! RUST_LOG=debug cargo run
//!
//! # Only the checkout flow
//! RUST_LOG=kitchen_storefront::checkout=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, one order against the in-memory store:
//!
//! ```text
//! INFO Checkout moved to payment
//! INFO Payment initiation changed initiated=true
//! INFO submit_order: Created entity_type="Order" id=5d0c… size=1
//! INFO submit_order: Order row written order_id=5d0c…
//! INFO submit_order: Action ok entity_type="Order" id=5d0c…
//! INFO submit_order: Order lines written order_id=5d0c…
//! INFO Order placed order_id=5d0c… total=260.0
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths are noise; actors log entity_type
        .compact()
        .init();
}
