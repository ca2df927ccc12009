//! Actor lifecycle and process-wide setup.

pub mod storefront_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use storefront_system::StorefrontSystem;
