//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod menu_client;
pub mod order_client;

pub use actor_client::*;
pub use menu_client::*;
pub use order_client::*;
