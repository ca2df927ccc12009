//! Orders table of the in-memory store, including the line-attach action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};

/// Creates a new order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let next_order_id = || OrderId(uuid::Uuid::new_v4().to_string());

    let (actor, generic_client) = ResourceActor::new(32, next_order_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
