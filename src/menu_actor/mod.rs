//! Menu table of the in-memory store.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::framework::ResourceActor;
use crate::model::{MenuItem, MenuItemId};

/// Creates a new menu actor and its client. Ids are random UUIDs, like the
/// remote table assigns.
pub fn new() -> (ResourceActor<MenuItem>, MenuClient) {
    let next_item_id = || MenuItemId(uuid::Uuid::new_v4().to_string());

    let (actor, generic_client) = ResourceActor::new(32, next_item_id);
    let client = MenuClient::new(generic_client);

    (actor, client)
}
