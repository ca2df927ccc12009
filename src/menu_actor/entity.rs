//! Entity trait implementation for [`MenuItem`].
//!
//! Lets the generic [`ResourceActor`](crate::framework::ResourceActor) own the
//! `menu_items` table of the in-memory store.

use super::MenuError;
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type CreateParams = MenuItemCreate;
    type UpdateParams = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    /// Builds the row, rejecting pricing that no size selection could resolve.
    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        let priced = params.price.is_some()
            || (params.half_price.is_some() && params.full_price.is_some());
        if !priced {
            return Err(MenuError::InvalidPricing(params.name));
        }

        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            half_price: params.half_price,
            full_price: params.full_price,
            description: params.description,
            is_available: params.is_available,
        })
    }

    /// # Fields Updated
    /// - `is_available`: hides or shows the item on the menu
    /// - `description`
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}
