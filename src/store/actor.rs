//! [`TableStore`] over the in-process menu and order actors.

use super::{StoreError, TableStore};
use crate::clients::{ActorClient, MenuClient, OrderClient};
use crate::model::{MenuItem, Order, OrderCreate, OrderId, OrderLine};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ActorStore {
    menu: MenuClient,
    orders: OrderClient,
}

impl ActorStore {
    pub fn new(menu: MenuClient, orders: OrderClient) -> Self {
        Self { menu, orders }
    }
}

#[async_trait]
impl TableStore for ActorStore {
    #[instrument(skip(self))]
    async fn fetch_available_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.menu.list_available().await?)
    }

    #[instrument(skip(self, order))]
    async fn insert_order(&self, order: OrderCreate) -> Result<Order, StoreError> {
        let id = self.orders.create_order(order).await?;
        debug!(%id, "Order row created");
        self.orders
            .get(id)
            .await?
            .ok_or(StoreError::MissingRow("orders"))
    }

    #[instrument(skip(self, lines), fields(count = lines.len()))]
    async fn insert_order_lines(&self, lines: Vec<OrderLine>) -> Result<(), StoreError> {
        let Some(order_id) = lines.first().map(|line| line.order_id.clone()) else {
            return Ok(());
        };
        self.orders.attach_lines(order_id, lines).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError> {
        Ok(self.orders.delete(id.clone()).await?)
    }
}
