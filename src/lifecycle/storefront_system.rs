use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItemCreate, MenuItemId};
use crate::store::ActorStore;
use tracing::{error, info};

/// Runtime orchestrator for the in-memory table store.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the menu and order actors
/// - **Wiring**: handing out clients, or an [`ActorStore`] that bundles them
/// - **Seeding**: filling the menu table before the storefront opens
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new();
/// system.seed_menu(StorefrontSystem::sample_menu()).await?;
///
/// let store = system.store();
/// let menu = Menu::load(&store, &[]).await;
///
/// drop(store);
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the `menu_items` table
    pub menu_client: MenuClient,

    /// Client for the `orders` table
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Creates both actors and spawns each in its own Tokio task.
    ///
    /// Neither actor has dependencies, so both run with `()` as context.
    pub fn new() -> Self {
        let (menu_actor, menu_client) = crate::menu_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            menu_client,
            order_client,
            handles: vec![menu_handle, order_handle],
        }
    }

    /// A [`TableStore`](crate::store::TableStore) over this system's actors.
    ///
    /// The store holds client clones; drop it before [`shutdown`](Self::shutdown)
    /// or the actors never see their channels close.
    pub fn store(&self) -> ActorStore {
        ActorStore::new(self.menu_client.clone(), self.order_client.clone())
    }

    /// Inserts menu rows, stopping at the first rejected one.
    pub async fn seed_menu(
        &self,
        items: impl IntoIterator<Item = MenuItemCreate>,
    ) -> Result<Vec<MenuItemId>, MenuError> {
        let mut ids = Vec::new();
        for item in items {
            ids.push(self.menu_client.create_item(item).await?);
        }
        info!(count = ids.len(), "Menu seeded");
        Ok(ids)
    }

    /// A small menu for demos and tests.
    pub fn sample_menu() -> Vec<MenuItemCreate> {
        vec![
            MenuItemCreate::flat("Cold Coffee", "Beverages", 70.0),
            MenuItemCreate::flat("Masala Chai", "Beverages", 30.0),
            MenuItemCreate::flat("Veg Momos", "Momos", 90.0),
            MenuItemCreate::flat("Chicken Momos", "Momos", 120.0),
            MenuItemCreate::variant("Paneer Pasta", "Pasta", 80.0, 150.0),
            MenuItemCreate::variant("Hakka Noodles", "Pasta", 70.0, 130.0),
            MenuItemCreate::flat("Veg Burger", "Snacks", 150.0),
            MenuItemCreate::flat("Masala Fries", "Snacks", 60.0).unavailable(),
        ]
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each `ResourceActor` then
    /// leaves its loop. Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront system...");

        drop(self.menu_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront system shutdown complete.");
        Ok(())
    }
}

impl Default for StorefrontSystem {
    fn default() -> Self {
        Self::new()
    }
}
