use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn create_item(&self, item: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!(?item, "create_item called");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_availability(
        &self,
        id: MenuItemId,
        is_available: bool,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        let update = MenuItemUpdate {
            is_available: Some(is_available),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Available items ordered by category label. Within a category, rows keep
    /// insertion order.
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        let mut items: Vec<MenuItem> = self
            .inner
            .list()
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .filter(|item| item.is_available)
            .collect();
        items.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(items)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<MenuError>() {
                Ok(entity_error) => *entity_error,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
