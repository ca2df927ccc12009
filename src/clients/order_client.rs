use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderLine};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
///
/// Field validation happens in the actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Stores the line snapshots of an existing order.
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub async fn attach_lines(&self, id: OrderId, lines: Vec<OrderLine>) -> Result<usize, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::AttachLines(lines))
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::LinesAttached(count) => Ok(count),
        }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<OrderError>() {
                Ok(entity_error) => *entity_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
