//! Error types for the table store.

use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors raised by a [`TableStore`](super::TableStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    /// The store refused the write (constraint, bad column, ...).
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Internal store error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A write that should return a row returned none.
    #[error("No row returned from {0}")]
    MissingRow(&'static str),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(#[from] OrderError),
}
