//! A dish on the menu, as stored in the `menu_items` table.
//!
//! # Pricing shapes
//! A row is either a **flat** item (`price` set) or a **variant** item
//! (`half_price` and `full_price` both set). When `price` is present it wins,
//! so callers check it first.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! for the in-memory store; see [`crate::menu_actor`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a menu row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl From<String> for MenuItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Portion size of a variant item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    Half,
    Full,
}

impl Display for SizeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeVariant::Half => f.write_str("half"),
            SizeVariant::Full => f.write_str("full"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub half_price: Option<f64>,
    #[serde(default)]
    pub full_price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_available: bool,
}

impl MenuItem {
    /// Creates an available item with a single price.
    pub fn flat(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price: Some(price),
            half_price: None,
            full_price: None,
            description: None,
            is_available: true,
        }
    }

    /// Creates an available item sold in half and full portions.
    pub fn variant(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
        half_price: f64,
        full_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price: None,
            half_price: Some(half_price),
            full_price: Some(full_price),
            description: None,
            is_available: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when the item is offered in half and full portions.
    pub fn has_variants(&self) -> bool {
        self.half_price.is_some() && self.full_price.is_some()
    }
}

/// Payload for inserting a menu row.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
    pub half_price: Option<f64>,
    pub full_price: Option<f64>,
    pub description: Option<String>,
    pub is_available: bool,
}

impl MenuItemCreate {
    pub fn flat(name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: Some(price),
            half_price: None,
            full_price: None,
            description: None,
            is_available: true,
        }
    }

    pub fn variant(
        name: impl Into<String>,
        category: impl Into<String>,
        half_price: f64,
        full_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price: None,
            half_price: Some(half_price),
            full_price: Some(full_price),
            description: None,
            is_available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// Payload for updating a menu row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub is_available: Option<bool>,
    pub description: Option<String>,
}
