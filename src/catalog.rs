//! Menu grouped by category, as the storefront shows it.

use crate::model::{MenuItem, MenuItemId};
use crate::store::TableStore;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    /// Fetches available items and groups them.
    ///
    /// A failed fetch is logged and yields an empty menu; the storefront still
    /// renders.
    #[instrument(skip(store))]
    pub async fn load(store: &dyn TableStore, category_order: &[String]) -> Menu {
        match store.fetch_available_menu().await {
            Ok(items) => {
                let menu = Self::group(items, category_order);
                info!(
                    categories = menu.categories.len(),
                    items = menu.item_count(),
                    "Menu loaded"
                );
                menu
            }
            Err(e) => {
                error!(error = %e, "Error fetching menu");
                Menu::default()
            }
        }
    }

    /// Groups `items` by category, keeping their order inside each category.
    ///
    /// With a non-empty `category_order`, categories come out in that order and
    /// any category not listed is left out. Otherwise categories appear in the
    /// order they are first seen.
    pub fn group(items: Vec<MenuItem>, category_order: &[String]) -> Menu {
        let mut categories: Vec<MenuCategory> = Vec::new();
        for item in items {
            match categories.iter_mut().find(|c| c.name == item.category) {
                Some(category) => category.items.push(item),
                None => categories.push(MenuCategory {
                    name: item.category.clone(),
                    items: vec![item],
                }),
            }
        }

        if category_order.is_empty() {
            return Menu { categories };
        }

        for category in &categories {
            if !category_order.contains(&category.name) {
                warn!(category = %category.name, items = category.items.len(), "Category not in display order, hidden");
            }
        }
        let ordered = category_order
            .iter()
            .filter_map(|name| {
                categories
                    .iter()
                    .position(|c| &c.name == name)
                    .map(|index| categories.swap_remove(index))
            })
            .collect();

        Menu { categories: ordered }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn find(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| &item.id == id)
    }

    /// First item with this exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.name == name)
    }
}
