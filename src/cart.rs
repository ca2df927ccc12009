//! Session cart.
//!
//! The cart is a plain owned value. Whoever holds it mutates it through
//! `&mut`, so there is no shared state and no locking.

use crate::model::{MenuItem, OrderId, OrderLine, SizeVariant};
use crate::money::{line_amount, to_decimal, to_f64};
use crate::pricing::{unit_price, PricingError};
use rust_decimal::Decimal;
use tracing::debug;

/// One cart entry for a distinct (item, size) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
    /// Only set for variant items.
    pub size: Option<SizeVariant>,
    /// Captured when the line was first added.
    pub unit_price: f64,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        line_amount(self.unit_price, self.quantity)
    }

    fn matches(&self, item: &MenuItem, size: Option<SizeVariant>) -> bool {
        self.item.id == item.id && self.size == size
    }

    /// Snapshot of this line for the `order_items` table.
    pub fn to_order_line(&self, order_id: &OrderId) -> OrderLine {
        OrderLine {
            order_id: order_id.clone(),
            menu_item_id: Some(self.item.id.clone()),
            item_name: self.item.name.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            size: self.size,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, merging into an existing line for the same
    /// item and size. Returns the index of the affected line.
    ///
    /// Flat-priced items ignore `size`. An item without a resolvable price is
    /// rejected and the cart is left untouched.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        size: Option<SizeVariant>,
    ) -> Result<usize, PricingError> {
        let size = if item.price.is_some() { None } else { size };
        let price = unit_price(item, size)?;

        if let Some(index) = self.lines.iter().position(|line| line.matches(item, size)) {
            let line = &mut self.lines[index];
            line.quantity = line.quantity.saturating_add(1);
            debug!(item_id = %item.id, ?size, quantity = line.quantity, "Cart line incremented");
            return Ok(index);
        }

        self.lines.push(CartLine {
            item: item.clone(),
            quantity: 1,
            size,
            unit_price: price,
        });
        debug!(item_id = %item.id, ?size, unit_price = price, "Cart line added");
        Ok(self.lines.len() - 1)
    }

    /// Removes the line at `index`. Out of range is a no-op.
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        if index >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(index);
        debug!(item_id = %line.item.id, index, "Cart line removed");
        Some(line)
    }

    /// Sets the quantity of the line at `index`; zero or less removes it.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_line(index).is_some();
        }
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        debug!(item_id = %line.item.id, index, quantity = line.quantity, "Cart quantity set");
        true
    }

    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "Cart cleared");
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        let sum: Decimal = self
            .lines
            .iter()
            .map(|line| to_decimal(line.unit_price) * Decimal::from(line.quantity))
            .sum();
        to_f64(sum)
    }

    /// Sum of quantities, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, u32::saturating_add)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItemId;

    fn momos() -> MenuItem {
        MenuItem::flat("m1", "Veg Momos", "Momos", 150.0)
    }

    fn pasta() -> MenuItem {
        MenuItem::variant("m2", "Paneer Pasta", "Pasta", 80.0, 150.0)
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        for _ in 0..4 {
            assert_eq!(cart.add_item(&momos(), None).unwrap(), 0);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_sizes_are_separate_lines() {
        let mut cart = Cart::new();
        cart.add_item(&pasta(), Some(SizeVariant::Half)).unwrap();
        cart.add_item(&pasta(), Some(SizeVariant::Full)).unwrap();
        cart.add_item(&pasta(), Some(SizeVariant::Half)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].unit_price, 80.0);
        assert_eq!(cart.lines()[1].unit_price, 150.0);
        assert_eq!(cart.total(), 310.0);
    }

    #[test]
    fn test_flat_item_drops_size() {
        let mut cart = Cart::new();
        cart.add_item(&momos(), Some(SizeVariant::Half)).unwrap();
        cart.add_item(&momos(), None).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].size, None);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_unpriced_item_is_rejected() {
        let mut cart = Cart::new();
        let result = cart.add_item(&pasta(), None);
        assert_eq!(
            result,
            Err(PricingError::Unpriced {
                item: MenuItemId::from("m2"),
                size: None,
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unit_price_is_captured_at_add_time() {
        let mut cart = Cart::new();
        let mut item = momos();
        cart.add_item(&item, None).unwrap();

        item.price = Some(999.0);
        cart.add_item(&item, None).unwrap();

        assert_eq!(cart.lines()[0].unit_price, 150.0);
        assert_eq!(cart.total(), 300.0);
    }

    #[test]
    fn test_non_positive_quantity_removes_line() {
        let mut by_update = Cart::new();
        by_update.add_item(&momos(), None).unwrap();
        by_update.add_item(&pasta(), Some(SizeVariant::Full)).unwrap();
        let mut by_remove = by_update.clone();

        assert!(by_update.update_quantity(0, 0));
        by_remove.remove_line(0);
        assert_eq!(by_update, by_remove);

        assert!(by_update.update_quantity(0, -3));
        assert!(by_update.is_empty());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&momos(), None).unwrap();

        assert!(cart.remove_line(5).is_none());
        assert!(!cart.update_quantity(5, 2));
        assert!(!cart.update_quantity(5, 0));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = Cart::new();
        cart.add_item(&momos(), None).unwrap();
        assert!(cart.update_quantity(0, 3));
        assert_eq!(cart.lines()[0].line_total(), 450.0);
        assert_eq!(cart.total(), 450.0);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add_item(&momos(), None).unwrap();
        cart.add_item(&pasta(), Some(SizeVariant::Half)).unwrap();
        assert!(cart.update_quantity(0, 5_000_000_000));
        assert_eq!(cart.lines()[0].quantity, u32::MAX);

        assert_eq!(cart.add_item(&momos(), None).unwrap(), 0);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);

        cart.add_item(&momos(), None).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_to_order_line_snapshots_the_line() {
        let mut cart = Cart::new();
        cart.add_item(&pasta(), Some(SizeVariant::Half)).unwrap();
        let line = cart.lines()[0].to_order_line(&OrderId::from("order_1"));

        assert_eq!(line.order_id, OrderId::from("order_1"));
        assert_eq!(line.menu_item_id, Some(MenuItemId::from("m2")));
        assert_eq!(line.item_name, "Paneer Pasta");
        assert_eq!(line.size, Some(SizeVariant::Half));
        assert_eq!(line.unit_price, 80.0);
    }
}
