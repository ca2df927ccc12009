//! Row types shared by the stores, the cart and the checkout flow.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
