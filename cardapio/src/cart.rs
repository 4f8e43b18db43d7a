//! Cart
//!
//! Ordered in-memory list of configured items. Identical configurations
//! appear as separate entries; there is no dedup and no edit-in-place.
//! The drawer-visibility effect lives here: appending forces the panel
//! open so the customer sees what just landed.

use rust_decimal::Decimal;
use tracing::info;

use shared::order::CartItem;

use crate::pricing::money::{to_decimal, to_f64};

#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the cart panel is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append a configured item and force the panel open
    pub fn append(&mut self, item: CartItem) {
        info!(id = %item.id, name = %item.name, price = item.price, "item added to cart");
        self.items.push(item);
        self.open = true;
    }

    /// Remove the item at `index`; out-of-range is a no-op
    pub fn remove_at(&mut self, index: usize) {
        if index < self.items.len() {
            let item = self.items.remove(index);
            info!(id = %item.id, name = %item.name, "item removed from cart");
        }
    }

    /// Sum of every item's resolved price (display rounding only)
    pub fn total(&self) -> f64 {
        let total: Decimal = self.items.iter().map(|item| to_decimal(item.price)).sum();
        to_f64(total)
    }
}
