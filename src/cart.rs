//! In-memory order cart.
//!
//! Session-scoped only: nothing is persisted and nothing is sent anywhere.
//! The header shows the running count.

use crate::menu::MenuItem;

/// Items the guest has added this session, in add order.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<MenuItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and return the new count.
    pub fn add(&mut self, item: MenuItem) -> usize {
        self.items.push(item);
        self.items.len()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}
