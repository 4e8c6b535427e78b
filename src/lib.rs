//! barcarte - a digital bar menu for the terminal
//!
//! Browse drink categories, add items to an in-memory cart, and get a
//! transient toast confirmation that can be swiped away with the mouse.

// Core modules
pub mod app;
pub mod cart;
pub mod cli;
pub mod components;
pub mod config;
pub mod menu;
pub mod styles;
pub mod toast;
pub mod tui;
pub mod widgets;

// Re-exports for convenience
pub use cart::Cart;
pub use config::Config;
pub use menu::{Catalog, Category, MenuItem};
pub use toast::{Phase, ToastController, ToastTimings};
