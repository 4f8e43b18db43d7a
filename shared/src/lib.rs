//! Shared types for the Mãos de Fada digital menu
//!
//! Common types used across crates: catalog entries, configured
//! order items, fulfilment data and utility functions.

pub mod catalog;
pub mod order;
pub mod store;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use catalog::{PLACEHOLDER_IMAGE, Product, ProductImage};
pub use order::{Address, CartItem, Fulfilment};
pub use store::StoreInfo;
