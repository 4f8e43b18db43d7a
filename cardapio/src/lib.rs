//! # cardapio
//!
//! Digital menu engine for the Mãos de Fada bakery.
//!
//! The storefront itself is a thin shell; the substance lives in the
//! per-product configuration rule tables. Every product dialog of the
//! menu is an instance of one [`wizard::Wizard`] driven by a
//! [`wizard::ProductSpec`]: an ordered list of steps, each carrying its
//! option table and validation rule, contributing conditionally to the
//! final price.
//!
//! Modules:
//! - [`catalog`]: the static product cards shown on the storefront
//! - [`wizard`]: step engine plus the eleven product rule tables
//! - [`cart`]: in-memory order list with the drawer-visibility effect
//! - [`carousel`]: wrapping image cursor for product cards
//! - [`checkout`]: order message rendering and WhatsApp deep link
//! - [`storefront`]: session shell tying the above together

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod common;
pub mod pricing;
pub mod storefront;
pub mod wizard;

pub use cart::Cart;
pub use storefront::Storefront;
pub use wizard::{ProductSpec, Wizard, WizardError};
