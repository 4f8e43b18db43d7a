//! Order Models
//!
//! A configured cart item is the output of a product configurator:
//! the resolved price plus whichever attributes the product collects.
//! Fulfilment is a sum type so a pickup order cannot carry an address.

use serde::{Deserialize, Serialize};

use crate::catalog::ProductImage;

/// Delivery address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
}

impl Address {
    /// Single-line display form: "rua, numero, bairro[, complemento]"
    pub fn display_line(&self) -> String {
        let mut line = format!("{}, {}, {}", self.street, self.number, self.neighborhood);
        if let Some(complement) = &self.complement {
            if !complement.is_empty() {
                line.push_str(", ");
                line.push_str(complement);
            }
        }
        line
    }
}

/// How the order leaves the store
///
/// Time slot sets differ between the two modes, so the slot lives inside
/// the variant rather than beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fulfilment {
    Pickup {
        /// Pickup time slot (e.g. "11:00"), empty for products without slots
        #[serde(skip_serializing_if = "Option::is_none")]
        slot: Option<String>,
    },
    Delivery {
        address: Address,
        #[serde(skip_serializing_if = "Option::is_none")]
        slot: Option<String>,
    },
}

impl Fulfilment {
    /// Customer-facing mode label, as printed on the order message
    pub fn mode_label(&self) -> &'static str {
        match self {
            Fulfilment::Pickup { .. } => "retirada",
            Fulfilment::Delivery { .. } => "entrega",
        }
    }

    pub fn slot(&self) -> Option<&str> {
        match self {
            Fulfilment::Pickup { slot } | Fulfilment::Delivery { slot, .. } => slot.as_deref(),
        }
    }

    pub fn address(&self) -> Option<&Address> {
        match self {
            Fulfilment::Pickup { .. } => None,
            Fulfilment::Delivery { address, .. } => Some(address),
        }
    }
}

/// Configured cart item
///
/// Only `id`, `name` and `price` are always present; the rest depends on
/// which steps the product's configurator ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Generated at add time (time-based, see [`crate::util::item_id`])
    pub id: String,
    pub name: String,
    /// Resolved price, all surcharges and fees included
    pub price: f64,
    /// Dough choice ("massa")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fillings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extras: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topper: Option<String>,
    /// Sub-type (e.g. "Simples" / "Recheado")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Formatted dd/MM/yyyy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfilment: Option<Fulfilment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<ProductImage>,
}

impl CartItem {
    /// Minimal item with every optional attribute unset
    pub fn new(id: String, name: String, price: f64) -> Self {
        Self {
            id,
            name,
            price,
            batter: None,
            size: None,
            fillings: Vec::new(),
            extras: Vec::new(),
            topper: None,
            kind: None,
            quantity: None,
            delivery_date: None,
            fulfilment: None,
            note: None,
            images: Vec::new(),
        }
    }
}
