//! Catalog Models

use serde::{Deserialize, Serialize};

/// Fallback asset path for broken or missing image sources
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Product image (embedded in Product)
///
/// Each image carries its own display metadata so the product card can
/// reflect the in-focus variant's name and price instead of the base
/// product's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Asset path (e.g. "/bolo-de-andar.jpg")
    pub src: String,
    pub alt: String,
    pub description: String,
    pub name: String,
    /// Price shown while this image is in focus
    pub price: f64,
}

impl ProductImage {
    /// Asset path, falling back to the placeholder when empty
    pub fn src_or_placeholder(&self) -> &str {
        if self.src.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.src
        }
    }
}

/// Catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Base price shown on the card before any configuration
    pub price: f64,
    pub images: Vec<ProductImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_src_falls_back_to_placeholder() {
        let image = ProductImage {
            src: String::new(),
            alt: "Bolo".to_string(),
            description: "Bolo".to_string(),
            name: "Bolo".to_string(),
            price: 110.0,
        };
        assert_eq!(image.src_or_placeholder(), PLACEHOLDER_IMAGE);

        let image = ProductImage {
            src: "/redondo-17.jpeg".to_string(),
            ..image
        };
        assert_eq!(image.src_or_placeholder(), "/redondo-17.jpeg");
    }
}
