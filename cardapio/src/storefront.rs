//! Storefront session
//!
//! The page shell minus the markup: catalog, cart and store info for one
//! browser-tab-sized session. Configurators are created on demand per
//! product and the cart drawer opens itself whenever something lands in
//! it. State lives for the session only; closing it discards everything.

use std::time::Duration;

use tracing::{debug, info};

use shared::catalog::Product;
use shared::order::CartItem;
use shared::store::StoreInfo;

use crate::carousel::Carousel;
use crate::cart::Cart;
use crate::catalog::catalog;
use crate::checkout;
use crate::wizard::{Wizard, specs};

/// Fixed splash delay before the catalog shows
pub const LOADING_DELAY: Duration = Duration::from_secs(2);

pub struct Storefront {
    store: StoreInfo,
    products: Vec<Product>,
    cart: Cart,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StoreInfo::default())
    }
}

impl Storefront {
    pub fn new(store: StoreInfo) -> Self {
        Self {
            store,
            products: catalog(),
            cart: Cart::new(),
        }
    }

    /// Simulated loading screen: a fixed, non-cancellable delay
    pub async fn startup(&self) {
        info!(store = %self.store.name, "loading storefront");
        tokio::time::sleep(LOADING_DELAY).await;
        info!(products = self.products.len(), "storefront ready");
    }

    pub fn store(&self) -> &StoreInfo {
        &self.store
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Image carousel for a product card
    pub fn carousel_for(&self, product_id: &str) -> Option<Carousel> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| Carousel::new(p.images.clone()))
    }

    /// Open the configurator dialog for a product card
    pub fn begin_order(&self, product_id: &str) -> Option<Wizard> {
        let spec = specs::spec_for(product_id)?;
        debug!(product = product_id, steps = spec.steps.len(), "configurator opened");
        Some(Wizard::new(spec))
    }

    /// Append a configured item; the cart drawer opens itself
    pub fn add_to_cart(&mut self, item: CartItem) {
        self.cart.append(item);
    }

    /// Build the WhatsApp order link; `None` while the cart is empty
    pub fn checkout(&self) -> Option<String> {
        checkout::place_order(&self.cart, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_product_has_a_configurator() {
        let storefront = Storefront::default();
        for product in storefront.products() {
            assert!(
                storefront.begin_order(&product.id).is_some(),
                "{} has no configurator",
                product.id
            );
        }
    }

    #[test]
    fn test_unknown_product_has_no_configurator() {
        let storefront = Storefront::default();
        assert!(storefront.begin_order("bolo-inexistente").is_none());
    }

    #[test]
    fn test_checkout_requires_a_non_empty_cart() {
        let mut storefront = Storefront::default();
        assert!(storefront.checkout().is_none());

        storefront.add_to_cart(CartItem::new(
            "bolo-piscina-1".to_string(),
            "Bolo Piscina".to_string(),
            40.0,
        ));
        assert!(storefront.cart().is_open());

        let url = storefront.checkout().unwrap();
        assert!(url.starts_with("https://api.whatsapp.com/send?phone=5567996184308&text="));
    }

    #[test]
    fn test_carousel_reports_variant_metadata() {
        let storefront = Storefront::default();
        let mut carousel = storefront.carousel_for("bolo-vulcao").unwrap();

        assert!(carousel.has_controls());
        assert_eq!(carousel.current().price, 45.0);
        assert_eq!(carousel.next().price, 80.0);

        // Single-image product hides the controls
        let carousel = storefront.carousel_for("bolo-piscina").unwrap();
        assert!(!carousel.has_controls());
    }
}
