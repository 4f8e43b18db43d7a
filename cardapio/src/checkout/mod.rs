//! Checkout
//!
//! Serializes the cart into the order message and builds the WhatsApp
//! deep link. Opening the link is the browser's business; producing it is
//! fire-and-forget with no delivery feedback.

pub mod link;
pub mod message;
pub mod renderer;

use tracing::info;

use shared::store::StoreInfo;

use crate::cart::Cart;

pub use link::whatsapp_link;
pub use message::MessageBuilder;
pub use renderer::OrderMessageRenderer;

/// Render the cart and return the deep link. `None` on an empty cart:
/// there is nothing to order.
pub fn place_order(cart: &Cart, store: &StoreInfo) -> Option<String> {
    if cart.is_empty() {
        return None;
    }
    let message = OrderMessageRenderer::new(store.greeting.clone()).render(cart);
    let url = whatsapp_link(&store.whatsapp_number, &message);
    info!(items = cart.len(), total = cart.total(), "order link built");
    Some(url)
}
