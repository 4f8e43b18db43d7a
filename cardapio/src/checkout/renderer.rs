//! Order message renderer
//!
//! Renders the cart into the WhatsApp order message: a greeting, one
//! numbered block per item with its present attributes in fixed order,
//! and the grand total.

use shared::order::CartItem;

use crate::cart::Cart;
use crate::pricing::money::format_brl;

use super::message::MessageBuilder;

pub struct OrderMessageRenderer {
    greeting: String,
}

impl OrderMessageRenderer {
    pub fn new(greeting: String) -> Self {
        Self { greeting }
    }

    /// Render the full message body
    pub fn render(&self, cart: &Cart) -> String {
        let mut b = MessageBuilder::new();

        b.line(&self.greeting);
        b.blank();

        for (index, item) in cart.items().iter().enumerate() {
            self.render_item(&mut b, index, item);
            b.blank();
        }

        b.line(&format!("Total do Pedido: {}", format_brl(cart.total())));
        b.build()
    }

    /// One numbered block; absent attributes produce no line at all
    fn render_item(&self, b: &mut MessageBuilder, index: usize, item: &CartItem) {
        b.line(&format!("{}. {}", index + 1, item.name));
        b.field("Preço", &format_brl(item.price));
        b.field_opt("Massa", item.batter.as_deref());
        b.field_opt("Tamanho", item.size.as_deref());
        b.field_list("Recheios", &item.fillings);
        b.field_list("Adicionais", &item.extras);
        b.field_opt("Topper", item.topper.as_deref());
        if let Some(quantity) = item.quantity {
            b.field("Quantidade", &quantity.to_string());
        }
        b.field_opt("Data de Entrega", item.delivery_date.as_deref());
        if let Some(fulfilment) = &item.fulfilment {
            b.field("Tipo de Entrega", fulfilment.mode_label());
            b.field_opt("Horário", fulfilment.slot());
            if let Some(address) = fulfilment.address() {
                b.field("Endereço", &address.display_line());
            }
        }
        b.field_opt("Observação", item.note.as_deref());
    }
}
