use anyhow::Context;
use chrono::{Duration, Local};

use cardapio::Storefront;
use cardapio::common::logger::init_logger;
use cardapio::wizard::Mode;

/// Scripted storefront session: configure a couple of products the way a
/// customer would, then print the WhatsApp order link.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("info", false)?;

    let mut storefront = Storefront::default();
    storefront.startup().await;

    for product in storefront.products() {
        tracing::info!(
            id = %product.id,
            name = %product.name,
            price = product.price,
            "catalog entry"
        );
    }

    let date = Local::now().date_naive() + Duration::days(5);

    // A two-tier cake delivered to an address
    let mut wizard = storefront
        .begin_order("bolo-andar")
        .context("bolo-andar missing from the catalog")?;
    wizard.select_size("2-andares")?;
    wizard.advance()?;
    wizard.select_batter("Chocolate")?;
    wizard.advance()?;
    wizard.set_filling_count(2);
    wizard.advance()?;
    wizard.toggle_filling("Brigadeiro")?;
    wizard.toggle_filling("Leite Ninho com Nutella")?;
    wizard.advance()?;
    wizard.toggle_extra("Pérolas")?;
    wizard.advance()?;
    wizard.set_delivery_date(date)?;
    wizard.advance()?;
    wizard.set_mode(Mode::Delivery);
    wizard.select_slot("14:00 - 17:00")?;
    wizard.set_street("Rua das Gaivotas");
    wizard.set_number("210");
    wizard.set_neighborhood("Centro");
    let item = wizard.confirm()?;
    tracing::info!(name = %item.name, price = item.price, "configured");
    tracing::debug!(item = %serde_json::to_string(&item)?, "cart item payload");
    storefront.add_to_cart(item);

    // A dozen cupcakes for pickup
    let mut wizard = storefront
        .begin_order("cupcake")
        .context("cupcake missing from the catalog")?;
    wizard.select_kind("recheado")?;
    wizard.set_quantity(12);
    wizard.advance()?;
    wizard.select_kind_filling("Brigadeiro")?;
    wizard.advance()?;
    wizard.set_delivery_date(date)?;
    let item = wizard.confirm()?;
    tracing::info!(name = %item.name, price = item.price, "configured");
    storefront.add_to_cart(item);

    let url = storefront
        .checkout()
        .context("cart unexpectedly empty")?;

    println!();
    println!("Pedido pronto ({} itens, total R${:.2}):", storefront.cart().len(), storefront.cart().total());
    println!("{url}");

    Ok(())
}
