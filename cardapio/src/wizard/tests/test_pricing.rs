use super::*;

#[test]
fn test_tiered_cake_base_price() {
    let mut wizard = create_wizard(specs::bolo_andar());
    assert_eq!(wizard.total(), 0.0);

    wizard.select_size("2-andares").unwrap();
    assert_eq!(wizard.total(), 450.0);

    wizard.select_size("3-andares").unwrap();
    assert_eq!(wizard.total(), 750.0);
}

#[test]
fn test_gourmet_fillings_and_second_filling_fee() {
    let mut wizard = create_wizard(specs::bolo_andar());
    wizard.select_size("2-andares").unwrap();

    // Simple filling carries no surcharge
    wizard.toggle_filling("Brigadeiro").unwrap();
    assert_eq!(wizard.total(), 450.0);

    // Second filling: +10 flat, plus the gourmet surcharge itself
    wizard.set_filling_count(2);
    wizard.toggle_filling("Doce de Leite com Ameixa").unwrap();
    assert_eq!(wizard.total(), 450.0 + 10.0 + 30.0);
}

#[test]
fn test_extras_and_delivery_fee() {
    let mut wizard = create_wizard(specs::bolo_andar());
    wizard.select_size("2-andares").unwrap();
    wizard.toggle_extra("Pérolas").unwrap();
    wizard.toggle_extra("Morangos").unwrap();
    assert_eq!(wizard.total(), 450.0 + 10.0 + 20.0);

    wizard.set_mode(Mode::Delivery);
    assert_eq!(wizard.total(), 480.0 + 20.0);

    // Back to pickup drops the fee
    wizard.set_mode(Mode::Pickup);
    assert_eq!(wizard.total(), 480.0);
}

#[test]
fn test_topper_priced_by_size_tier() {
    let mut wizard = create_wizard(specs::bolo_retangular());
    wizard.select_size("33x25").unwrap();
    wizard.set_topper(Some("3d")).unwrap();
    assert_eq!(wizard.total(), 300.0 + 30.0);

    // Same topper on the small tier costs less
    wizard.select_size("25x20").unwrap();
    assert_eq!(wizard.total(), 200.0 + 25.0);

    // Declining the topper removes the charge
    wizard.set_topper(None).unwrap();
    assert_eq!(wizard.total(), 200.0);
}

#[test]
fn test_unit_priced_products() {
    let mut wizard = create_wizard(specs::cupcake());
    wizard.select_kind("simples").unwrap();
    wizard.set_quantity(12);
    assert_eq!(wizard.total(), 42.0);

    wizard.select_kind("recheado").unwrap();
    wizard.set_quantity(10);
    assert_eq!(wizard.total(), 40.0);
}

#[test]
fn test_docinhos_batch_flavor_and_fee() {
    let mut wizard = create_wizard(specs::docinhos());
    wizard.toggle_flavor("brigadeiro").unwrap();
    wizard.select_batch("120").unwrap();
    assert_eq!(wizard.total(), 168.0);

    // Ninho com Nutella adds a flat 20 regardless of batch
    wizard.toggle_flavor("ninhonutella").unwrap();
    assert_eq!(wizard.total(), 188.0);

    wizard.set_mode(Mode::Delivery);
    assert_eq!(wizard.total(), 208.0);
}

#[test]
fn test_marmita_per_unit_price_and_counted_extra() {
    let mut wizard = create_wizard(specs::bolo_marmita());
    wizard.select_batter("Chocolate").unwrap();
    wizard.set_quantity(12);
    assert_eq!(wizard.total(), 96.0);

    wizard.set_filling_count(2);
    wizard.toggle_filling("Brigadeiro").unwrap();
    wizard.toggle_filling("4 Leites").unwrap();
    assert_eq!(wizard.total(), 106.0);

    wizard.set_unit_extra(true);
    wizard.set_unit_extra_count(10);
    assert_eq!(wizard.total(), 106.0 + 15.0);

    // Marmita delivery carries no fee
    wizard.set_mode(Mode::Delivery);
    assert_eq!(wizard.total(), 121.0);

    // Disabling the add-on clears its contribution
    wizard.set_unit_extra(false);
    assert_eq!(wizard.total(), 106.0);
}

#[test]
fn test_aquario_fixed_base_and_free_delivery() {
    let mut wizard = create_wizard(specs::bolo_aquario());
    assert_eq!(wizard.total(), 150.0);

    wizard.set_filling_count(2);
    wizard.toggle_filling("Prestígio").unwrap();
    wizard.toggle_filling("Brigadeiro").unwrap();
    wizard.toggle_extra("Morangos").unwrap();
    // 150 + 20 (gourmet) + 10 (second filling) + 20 (extra), no delivery fee term
    assert_eq!(wizard.total(), 200.0);
}

#[test]
fn test_fixed_price_products() {
    let wizard = create_wizard(specs::bolo_piscina());
    assert_eq!(wizard.total(), 40.0);

    let wizard = create_wizard(specs::naked_cake());
    assert_eq!(wizard.total(), 120.0);

    let mut wizard = create_wizard(specs::bolo_vulcao());
    wizard.select_size("gigante").unwrap();
    assert_eq!(wizard.total(), 80.0);
}
