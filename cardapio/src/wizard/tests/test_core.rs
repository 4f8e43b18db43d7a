use super::*;

#[test]
fn test_advance_blocked_without_selection() {
    let mut wizard = create_wizard(specs::bolo_andar());

    assert!(!wizard.is_step_valid());
    assert_eq!(wizard.advance(), Err(WizardError::StepIncomplete));
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn test_advance_after_selection() {
    let mut wizard = create_wizard(specs::bolo_andar());

    wizard.select_size("2-andares").unwrap();
    assert!(wizard.is_step_valid());
    wizard.advance().unwrap();
    assert_eq!(wizard.step_index(), 1);
}

#[test]
fn test_back_always_allowed_except_first() {
    let mut wizard = create_wizard(specs::bolo_andar());

    assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));

    wizard.select_size("2-andares").unwrap();
    wizard.advance().unwrap();
    // No dough selected, back still works
    assert!(!wizard.is_step_valid());
    wizard.back().unwrap();
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn test_unknown_options_rejected() {
    let mut wizard = create_wizard(specs::bolo_andar());

    assert!(matches!(
        wizard.select_size("4-andares"),
        Err(WizardError::UnknownOption(_))
    ));
    assert!(matches!(
        wizard.select_batter("Red Velvet"),
        Err(WizardError::UnknownOption(_))
    ));
    assert!(matches!(
        wizard.toggle_filling("Pistache"),
        Err(WizardError::UnknownOption(_))
    ));
}

#[test]
fn test_filling_cap_is_a_silent_no_op() {
    let mut wizard = create_wizard(specs::bolo_andar());

    // Count is 1 by default
    wizard.toggle_filling("Brigadeiro").unwrap();
    wizard.toggle_filling("4 Leites").unwrap();
    assert_eq!(wizard.selection().fillings, vec!["Brigadeiro"]);

    // Raising the count admits the second one
    wizard.set_filling_count(2);
    wizard.toggle_filling("4 Leites").unwrap();
    assert_eq!(wizard.selection().fillings.len(), 2);

    // A third is ignored again
    wizard.toggle_filling("Chocolate").unwrap();
    assert_eq!(wizard.selection().fillings.len(), 2);

    // Deselecting always works
    wizard.toggle_filling("Brigadeiro").unwrap();
    assert_eq!(wizard.selection().fillings, vec!["4 Leites"]);
}

#[test]
fn test_shrinking_filling_count_truncates_selection() {
    let mut wizard = create_wizard(specs::bolo_andar());

    wizard.set_filling_count(2);
    wizard.toggle_filling("Brigadeiro").unwrap();
    wizard.toggle_filling("4 Leites").unwrap();

    wizard.set_filling_count(1);
    assert_eq!(wizard.selection().fillings, vec!["Brigadeiro"]);
}

#[test]
fn test_mode_switch_clears_slot() {
    let mut wizard = create_wizard(specs::docinhos());

    wizard.set_mode(Mode::Delivery);
    wizard.select_slot("13:30").unwrap();
    assert_eq!(wizard.selection().slot.as_deref(), Some("13:30"));

    wizard.set_mode(Mode::Pickup);
    assert_eq!(wizard.selection().slot, None);

    // The delivery slot set is not valid for pickup
    assert!(matches!(
        wizard.select_slot("13:30"),
        Err(WizardError::UnknownOption(_))
    ));
    wizard.select_slot("11:00").unwrap();
}

#[test]
fn test_quantity_minimum_blocks_advance() {
    let mut wizard = create_wizard(specs::cupcake());

    wizard.select_kind("simples").unwrap();
    wizard.set_quantity(8);
    assert!(!wizard.is_step_valid());
    assert_eq!(wizard.advance(), Err(WizardError::StepIncomplete));

    wizard.set_quantity(10);
    assert!(wizard.is_step_valid());
    wizard.advance().unwrap();
}

#[test]
fn test_cupcake_filling_step_skipped_for_plain_kind() {
    let mut wizard = create_wizard(specs::cupcake());

    wizard.select_kind("simples").unwrap();
    wizard.set_quantity(12);
    wizard.advance().unwrap();

    // Landed on the date step, not the filling pick
    assert!(matches!(
        wizard.current_step(),
        StepSpec::DeliveryDate { .. }
    ));
    assert_eq!(wizard.step_index(), 2);

    // And back returns to the first step
    wizard.back().unwrap();
    assert_eq!(wizard.step_index(), 0);
}

#[test]
fn test_cupcake_filling_step_reached_for_filled_kind() {
    let mut wizard = create_wizard(specs::cupcake());

    wizard.select_kind("recheado").unwrap();
    wizard.set_quantity(10);
    wizard.advance().unwrap();

    assert!(matches!(wizard.current_step(), StepSpec::KindFilling { .. }));
    assert!(!wizard.is_step_valid());
    wizard.select_kind_filling("Brigadeiro").unwrap();
    wizard.advance().unwrap();
    assert!(matches!(
        wizard.current_step(),
        StepSpec::DeliveryDate { .. }
    ));
}

#[test]
fn test_delivery_date_lead_time() {
    let mut wizard = create_wizard(specs::bolo_andar());

    assert_eq!(
        wizard.set_delivery_date(days_out(3)),
        Err(WizardError::DateTooSoon(4))
    );
    assert_eq!(wizard.selection().delivery_date, None);

    wizard.set_delivery_date(days_out(4)).unwrap();
    assert_eq!(wizard.selection().delivery_date, Some(days_out(4)));
}

#[test]
fn test_same_day_lead_accepted_where_configured() {
    let mut wizard = create_wizard(specs::bolo_retangular());
    wizard.set_delivery_date(days_out(0)).unwrap();

    let mut wizard = create_wizard(specs::bolo_aquario());
    wizard.set_delivery_date(days_out(0)).unwrap();
}

#[test]
fn test_fulfilment_requires_address_only_for_delivery() {
    let mut wizard = create_wizard(specs::bolo_andar());

    // Walk to the closing step
    wizard.select_size("2-andares").unwrap();
    wizard.advance().unwrap();
    wizard.select_batter("Chocolate").unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap(); // filling count defaults to 1
    wizard.toggle_filling("Brigadeiro").unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap(); // extras are optional
    wizard.set_delivery_date(days_out(5)).unwrap();
    wizard.advance().unwrap();
    assert!(matches!(wizard.current_step(), StepSpec::Fulfilment { .. }));

    // Pickup: only the slot is required
    assert!(!wizard.is_step_valid());
    wizard.select_slot("09:00 - 12:00").unwrap();
    assert!(wizard.is_step_valid());

    // Delivery: slot was cleared, address fields become required
    wizard.set_mode(Mode::Delivery);
    assert!(!wizard.is_step_valid());
    wizard.select_slot("09:00 - 12:00").unwrap();
    assert!(!wizard.is_step_valid());
    wizard.set_street("Rua das Flores");
    wizard.set_number("123");
    wizard.set_neighborhood("   ");
    assert!(!wizard.is_step_valid());
    wizard.set_neighborhood("Centro");
    assert!(wizard.is_step_valid());
}
