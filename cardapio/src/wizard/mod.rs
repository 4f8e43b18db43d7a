//! Product configurator engine
//!
//! One engine drives every product dialog on the menu. A [`ProductSpec`]
//! is an ordered list of [`StepSpec`]s, each carrying its option table;
//! the [`Wizard`] walks the customer through them, gating forward
//! navigation on per-step validity and accumulating a running price.
//!
//! Invalid selections are not errors to recover from: they simply keep
//! `advance()`/`confirm()` from succeeding until corrected. Closing a
//! wizard mid-flow discards all progress.

use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use shared::catalog::ProductImage;
use shared::order::{Address, CartItem, Fulfilment};
use shared::util::item_id;

use crate::pricing::money::{to_decimal, to_f64};

pub mod specs;

#[cfg(test)]
mod tests;

// ==================== Option Tables ====================

/// Size / tier choice; sets the base price
#[derive(Debug, Clone)]
pub struct SizeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub price: f64,
}

/// Filling with a per-filling surcharge (0 for the simple list)
#[derive(Debug, Clone)]
pub struct FillingOption {
    pub name: &'static str,
    pub surcharge: f64,
}

/// Decoration add-on with a flat price
#[derive(Debug, Clone)]
pub struct ExtraOption {
    pub name: &'static str,
    pub price: f64,
}

/// Topper type priced per size tier
#[derive(Debug, Clone)]
pub struct TopperOption {
    pub id: &'static str,
    pub name: &'static str,
    /// (size id, price) pairs
    pub prices: &'static [(&'static str, f64)],
}

impl TopperOption {
    fn price_for(&self, size_id: &str) -> f64 {
        self.prices
            .iter()
            .find(|(id, _)| *id == size_id)
            .map(|(_, price)| *price)
            .unwrap_or(0.0)
    }
}

/// Product sub-type priced per unit (e.g. cupcake Simples / Recheado)
#[derive(Debug, Clone)]
pub struct KindOption {
    pub id: &'static str,
    pub name: &'static str,
    pub unit_price: f64,
}

/// Fixed batch size with a flat price (e.g. "50 docinhos")
#[derive(Debug, Clone)]
pub struct BatchOption {
    pub id: &'static str,
    pub name: &'static str,
    pub units: u32,
    pub price: f64,
}

/// Multi-select flavor, optionally with a flat surcharge
#[derive(Debug, Clone)]
pub struct FlavorOption {
    pub id: &'static str,
    pub name: &'static str,
    pub surcharge: f64,
}

/// Image attached to the configured item
#[derive(Debug, Clone)]
pub struct ItemImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub description: &'static str,
}

/// Which text the configured item's size line uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeDisplay {
    #[default]
    Name,
    /// e.g. Bolo Vulcão reports "Rende de 15 a 20 fatias", not "Tradicional"
    Description,
}

/// How the configured item's display name is derived from the product name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameSuffix {
    #[default]
    None,
    /// "Bolo Vulcão" + " Gigante"
    Size,
    /// "Cupcake" + " Recheado"
    Kind,
}

// ==================== Step Specifications ====================

/// One step of a product dialog, with its option table and validation rule
#[derive(Debug, Clone)]
pub enum StepSpec {
    /// Single-choice size tier; the selected tier is the base price
    Size {
        options: Vec<SizeOption>,
        display: SizeDisplay,
    },
    /// Single-choice dough ("massa")
    Batter { options: Vec<&'static str> },
    /// 1 or 2 fillings; the second carries a flat fee
    FillingCount { second_fee: f64 },
    /// Multi-select capped at the configured filling count
    Fillings {
        simple: Vec<&'static str>,
        gourmet: Vec<FillingOption>,
    },
    /// Multi-select decoration add-ons, uncapped
    Extras { options: Vec<ExtraOption> },
    /// Optional topper: explicit yes/no, then a type priced per size
    Topper { options: Vec<TopperOption> },
    /// Sub-type radio plus quantity input on one step; price = unit × quantity
    KindQuantity {
        options: Vec<KindOption>,
        min_quantity: u32,
    },
    /// Single filling pick shown only for the listed kinds (skipped otherwise)
    KindFilling {
        options: Vec<&'static str>,
        for_kinds: &'static [&'static str],
    },
    /// Multi-select flavors, some with a flat surcharge
    Flavors { options: Vec<FlavorOption> },
    /// Fixed batch sizes with flat prices
    Batch { options: Vec<BatchOption> },
    /// Dough radio plus quantity input on one step; price = unit × quantity
    BatterQuantity {
        options: Vec<&'static str>,
        min_quantity: u32,
        unit_price: f64,
    },
    /// Per-unit counted add-on (e.g. brigadeiros at R$1.50 each)
    UnitExtra {
        name: &'static str,
        unit_price: f64,
    },
    /// Calendar pick gated on a product-specific minimum lead
    DeliveryDate { min_lead_days: i64 },
    /// Pickup-or-delivery closing step; slot sets may differ per mode
    Fulfilment {
        pickup_slots: Vec<&'static str>,
        delivery_slots: Vec<&'static str>,
        delivery_fee: f64,
        require_slot: bool,
    },
    /// Delivery-only closing step: address plus slot, no fee
    DeliveryAddress { slots: Vec<&'static str> },
}

/// Rule table for one product dialog
#[derive(Debug, Clone)]
pub struct ProductSpec {
    /// Id prefix for generated cart items (also the catalog id)
    pub slug: &'static str,
    pub name: &'static str,
    pub name_suffix: NameSuffix,
    /// Base price for products without a Size/Kind/Batch step
    pub fixed_price: Option<f64>,
    /// Fixed size line for single-size products
    pub fixed_size: Option<&'static str>,
    pub steps: Vec<StepSpec>,
    pub images: Vec<ItemImage>,
}

// ==================== Errors ====================

/// Why an operation on the wizard did not go through
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("current step requirements are not met")]
    StepIncomplete,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("already at the last step")]
    AtLastStep,
    #[error("delivery date must be at least {0} day(s) ahead")]
    DateTooSoon(i64),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

// ==================== Selection State ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Pickup,
    Delivery,
}

/// Everything the customer has chosen so far
#[derive(Debug, Clone)]
pub struct Selection {
    pub size: Option<String>,
    pub batter: Option<String>,
    pub filling_count: u32,
    pub fillings: Vec<String>,
    pub extras: Vec<String>,
    pub topper_wanted: Option<bool>,
    pub topper: Option<String>,
    pub kind: Option<String>,
    pub kind_filling: Option<String>,
    pub flavors: Vec<String>,
    pub batch: Option<String>,
    pub quantity: Option<u32>,
    pub unit_extra_enabled: bool,
    pub unit_extra_count: Option<u32>,
    pub delivery_date: Option<NaiveDate>,
    pub mode: Mode,
    pub slot: Option<String>,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub complement: String,
    pub note: Option<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            size: None,
            batter: None,
            // One filling unless the customer asks for two
            filling_count: 1,
            fillings: Vec::new(),
            extras: Vec::new(),
            topper_wanted: None,
            topper: None,
            kind: None,
            kind_filling: None,
            flavors: Vec::new(),
            batch: None,
            quantity: None,
            unit_extra_enabled: false,
            unit_extra_count: None,
            delivery_date: None,
            mode: Mode::Pickup,
            slot: None,
            street: String::new(),
            number: String::new(),
            neighborhood: String::new(),
            complement: String::new(),
            note: None,
        }
    }
}

// ==================== Wizard ====================

/// Multi-step configurator for one product
pub struct Wizard {
    spec: ProductSpec,
    today: NaiveDate,
    step: usize,
    selection: Selection,
}

impl Wizard {
    pub fn new(spec: ProductSpec) -> Self {
        Self::with_today(spec, Local::now().date_naive())
    }

    /// Pin "today" for deterministic lead-time checks
    pub fn with_today(spec: ProductSpec, today: NaiveDate) -> Self {
        Self {
            spec,
            today,
            step: 0,
            selection: Selection::default(),
        }
    }

    pub fn spec(&self) -> &ProductSpec {
        &self.spec
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.spec.steps.len()
    }

    pub fn current_step(&self) -> &StepSpec {
        &self.spec.steps[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        // No applicable step after the current one
        ((self.step + 1)..self.spec.steps.len()).all(|i| self.step_skipped(i))
    }

    /// Steps that do not apply to the current selection (e.g. the cupcake
    /// filling pick when the plain kind is chosen)
    fn step_skipped(&self, index: usize) -> bool {
        match &self.spec.steps[index] {
            StepSpec::KindFilling { for_kinds, .. } => match &self.selection.kind {
                Some(kind) => !for_kinds.contains(&kind.as_str()),
                None => false,
            },
            _ => false,
        }
    }

    // ==================== Navigation ====================

    /// Move to the next applicable step; requires the current step to be valid
    pub fn advance(&mut self) -> Result<(), WizardError> {
        if !self.is_step_valid() {
            return Err(WizardError::StepIncomplete);
        }
        let next = ((self.step + 1)..self.spec.steps.len()).find(|i| !self.step_skipped(*i));
        match next {
            Some(index) => {
                self.step = index;
                Ok(())
            }
            None => Err(WizardError::AtLastStep),
        }
    }

    /// Move to the previous applicable step; always allowed except on the first
    pub fn back(&mut self) -> Result<(), WizardError> {
        let prev = (0..self.step).rev().find(|i| !self.step_skipped(*i));
        match prev {
            Some(index) => {
                self.step = index;
                Ok(())
            }
            None => Err(WizardError::AtFirstStep),
        }
    }

    // ==================== Step Validity ====================

    /// Whether the current step's required selections are present
    pub fn is_step_valid(&self) -> bool {
        self.step_valid(self.step)
    }

    fn step_valid(&self, index: usize) -> bool {
        if self.step_skipped(index) {
            return true;
        }
        let sel = &self.selection;
        match &self.spec.steps[index] {
            StepSpec::Size { .. } => sel.size.is_some(),
            StepSpec::Batter { .. } => sel.batter.is_some(),
            StepSpec::FillingCount { .. } => sel.filling_count > 0,
            StepSpec::Fillings { .. } => !sel.fillings.is_empty(),
            StepSpec::Extras { .. } => true,
            StepSpec::Topper { .. } => match sel.topper_wanted {
                Some(true) => sel.topper.is_some(),
                Some(false) => true,
                None => false,
            },
            StepSpec::KindQuantity { min_quantity, .. } => {
                sel.kind.is_some() && sel.quantity.is_some_and(|q| q >= *min_quantity)
            }
            StepSpec::KindFilling { .. } => sel.kind_filling.is_some(),
            StepSpec::Flavors { .. } => !sel.flavors.is_empty(),
            StepSpec::Batch { .. } => sel.batch.is_some(),
            StepSpec::BatterQuantity { min_quantity, .. } => {
                sel.batter.is_some() && sel.quantity.is_some_and(|q| q >= *min_quantity)
            }
            StepSpec::UnitExtra { .. } => !sel.unit_extra_enabled || sel.unit_extra_count.is_some(),
            StepSpec::DeliveryDate { min_lead_days } => sel
                .delivery_date
                .is_some_and(|date| date >= self.today + Duration::days(*min_lead_days)),
            StepSpec::Fulfilment { require_slot, .. } => {
                if *require_slot && sel.slot.is_none() {
                    return false;
                }
                match sel.mode {
                    Mode::Pickup => true,
                    Mode::Delivery => self.address_complete(),
                }
            }
            StepSpec::DeliveryAddress { .. } => sel.slot.is_some() && self.address_complete(),
        }
    }

    fn address_complete(&self) -> bool {
        let sel = &self.selection;
        !sel.street.trim().is_empty()
            && !sel.number.trim().is_empty()
            && !sel.neighborhood.trim().is_empty()
    }

    // ==================== Selection Setters ====================

    pub fn select_size(&mut self, id: &str) -> Result<(), WizardError> {
        let option = self
            .size_options()
            .and_then(|options| options.iter().find(|o| o.id == id))
            .ok_or_else(|| WizardError::UnknownOption(id.to_string()))?;
        self.selection.size = Some(option.id.to_string());
        Ok(())
    }

    pub fn select_batter(&mut self, name: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::Batter { options } | StepSpec::BatterQuantity { options, .. } => {
                options.contains(&name)
            }
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(name.to_string()));
        }
        self.selection.batter = Some(name.to_string());
        Ok(())
    }

    /// Set the filling count; shrinking the count truncates the selection so
    /// it never exceeds the cap
    pub fn set_filling_count(&mut self, count: u32) {
        self.selection.filling_count = count;
        let cap = count as usize;
        if self.selection.fillings.len() > cap {
            self.selection.fillings.truncate(cap);
        }
    }

    /// Toggle a filling. Selecting past the configured count is silently
    /// ignored; deselecting always works.
    pub fn toggle_filling(&mut self, name: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::Fillings { simple, gourmet } => {
                simple.contains(&name) || gourmet.iter().any(|g| g.name == name)
            }
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(name.to_string()));
        }
        let fillings = &mut self.selection.fillings;
        if let Some(pos) = fillings.iter().position(|f| f == name) {
            fillings.remove(pos);
        } else if fillings.len() < self.selection.filling_count as usize {
            fillings.push(name.to_string());
        }
        Ok(())
    }

    pub fn toggle_extra(&mut self, name: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::Extras { options } => options.iter().any(|o| o.name == name),
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(name.to_string()));
        }
        let extras = &mut self.selection.extras;
        if let Some(pos) = extras.iter().position(|e| e == name) {
            extras.remove(pos);
        } else {
            extras.push(name.to_string());
        }
        Ok(())
    }

    /// Answer the topper question: `None` declines, `Some(id)` picks a type
    pub fn set_topper(&mut self, choice: Option<&str>) -> Result<(), WizardError> {
        match choice {
            None => {
                self.selection.topper_wanted = Some(false);
                self.selection.topper = None;
                Ok(())
            }
            Some(id) => {
                let option = self
                    .topper_options()
                    .and_then(|options| options.iter().find(|o| o.id == id))
                    .ok_or_else(|| WizardError::UnknownOption(id.to_string()))?;
                self.selection.topper_wanted = Some(true);
                self.selection.topper = Some(option.id.to_string());
                Ok(())
            }
        }
    }

    pub fn select_kind(&mut self, id: &str) -> Result<(), WizardError> {
        let option = self
            .kind_options()
            .and_then(|options| options.iter().find(|o| o.id == id))
            .ok_or_else(|| WizardError::UnknownOption(id.to_string()))?;
        self.selection.kind = Some(option.id.to_string());
        Ok(())
    }

    pub fn select_kind_filling(&mut self, name: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::KindFilling { options, .. } => options.contains(&name),
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(name.to_string()));
        }
        self.selection.kind_filling = Some(name.to_string());
        Ok(())
    }

    pub fn toggle_flavor(&mut self, id: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::Flavors { options } => options.iter().any(|o| o.id == id),
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(id.to_string()));
        }
        let flavors = &mut self.selection.flavors;
        if let Some(pos) = flavors.iter().position(|f| f == id) {
            flavors.remove(pos);
        } else {
            flavors.push(id.to_string());
        }
        Ok(())
    }

    pub fn select_batch(&mut self, id: &str) -> Result<(), WizardError> {
        let option = self
            .batch_options()
            .and_then(|options| options.iter().find(|o| o.id == id))
            .ok_or_else(|| WizardError::UnknownOption(id.to_string()))?;
        self.selection.batch = Some(option.id.to_string());
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.selection.quantity = Some(quantity);
    }

    /// Enable or disable the counted add-on; disabling clears the count
    pub fn set_unit_extra(&mut self, enabled: bool) {
        self.selection.unit_extra_enabled = enabled;
        if !enabled {
            self.selection.unit_extra_count = None;
        }
    }

    pub fn set_unit_extra_count(&mut self, count: u32) {
        self.selection.unit_extra_count = Some(count);
    }

    /// Pick the delivery date; dates inside the product's lead window are
    /// rejected (the calendar disables them)
    pub fn set_delivery_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        let lead = self
            .spec
            .steps
            .iter()
            .find_map(|step| match step {
                StepSpec::DeliveryDate { min_lead_days } => Some(*min_lead_days),
                _ => None,
            })
            .unwrap_or(0);
        if date < self.today + Duration::days(lead) {
            return Err(WizardError::DateTooSoon(lead));
        }
        self.selection.delivery_date = Some(date);
        Ok(())
    }

    /// Switch between pickup and delivery. The chosen time slot is cleared
    /// because the slot sets differ between modes.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.selection.mode != mode {
            self.selection.mode = mode;
            self.selection.slot = None;
        }
    }

    /// Pick a time slot from the set belonging to the current mode
    pub fn select_slot(&mut self, slot: &str) -> Result<(), WizardError> {
        let known = self.spec.steps.iter().any(|step| match step {
            StepSpec::Fulfilment {
                pickup_slots,
                delivery_slots,
                ..
            } => match self.selection.mode {
                Mode::Pickup => pickup_slots.contains(&slot),
                Mode::Delivery => delivery_slots.contains(&slot),
            },
            StepSpec::DeliveryAddress { slots } => slots.contains(&slot),
            _ => false,
        });
        if !known {
            return Err(WizardError::UnknownOption(slot.to_string()));
        }
        self.selection.slot = Some(slot.to_string());
        Ok(())
    }

    pub fn set_street(&mut self, value: &str) {
        self.selection.street = value.to_string();
    }

    pub fn set_number(&mut self, value: &str) {
        self.selection.number = value.to_string();
    }

    pub fn set_neighborhood(&mut self, value: &str) {
        self.selection.neighborhood = value.to_string();
    }

    pub fn set_complement(&mut self, value: &str) {
        self.selection.complement = value.to_string();
    }

    pub fn set_note(&mut self, note: &str) {
        self.selection.note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
    }

    // ==================== Option Lookups ====================

    fn size_options(&self) -> Option<&Vec<SizeOption>> {
        self.spec.steps.iter().find_map(|step| match step {
            StepSpec::Size { options, .. } => Some(options),
            _ => None,
        })
    }

    fn topper_options(&self) -> Option<&Vec<TopperOption>> {
        self.spec.steps.iter().find_map(|step| match step {
            StepSpec::Topper { options } => Some(options),
            _ => None,
        })
    }

    fn kind_options(&self) -> Option<&Vec<KindOption>> {
        self.spec.steps.iter().find_map(|step| match step {
            StepSpec::KindQuantity { options, .. } => Some(options),
            _ => None,
        })
    }

    fn batch_options(&self) -> Option<&Vec<BatchOption>> {
        self.spec.steps.iter().find_map(|step| match step {
            StepSpec::Batch { options } => Some(options),
            _ => None,
        })
    }

    fn selected_size(&self) -> Option<&SizeOption> {
        let id = self.selection.size.as_deref()?;
        self.size_options()?.iter().find(|o| o.id == id)
    }

    fn selected_kind(&self) -> Option<&KindOption> {
        let id = self.selection.kind.as_deref()?;
        self.kind_options()?.iter().find(|o| o.id == id)
    }

    fn selected_batch(&self) -> Option<&BatchOption> {
        let id = self.selection.batch.as_deref()?;
        self.batch_options()?.iter().find(|o| o.id == id)
    }

    // ==================== Pricing ====================

    /// Running total: base/tier price + gourmet surcharges + extras +
    /// second-filling fee + topper tier + per-unit add-ons + delivery fee
    /// when delivery is selected
    pub fn total(&self) -> f64 {
        let sel = &self.selection;
        let mut total = Decimal::ZERO;

        if let Some(fixed) = self.spec.fixed_price {
            total += to_decimal(fixed);
        }

        for step in &self.spec.steps {
            match step {
                StepSpec::Size { .. } => {
                    if let Some(size) = self.selected_size() {
                        total += to_decimal(size.price);
                    }
                }
                StepSpec::FillingCount { second_fee } => {
                    if sel.filling_count == 2 {
                        total += to_decimal(*second_fee);
                    }
                }
                StepSpec::Fillings { gourmet, .. } => {
                    for filling in &sel.fillings {
                        if let Some(option) = gourmet.iter().find(|g| g.name == filling) {
                            total += to_decimal(option.surcharge);
                        }
                    }
                }
                StepSpec::Extras { options } => {
                    for extra in &sel.extras {
                        if let Some(option) = options.iter().find(|o| o.name == extra) {
                            total += to_decimal(option.price);
                        }
                    }
                }
                StepSpec::Topper { options } => {
                    if sel.topper_wanted == Some(true) {
                        if let (Some(topper_id), Some(size_id)) =
                            (sel.topper.as_deref(), sel.size.as_deref())
                        {
                            if let Some(option) = options.iter().find(|o| o.id == topper_id) {
                                total += to_decimal(option.price_for(size_id));
                            }
                        }
                    }
                }
                StepSpec::KindQuantity { .. } => {
                    if let Some(kind) = self.selected_kind() {
                        let quantity = Decimal::from(sel.quantity.unwrap_or(0));
                        total += to_decimal(kind.unit_price) * quantity;
                    }
                }
                StepSpec::Flavors { options } => {
                    for flavor in &sel.flavors {
                        if let Some(option) = options.iter().find(|o| o.id == flavor) {
                            total += to_decimal(option.surcharge);
                        }
                    }
                }
                StepSpec::Batch { .. } => {
                    if let Some(batch) = self.selected_batch() {
                        total += to_decimal(batch.price);
                    }
                }
                StepSpec::BatterQuantity { unit_price, .. } => {
                    let quantity = Decimal::from(sel.quantity.unwrap_or(0));
                    total += to_decimal(*unit_price) * quantity;
                }
                StepSpec::UnitExtra { unit_price, .. } => {
                    if sel.unit_extra_enabled {
                        let count = Decimal::from(sel.unit_extra_count.unwrap_or(0));
                        total += to_decimal(*unit_price) * count;
                    }
                }
                StepSpec::Fulfilment { delivery_fee, .. } => {
                    if sel.mode == Mode::Delivery {
                        total += to_decimal(*delivery_fee);
                    }
                }
                StepSpec::Batter { .. }
                | StepSpec::KindFilling { .. }
                | StepSpec::DeliveryDate { .. }
                | StepSpec::DeliveryAddress { .. } => {}
            }
        }

        to_f64(total)
    }

    // ==================== Confirm / Cancel ====================

    /// Validate every step, build the configured cart item and reset.
    ///
    /// The caller appends the item to the cart and closes the dialog.
    pub fn confirm(&mut self) -> Result<CartItem, WizardError> {
        for index in 0..self.spec.steps.len() {
            if !self.step_valid(index) {
                return Err(WizardError::StepIncomplete);
            }
        }

        let item = self.build_item();
        self.reset();
        Ok(item)
    }

    /// Close without adding; resets identically to [`Wizard::confirm`]
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.step = 0;
        self.selection = Selection::default();
    }

    fn item_name(&self) -> String {
        match self.spec.name_suffix {
            NameSuffix::None => self.spec.name.to_string(),
            NameSuffix::Size => match self.selected_size() {
                Some(size) => format!("{} {}", self.spec.name, size.name),
                None => self.spec.name.to_string(),
            },
            NameSuffix::Kind => match self.selected_kind() {
                Some(kind) => format!("{} {}", self.spec.name, kind.name),
                None => self.spec.name.to_string(),
            },
        }
    }

    fn build_item(&self) -> CartItem {
        let sel = &self.selection;
        let total = self.total();
        let name = self.item_name();

        let size = self
            .selected_size()
            .map(|option| {
                let display = self
                    .spec
                    .steps
                    .iter()
                    .find_map(|step| match step {
                        StepSpec::Size { display, .. } => Some(*display),
                        _ => None,
                    })
                    .unwrap_or_default();
                match display {
                    SizeDisplay::Name => option.name.to_string(),
                    SizeDisplay::Description => {
                        option.description.unwrap_or(option.name).to_string()
                    }
                }
            })
            .or_else(|| self.spec.fixed_size.map(str::to_string));

        // Fillings line carries the capped fillings, the cupcake-style
        // single filling, and flavor names alike
        let mut fillings = sel.fillings.clone();
        if let Some(kind_filling) = &sel.kind_filling {
            if sel.kind.as_deref().is_some_and(|kind| {
                self.spec.steps.iter().any(|step| match step {
                    StepSpec::KindFilling { for_kinds, .. } => for_kinds.contains(&kind),
                    _ => false,
                })
            }) {
                fillings.push(kind_filling.clone());
            }
        }
        for flavor in &sel.flavors {
            let name = self.spec.steps.iter().find_map(|step| match step {
                StepSpec::Flavors { options } => {
                    options.iter().find(|o| o.id == flavor).map(|o| o.name)
                }
                _ => None,
            });
            if let Some(name) = name {
                fillings.push(name.to_string());
            }
        }

        let mut extras = sel.extras.clone();
        if sel.unit_extra_enabled {
            if let Some(step_name) = self.spec.steps.iter().find_map(|step| match step {
                StepSpec::UnitExtra { name, .. } => Some(*name),
                _ => None,
            }) {
                extras.push(step_name.to_string());
            }
        }

        let topper = if sel.topper_wanted == Some(true) {
            sel.topper.as_deref().and_then(|id| {
                self.topper_options()?
                    .iter()
                    .find(|o| o.id == id)
                    .map(|o| o.name.to_string())
            })
        } else {
            None
        };

        let quantity = sel
            .quantity
            .or_else(|| self.selected_batch().map(|batch| batch.units));

        let fulfilment = self.spec.steps.iter().find_map(|step| match step {
            StepSpec::Fulfilment { .. } => Some(match sel.mode {
                Mode::Pickup => Fulfilment::Pickup {
                    slot: sel.slot.clone(),
                },
                Mode::Delivery => Fulfilment::Delivery {
                    address: self.build_address(),
                    slot: sel.slot.clone(),
                },
            }),
            StepSpec::DeliveryAddress { .. } => Some(Fulfilment::Delivery {
                address: self.build_address(),
                slot: sel.slot.clone(),
            }),
            _ => None,
        });

        let images = self
            .spec
            .images
            .iter()
            .map(|image| ProductImage {
                src: image.src.to_string(),
                alt: image.alt.to_string(),
                description: image.description.to_string(),
                name: name.clone(),
                price: total,
            })
            .collect();

        CartItem {
            id: item_id(self.spec.slug),
            name,
            price: total,
            batter: sel.batter.clone(),
            size,
            fillings,
            extras,
            topper,
            kind: self.selected_kind().map(|kind| kind.name.to_string()),
            quantity,
            delivery_date: sel
                .delivery_date
                .map(|date| date.format("%d/%m/%Y").to_string()),
            fulfilment,
            note: sel.note.clone(),
            images,
        }
    }

    fn build_address(&self) -> Address {
        let sel = &self.selection;
        Address {
            street: sel.street.trim().to_string(),
            number: sel.number.trim().to_string(),
            neighborhood: sel.neighborhood.trim().to_string(),
            complement: if sel.complement.trim().is_empty() {
                None
            } else {
                Some(sel.complement.trim().to_string())
            },
        }
    }
}
