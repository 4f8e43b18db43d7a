use chrono::{Duration, NaiveDate};

use super::specs;
use super::*;

mod test_core;
mod test_pricing;

/// Fixed reference date so lead-time checks are deterministic
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn days_out(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

fn create_wizard(spec: ProductSpec) -> Wizard {
    Wizard::with_today(spec, today())
}
