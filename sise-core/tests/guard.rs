use sise_core::{accepts, coherent};
use sise_types::{CoherenceBand, FieldRole, GuardRange, Guards};

#[test]
fn level_range_is_inclusive() {
    let guards = Guards::default();
    assert!(accepts(1_000.0, FieldRole::IndexLevel, &guards));
    assert!(accepts(60_000.0, FieldRole::IndexLevel, &guards));
    assert!(!accepts(999.99, FieldRole::IndexLevel, &guards));
    assert!(!accepts(60_000.01, FieldRole::IndexLevel, &guards));
}

#[test]
fn change_range_is_symmetric_around_zero() {
    let guards = Guards::default();
    assert!(accepts(-5_000.0, FieldRole::ChangeAmount, &guards));
    assert!(accepts(0.0, FieldRole::ChangeAmount, &guards));
    assert!(!accepts(5_000.5, FieldRole::ChangeAmount, &guards));
}

#[test]
fn unconfigured_market_cap_accepts_any_finite_value() {
    let guards = Guards::default();
    assert!(accepts(1e15, FieldRole::MarketCap, &guards));
    assert!(!accepts(f64::NAN, FieldRole::MarketCap, &guards));
    assert!(!accepts(f64::INFINITY, FieldRole::MarketCap, &guards));
}

#[test]
fn max_abs_delta_tightens_a_range() {
    let guards = Guards {
        change: GuardRange::new(-5_000.0, 5_000.0).with_max_abs_delta(100.0),
        ..Guards::default()
    };
    assert!(accepts(-99.0, FieldRole::ChangeAmount, &guards));
    assert!(!accepts(101.0, FieldRole::ChangeAmount, &guards));
}

#[test]
fn coherence_rejects_an_order_of_magnitude_gap() {
    let band = CoherenceBand::default();
    assert!(coherent(6_800.0, 6_836.17, band));
    assert!(!coherent(6_800.0, 68_000.0, band));
    assert!(!coherent(6_800.0, 680.0, band));
}

#[test]
fn coherence_handles_degenerate_current_values() {
    let band = CoherenceBand::default();
    assert!(!coherent(0.0, 100.0, band));
    assert!(!coherent(f64::NAN, 100.0, band));
    assert!(!coherent(100.0, f64::NAN, band));
}

#[test]
fn coherence_band_orients_itself_for_negative_values() {
    let band = CoherenceBand::default();
    // -100 * [0.5, 1.5] spans [-150, -50] once reoriented.
    assert!(coherent(-100.0, -100.0, band));
    assert!(coherent(-100.0, -140.0, band));
    assert!(!coherent(-100.0, -10.0, band));
}
