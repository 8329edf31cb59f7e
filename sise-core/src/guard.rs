use sise_types::{CoherenceBand, FieldRole, Guards};

/// Whether a numeric candidate is plausible for `role` under `guards`.
///
/// Non-finite values are always rejected. A role with no configured range
/// (market cap by default) accepts any finite value.
#[must_use]
pub fn accepts(value: f64, role: FieldRole, guards: &Guards) -> bool {
    if !value.is_finite() {
        return false;
    }
    match guards.range(role) {
        Some(range) => {
            value >= range.min
                && value <= range.max
                && range.max_abs_delta.is_none_or(|limit| value.abs() <= limit)
        }
        None => true,
    }
}

/// Whether a previous-value candidate is coherent with the current value.
///
/// `previous` must lie within `band.low`–`band.high` times `current`; this
/// rejects an unrelated large number elsewhere in the document (a spurious
/// 68,000 next to a current value of 6,800) from being mistaken for
/// yesterday's close. A zero or non-finite current value rejects everything.
#[must_use]
pub fn coherent(current: f64, previous: f64, band: CoherenceBand) -> bool {
    if !current.is_finite() || !previous.is_finite() || current == 0.0 {
        return false;
    }
    let a = current * band.low;
    let b = current * band.high;
    previous >= a.min(b) && previous <= a.max(b)
}
