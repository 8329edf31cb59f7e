use serde::{Deserialize, Serialize};

/// Arithmetic completion of `{current, change, previous}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Derived {
    /// Current value.
    pub current: Option<f64>,
    /// Previous session's value.
    pub previous: Option<f64>,
    /// Day-over-day change.
    pub change: Option<f64>,
    /// Day-over-day change in percent.
    pub change_pct: Option<f64>,
}

/// Complete the third operand from any two of `{current, change, previous}`.
///
/// The canonical direction is `previous = current − change`: when `current`
/// and `change` are both observed, the derived previous value *replaces* any
/// independently observed one (sources expose "change" more reliably than
/// "previous close", and derived fields need a single source of truth).
///
/// The percentage is `(current / previous − 1) × 100`, defined only when
/// both operands are present and `previous != 0`; otherwise it is absent —
/// not zero, and not an error.
#[must_use]
pub fn complete(current: Option<f64>, change: Option<f64>, previous: Option<f64>) -> Derived {
    let (current, change, previous) = match (current, change, previous) {
        (Some(cur), Some(chg), _) => (Some(cur), Some(chg), Some(cur - chg)),
        (Some(cur), None, Some(prev)) => (Some(cur), Some(cur - prev), Some(prev)),
        (None, Some(chg), Some(prev)) => (Some(prev + chg), Some(chg), Some(prev)),
        incomplete => incomplete,
    };

    let change_pct = match (current, previous) {
        (Some(cur), Some(prev)) if prev != 0.0 => Some((cur / prev - 1.0) * 100.0),
        _ => None,
    };

    Derived {
        current,
        previous,
        change,
        change_pct,
    }
}
