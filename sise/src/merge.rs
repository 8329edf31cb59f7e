use sise_types::QuoteRow;

/// Concatenate independently resolved row groups into one ordered output.
///
/// Invariants:
/// - Entity order within a group is exactly the caller-declared order; no
///   sorting by value or otherwise.
/// - Groups are concatenated in declared sequence.
/// - A group that failed entirely still contributes its placeholder rows, so
///   the output never shrinks below the declared entity count.
#[must_use]
pub fn merge_groups(groups: Vec<Vec<QuoteRow>>) -> Vec<QuoteRow> {
    let total = groups.iter().map(Vec::len).sum();
    let mut rows = Vec::with_capacity(total);
    for group in groups {
        rows.extend(group);
    }
    rows
}
