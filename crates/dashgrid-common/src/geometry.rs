//! Cell rectangle predicates.
//!
//! Spans are 1-based with exclusive end bounds, so a span touching another
//! at an edge (`a.end_row == b.start_row`) shares no cell with it.

use crate::types::CellSpan;

/// True when the span has no extent on some axis (end at or before start).
pub fn is_reversed(span: &CellSpan) -> bool {
    span.end_row <= span.start_row || span.end_column <= span.start_column
}

/// True when the span reaches past the grid. A `None` dimension leaves the
/// upper bound of that axis unchecked.
///
/// Any dimension up to `i64::MAX` is accepted; the bound never overflows.
pub fn is_outside(span: &CellSpan, row_count: Option<i64>, column_count: Option<i64>) -> bool {
    if span.start_row < 1 || span.start_column < 1 {
        return true;
    }
    let past =
        |end: i64, count: Option<i64>| count.is_some_and(|count| end > count.saturating_add(1));
    past(span.end_row, row_count) || past(span.end_column, column_count)
}

/// True when the open interiors of two spans intersect.
pub fn overlaps(a: &CellSpan, b: &CellSpan) -> bool {
    a.start_row < b.end_row
        && b.start_row < a.end_row
        && a.start_column < b.end_column
        && b.start_column < a.end_column
}
