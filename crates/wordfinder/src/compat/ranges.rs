//! # Range Helpers

use core::ops::Range;

/// Shift a range by a fixed offset.
///
/// ## Arguments
/// * `range` - the range, relative to some sub-text.
/// * `offset` - the position of that sub-text in its parent.
///
/// ## Returns
/// The range relative to the parent.
pub fn offset_range(
    range: Range<usize>,
    offset: usize,
) -> Range<usize> {
    Range {
        start: range.start + offset,
        end: range.end + offset,
    }
}
