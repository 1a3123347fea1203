/// Shift a selected position after the item at `deleted` was removed.
///
/// Selecting the removed item clears the selection; positions past it move
/// down by one.
pub fn adjust_selection_after_delete(selected: Option<usize>, deleted: usize) -> Option<usize> {
    match selected {
        Some(idx) if idx == deleted => None,
        Some(idx) if idx > deleted => Some(idx - 1),
        other => other,
    }
}

/// Keep a cursor inside a list of `len` rows
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        cursor.min(len - 1)
    }
}
