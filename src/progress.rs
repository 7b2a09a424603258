//! Exploration progress.

/// Computes the explored share of the maze as a whole percentage, rounded down.
///
/// The result is clamped to `0..=100` and is `0` for a maze without open cells.
pub(crate) fn percent(explored: usize, total_open: usize) -> u8 {
    if total_open == 0 {
        return 0;
    }

    u8::try_from(explored.min(total_open) * 100 / total_open).unwrap_or(100)
}
