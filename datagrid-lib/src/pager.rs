//! Pager arithmetic
//!
//! Pure functions over (item count, items per page, current page). The grid
//! and any external pager widget both compute their button state from here.

/// Number of pages needed for `item_count` items at `per_page` per page.
///
/// Zero items means zero pages, not one. Callers treating page 1 as
/// in-range on an empty dataset must handle that themselves; see
/// [`Grid::render`](crate::Grid::render) for the one place that does.
///
/// `per_page` must be at least 1.
pub fn max_page(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page)
}

/// Which pager navigation actions are currently available.
///
/// The prev/next targets are always computed, even when the matching button
/// is disabled, so a rendering layer can keep its attributes consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    /// Whether the "first page" action is enabled.
    pub first_enabled: bool,
    /// Whether the "previous page" action is enabled.
    pub prev_enabled: bool,
    /// Whether the "next page" action is enabled.
    pub next_enabled: bool,
    /// Whether the "last page" action is enabled.
    pub last_enabled: bool,
    /// Target for the "previous page" action.
    pub prev_target: usize,
    /// Target for the "next page" action.
    pub next_target: usize,
    /// Target for the "last page" action; also the page count.
    pub last_page: usize,
}

impl PagerState {
    /// Computes the pager state for the given position.
    ///
    /// With a single page (or none) nothing is enabled. On page 1 only
    /// next/last are enabled, on the last page only first/prev, anywhere in
    /// between all four.
    pub fn compute(current_page: usize, item_count: usize, per_page: usize) -> Self {
        let last_page = max_page(item_count, per_page);

        let (first_enabled, prev_enabled, next_enabled, last_enabled) = if last_page <= 1 {
            (false, false, false, false)
        } else if current_page == 1 {
            (false, false, true, true)
        } else if current_page >= last_page {
            (true, true, false, false)
        } else {
            (true, true, true, true)
        };

        Self {
            first_enabled,
            prev_enabled,
            next_enabled,
            last_enabled,
            prev_target: current_page.saturating_sub(1),
            next_target: current_page + 1,
            last_page,
        }
    }
}
