//! Renderer collaborator contract
//!
//! The grid never draws anything itself; each paging operation produces a
//! [`PageView`] of plain data that a rendering layer turns into an actual
//! table. Views are snapshots: cells are already formatted, the pager state
//! is precomputed, and the row slice is padded to the per-page size.

use crate::column::Column;
use crate::column::SortSpec;
use crate::model::Record;
use crate::model::Value;
use crate::pager::PagerState;

/// Display label for a boolean cell.
pub fn bool_label(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// One slot in a page's row slice.
///
/// A page always has exactly `per_page` slots; when the dataset runs out,
/// the remaining slots are empty placeholders. The first placeholder is
/// flagged so a renderer can style the data/padding boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSlot {
    /// A record row.
    Row(RowView),
    /// An empty placeholder row.
    Empty {
        /// Whether this is the first placeholder after the data rows.
        first: bool,
    },
}

/// One record row, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Position of the record within the active set.
    pub index: usize,
    /// Formatted cell values, one per column.
    pub cells: Vec<String>,
    /// Value of the key field, when one is configured.
    pub key: Option<Value>,
    /// Whether the row responds to selection.
    pub selectable: bool,
}

/// Everything a rendering layer needs to draw the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// The page this view shows (1-based).
    pub page_number: usize,
    /// Row slots, padded to the per-page size.
    pub rows: Vec<RowSlot>,
    /// Pager button state for this position.
    pub pager: PagerState,
    /// Human-readable range string, e.g. `"10 - 19 of 65"`.
    pub display_info: String,
    /// 1-based index of the first shown record.
    pub first_shown_index: usize,
    /// Total number of records in the active set.
    pub row_count: usize,
}

impl PageView {
    /// The record rows of this page, without the padding slots.
    pub fn record_rows(&self) -> impl Iterator<Item = &RowView> {
        self.rows.iter().filter_map(|slot| match slot {
            RowSlot::Row(row) => Some(row),
            RowSlot::Empty { .. } => None,
        })
    }

    /// Number of empty placeholder slots on this page.
    pub fn empty_slots(&self) -> usize {
        self.rows
            .iter()
            .filter(|slot| matches!(slot, RowSlot::Empty { .. }))
            .count()
    }
}

/// Formats one cell: column formatter first, Yes/No labels for boolean
/// columns, otherwise the value's display form. Missing fields render as
/// the empty string.
pub(crate) fn format_cell(column: &Column, record: &Record) -> String {
    if let Some(formatter) = column.formatter() {
        return formatter(record);
    }
    match record.get(column.field_name()) {
        Some(Value::Bool(b)) if matches!(column.sort(), SortSpec::ByBool) => {
            bool_label(*b).to_string()
        }
        Some(value) => value.as_display(),
        None => String::new(),
    }
}
