//! Stateful grid controller

use crate::column::Column;
use crate::error::GridError;
use crate::model::Record;
use crate::model::Value;
use crate::pager;
use crate::pager::PagerState;
use crate::settings::GridSettings;
use crate::sort;
use crate::view;
use crate::view::PageView;
use crate::view::RowSlot;
use crate::view::RowView;

/// A paginated, sortable, searchable view over an in-memory record set.
///
/// The grid owns its dataset, column list and paging position, and produces
/// [`PageView`] snapshots for a rendering layer. It is single-threaded and
/// synchronous: every operation runs to completion before the next, in the
/// order a UI event loop delivers them.
///
/// A grid is rendered exactly once. Loading new data into a live grid goes
/// through [`set_data`](Self::set_data) followed by a re-page.
///
/// # Example
///
/// ```
/// use datagrid_lib::{Grid, GridSettings, Record};
///
/// let records = vec![
///     Record::new().set("id", 1i64).set("company", "Acme"),
///     Record::new().set("id", 2i64).set("company", "Globex"),
/// ];
///
/// let mut grid = Grid::new(GridSettings::default());
/// let view = grid.render(records)?;
/// assert_eq!(view.display_info, "1 - 2 of 2");
/// # Ok::<(), datagrid_lib::GridError>(())
/// ```
#[derive(Debug)]
pub struct Grid {
    settings: GridSettings,
    /// The active set: full data, or the current search results.
    data: Vec<Record>,
    /// Backup of the full data while a search is active.
    original_data: Vec<Record>,
    display_info: String,
    first_shown_index: usize,
    row_count: usize,
    current_page: usize,
    has_been_rendered: bool,
}

impl Grid {
    /// Creates an unrendered grid with the given settings.
    pub fn new(settings: GridSettings) -> Self {
        Self {
            settings,
            data: Vec::new(),
            original_data: Vec::new(),
            display_info: String::new(),
            first_shown_index: 0,
            row_count: 0,
            current_page: 0,
            has_been_rendered: false,
        }
    }

    /// Creates an unrendered grid with default settings.
    pub fn with_defaults() -> Self {
        Self::new(GridSettings::default())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Binds the dataset and produces the first page.
    ///
    /// May be called exactly once per grid; a second call fails with
    /// [`GridError::AlreadyRendered`]. When no columns are configured, one
    /// column per field of the first record is generated, in field
    /// enumeration order, with the field name's first letter uppercased as
    /// the display name. Fires `on_init` with the row count.
    ///
    /// The first paging skips the page-bounds guard, so an empty dataset
    /// still lands on page 1 with all-empty rows even though
    /// [`pager::max_page`] says an empty dataset has zero pages.
    pub fn render(&mut self, records: Vec<Record>) -> Result<PageView, GridError> {
        if self.has_been_rendered {
            return Err(GridError::AlreadyRendered);
        }
        self.has_been_rendered = true;
        self.data = records;

        if self.settings.columns.is_empty() {
            self.generate_columns(None);
        }

        log::debug!(
            "[grid] rendering {} records across {} columns",
            self.data.len(),
            self.settings.columns.len()
        );
        (self.settings.on_init)(self.data.len());

        Ok(self.build_page(1))
    }

    /// Binds a dynamic JSON payload and produces the first page.
    ///
    /// The payload must be an array of objects; every other shape (string,
    /// number, boolean, null, a single object) fails with
    /// [`GridError::InvalidArgument`] before any state changes.
    pub fn render_json(&mut self, data: serde_json::Value) -> Result<PageView, GridError> {
        let items = match data {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Null => {
                return Err(GridError::invalid_argument(
                    "data must be an array of record objects, got null",
                ));
            }
            serde_json::Value::Bool(_) => {
                return Err(GridError::invalid_argument(
                    "data must be an array of record objects, got a boolean",
                ));
            }
            serde_json::Value::Number(_) => {
                return Err(GridError::invalid_argument(
                    "data must be an array of record objects, got a number",
                ));
            }
            serde_json::Value::String(_) => {
                return Err(GridError::invalid_argument(
                    "data must be an array of record objects, got a string",
                ));
            }
            serde_json::Value::Object(_) => {
                return Err(GridError::invalid_argument(
                    "data must be an array of record objects, got a single object",
                ));
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            if !item.is_object() {
                return Err(GridError::invalid_argument(
                    "every element of the data array must be a record object",
                ));
            }
            let record = serde_json::from_value(item).map_err(|e| {
                GridError::invalid_argument(format!("unsupported record field value: {e}"))
            })?;
            records.push(record);
        }

        self.render(records)
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Moves the grid to another page.
    ///
    /// Fails with [`GridError::NotRendered`] before the first render. A page
    /// number outside `[1, max_page]` is not an error: the call is ignored
    /// and `Ok(None)` comes back with no state change.
    pub fn page(&mut self, page_number: usize) -> Result<Option<PageView>, GridError> {
        if !self.has_been_rendered {
            return Err(GridError::NotRendered);
        }

        let last_page = pager::max_page(self.data.len(), self.settings.per_page);
        if page_number < 1 || page_number > last_page {
            log::trace!("[grid] ignoring out-of-range page {page_number} (last page {last_page})");
            return Ok(None);
        }

        Ok(Some(self.build_page(page_number)))
    }

    /// Pager-driven navigation: pages, then fires `on_pager_page` when the
    /// navigation actually happened.
    pub fn pager_page(&mut self, page_number: usize) -> Result<Option<PageView>, GridError> {
        let paged = self.page(page_number)?;
        if paged.is_some() {
            (self.settings.on_pager_page)(page_number);
        }
        Ok(paged)
    }

    /// Changes the per-page size and re-pages to page 1, then fires
    /// `on_per_page_change`. [`crate::settings::PER_PAGE_OPTIONS`] lists the
    /// recommended sizes, but any positive value is accepted.
    pub fn set_per_page(&mut self, per_page: usize) -> Result<Option<PageView>, GridError> {
        if per_page == 0 {
            return Err(GridError::invalid_argument("per_page must be at least 1"));
        }
        if !self.has_been_rendered {
            return Err(GridError::NotRendered);
        }

        self.settings.per_page = per_page;
        let paged = self.page(1)?;
        (self.settings.on_per_page_change)(per_page);
        Ok(paged)
    }

    /// Builds the view for an in-range (or first-render) page and commits
    /// the paging state.
    fn build_page(&mut self, page_number: usize) -> PageView {
        let per_page = self.settings.per_page;
        let start = (page_number - 1) * per_page;

        self.row_count = self.data.len();
        self.first_shown_index = start + 1;
        self.current_page = page_number;

        let mut rows = Vec::with_capacity(per_page);
        let mut shown = 0;
        for i in start..start + per_page {
            if i >= self.row_count {
                rows.push(RowSlot::Empty {
                    first: i == self.row_count,
                });
            } else {
                let record = &self.data[i];
                let cells = self
                    .settings
                    .columns
                    .iter()
                    .map(|column| view::format_cell(column, record))
                    .collect();
                let key = if self.settings.key_field.is_empty() {
                    None
                } else {
                    record.get(&self.settings.key_field).cloned()
                };
                rows.push(RowSlot::Row(RowView {
                    index: i,
                    cells,
                    key,
                    selectable: self.settings.selectable_rows,
                }));
                shown += 1;
            }
        }

        self.display_info = format!(
            "{} - {} of {}",
            self.first_shown_index,
            self.first_shown_index + shown - 1,
            self.row_count
        );
        log::debug!(
            "[grid] page {page_number}: {shown} of {} records, {}",
            self.row_count,
            self.display_info
        );

        PageView {
            page_number,
            rows,
            pager: PagerState::compute(page_number, self.row_count, per_page),
            display_info: self.display_info.clone(),
            first_shown_index: self.first_shown_index,
            row_count: self.row_count,
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Searches the full dataset with the configured predicate and returns
    /// the match count.
    ///
    /// The query is trimmed first. When a previous search is active, the
    /// full dataset is restored before filtering, so consecutive searches
    /// always filter the original data, never each other's results. At
    /// least one match swaps the results in and re-pages to page 1; zero
    /// matches leave the restored full dataset in place without re-paging.
    pub fn search(&mut self, query: &str) -> Result<usize, GridError> {
        if !self.has_been_rendered {
            return Err(GridError::NotRendered);
        }

        let needle = query.trim();
        if !self.original_data.is_empty() {
            self.data = std::mem::take(&mut self.original_data);
        }

        let matches: Vec<Record> = self
            .data
            .iter()
            .filter(|record| (self.settings.searcher)(record, needle))
            .cloned()
            .collect();
        let found = matches.len();
        log::debug!(
            "[grid] search {:?} matched {found} of {} records",
            needle,
            self.data.len()
        );

        if found > 0 {
            self.original_data = std::mem::replace(&mut self.data, matches);
            self.build_page(1);
        }

        Ok(found)
    }

    /// Clears any active search, restores the full dataset and re-pages to
    /// page 1.
    pub fn clear_search(&mut self) -> Result<Option<PageView>, GridError> {
        if !self.original_data.is_empty() {
            self.data = std::mem::take(&mut self.original_data);
        }
        self.page(1)
    }

    /// Returns `true` while a search filter is active.
    pub fn has_active_search(&self) -> bool {
        !self.original_data.is_empty()
    }

    // =========================================================================
    // Sorting and selection
    // =========================================================================

    /// Toggles a column's sort order, sorts the active set and re-pages to
    /// page 1, then fires `on_sort` with the column.
    ///
    /// An out-of-bounds index or an unsortable column is silently ignored
    /// (`Ok(None)`, no state change).
    pub fn toggle_column_sort(&mut self, column_index: usize) -> Result<Option<PageView>, GridError> {
        if !self.has_been_rendered {
            return Err(GridError::NotRendered);
        }
        let Some(column) = self.settings.columns.get_mut(column_index) else {
            return Ok(None);
        };
        if !column.is_sortable() {
            return Ok(None);
        }

        column.toggle_sort_order();
        let column = column.clone();
        log::debug!(
            "[grid] sorting by {:?} ({:?}, ascending={})",
            column.field_name(),
            column.sort(),
            column.is_ascending()
        );

        sort::apply(
            column.sort(),
            &mut self.data,
            column.field_name(),
            column.is_ascending(),
        );
        let paged = self.page(1)?;
        (self.settings.on_sort)(&column);
        Ok(paged)
    }

    /// Selects the record at `index` within the active set, firing
    /// `on_row_select` with its key-field value.
    ///
    /// Ignored unless selectable rows are enabled. The hook receives `None`
    /// when no key field is configured, the record lacks it, or the index is
    /// out of range; selection highlighting is the rendering layer's job.
    pub fn select_row(&mut self, index: usize) {
        if !self.settings.selectable_rows {
            return;
        }
        let key: Option<Value> = if self.settings.key_field.is_empty() {
            None
        } else {
            self.data
                .get(index)
                .and_then(|record| record.get(&self.settings.key_field))
                .cloned()
        };
        (self.settings.on_row_select)(key.as_ref());
    }

    // =========================================================================
    // Columns and data
    // =========================================================================

    /// Appends auto-generated columns to the settings.
    ///
    /// With `None`, one column per field of the first record, in field
    /// enumeration order. With `Some(keys)`, only the named fields, in the
    /// given order. Display names are the field names with the first letter
    /// uppercased.
    pub fn generate_columns(&mut self, keys: Option<&[&str]>) {
        let keys: Vec<String> = match keys {
            Some(keys) => keys.iter().map(|k| (*k).to_string()).collect(),
            None => self
                .data
                .first()
                .map(|record| record.field_names().map(str::to_string).collect())
                .unwrap_or_default(),
        };

        for key in keys {
            let display = capitalize_first(&key);
            self.settings.columns.push(Column::new(key, display));
        }
    }

    /// Replaces the active set with new records, dropping any search
    /// backup. The caller re-pages afterwards; this is the supported way to
    /// load fresh data into a rendered grid.
    pub fn set_data(&mut self, records: Vec<Record>) {
        self.data = records;
        self.original_data.clear();
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The records of the active set (full data or current search results).
    pub fn records(&self) -> &[Record] {
        &self.data
    }

    /// The configured columns.
    pub fn columns(&self) -> &[Column] {
        &self.settings.columns
    }

    /// The grid settings.
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// Mutable access to the grid settings.
    pub fn settings_mut(&mut self) -> &mut GridSettings {
        &mut self.settings
    }

    /// Range string for the current page, e.g. `"10 - 19 of 65"`.
    pub fn display_info(&self) -> &str {
        &self.display_info
    }

    /// 1-based index of the first shown record; 0 before the first render.
    pub fn first_shown_index(&self) -> usize {
        self.first_shown_index
    }

    /// Total number of records in the active set as of the last paging.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The current page number; 0 before the first render.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The number of the last page for the active set.
    pub fn last_page(&self) -> usize {
        pager::max_page(self.data.len(), self.settings.per_page)
    }

    /// Whether the grid has been rendered.
    pub fn has_rendered(&self) -> bool {
        self.has_been_rendered
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
