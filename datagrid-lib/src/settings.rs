//! Grid configuration

use std::fmt;

use crate::column::Column;
use crate::model::Record;
use crate::model::Value;

/// Recommended per-page sizes for a page-size selector widget.
///
/// The grid itself accepts any positive per-page value; this set is what a
/// stock selector offers.
pub const PER_PAGE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Search predicate: does this record match the (trimmed) query?
pub type Searcher = Box<dyn Fn(&Record, &str) -> bool>;

/// Hook fired after a column sort, with the toggled column.
pub type SortHook = Box<dyn FnMut(&Column)>;

/// Hook fired on row selection, with the row's key-field value.
pub type RowSelectHook = Box<dyn FnMut(Option<&Value>)>;

/// Hook fired with a page number or count.
pub type PageHook = Box<dyn FnMut(usize)>;

/// Per-instance grid configuration.
///
/// Every field has a default; hooks default to no-ops and the searcher to an
/// always-false predicate, so an unconfigured grid pages quietly and matches
/// nothing. Settings are owned by their grid; nothing here is shared or
/// global.
///
/// # Example
///
/// ```
/// use datagrid_lib::GridSettings;
///
/// let settings = GridSettings::default()
///     .with_key_field("id")
///     .with_selectable_rows(true)
///     .with_per_page(20)
///     .with_searcher(|record, query| {
///         record
///             .get_str("name")
///             .is_some_and(|name| name.to_uppercase().contains(&query.to_uppercase()))
///     });
/// ```
pub struct GridSettings {
    /// Field whose value identifies a row; passed to `on_row_select`.
    pub key_field: String,
    /// Whether rows respond to selection.
    pub selectable_rows: bool,
    /// Records per page; must be at least 1.
    pub per_page: usize,
    /// Column descriptors; auto-generated at render time when empty.
    pub columns: Vec<Column>,
    /// Whether the rendering layer should show a footer at all.
    pub show_footer: bool,
    /// Whether the footer shows the "20 - 29 of 265" info string.
    pub show_page_info: bool,
    /// Whether the footer shows a per-page selector.
    pub show_per_page: bool,
    /// Whether the footer shows the stock pager.
    pub show_pager: bool,
    /// Search predicate run over every record of the full dataset.
    pub searcher: Searcher,
    /// Fired after a column sort.
    pub on_sort: SortHook,
    /// Fired when a selectable row is selected.
    pub on_row_select: RowSelectHook,
    /// Fired after the per-page size changes.
    pub on_per_page_change: PageHook,
    /// Fired after pager-driven navigation.
    pub on_pager_page: PageHook,
    /// Fired once when the grid is rendered, with the row count.
    pub on_init: PageHook,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            key_field: String::new(),
            selectable_rows: false,
            per_page: 10,
            columns: Vec::new(),
            show_footer: true,
            show_page_info: true,
            show_per_page: true,
            show_pager: true,
            searcher: Box::new(|_, _| false),
            on_sort: Box::new(|_| {}),
            on_row_select: Box::new(|_| {}),
            on_per_page_change: Box::new(|_| {}),
            on_pager_page: Box::new(|_| {}),
            on_init: Box::new(|_| {}),
        }
    }
}

impl GridSettings {
    /// Sets the key field.
    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    /// Enables or disables row selection.
    pub fn with_selectable_rows(mut self, selectable: bool) -> Self {
        self.selectable_rows = selectable;
        self
    }

    /// Sets the number of records per page.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Sets the column list.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Appends one column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Sets the footer visibility flags.
    pub fn with_footer(mut self, footer: bool, page_info: bool, per_page: bool, pager: bool) -> Self {
        self.show_footer = footer;
        self.show_page_info = page_info;
        self.show_per_page = per_page;
        self.show_pager = pager;
        self
    }

    /// Sets the search predicate.
    pub fn with_searcher(mut self, searcher: impl Fn(&Record, &str) -> bool + 'static) -> Self {
        self.searcher = Box::new(searcher);
        self
    }

    /// Sets the sort hook.
    pub fn on_sort(mut self, hook: impl FnMut(&Column) + 'static) -> Self {
        self.on_sort = Box::new(hook);
        self
    }

    /// Sets the row-select hook.
    pub fn on_row_select(mut self, hook: impl FnMut(Option<&Value>) + 'static) -> Self {
        self.on_row_select = Box::new(hook);
        self
    }

    /// Sets the per-page-change hook.
    pub fn on_per_page_change(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_per_page_change = Box::new(hook);
        self
    }

    /// Sets the pager navigation hook.
    pub fn on_pager_page(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_pager_page = Box::new(hook);
        self
    }

    /// Sets the grid-ready hook.
    pub fn on_init(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_init = Box::new(hook);
        self
    }
}

impl fmt::Debug for GridSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSettings")
            .field("key_field", &self.key_field)
            .field("selectable_rows", &self.selectable_rows)
            .field("per_page", &self.per_page)
            .field("columns", &self.columns)
            .field("show_footer", &self.show_footer)
            .field("show_page_info", &self.show_page_info)
            .field("show_per_page", &self.show_per_page)
            .field("show_pager", &self.show_pager)
            .finish_non_exhaustive()
    }
}
