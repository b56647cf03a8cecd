//! Column descriptors

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::model::Record;

/// A comparator over two records, produced by a [`ComparatorFactory`].
pub type Comparator = Box<dyn Fn(&Record, &Record) -> Ordering>;

/// Factory for custom column comparators.
///
/// The factory receives the requested direction and returns the comparator
/// to run. The grid delegates to it directly, bypassing the built-in
/// strategies and their direction handling, so the factory owns the full
/// ordering contract.
pub type ComparatorFactory = Rc<dyn Fn(bool) -> Comparator>;

/// Formatter callback for a column's cell output.
pub type Formatter = Rc<dyn Fn(&Record) -> String>;

/// Current sort order of a column.
///
/// Exactly one order is active at a time. Toggling cycles
/// `None -> Asc -> Desc -> Asc`; once a column has been sorted it never
/// returns to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// The column has never been sorted.
    #[default]
    None,
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// How a column's data is sorted.
#[derive(Clone, Default)]
pub enum SortSpec {
    /// The column cannot be sorted.
    NoSort,
    /// Case-insensitive lexicographic compare over the display form.
    #[default]
    ByString,
    /// Numeric compare after a lenient integer parse.
    ByInt,
    /// Numeric compare after a lenient float parse.
    ByFloat,
    /// Chronological compare after a lenient date parse.
    ByDate,
    /// Sorts like [`SortSpec::ByString`]; cells render as Yes/No labels.
    ByBool,
    /// Caller-supplied comparator factory.
    Custom(ComparatorFactory),
}

impl fmt::Debug for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSpec::NoSort => write!(f, "NoSort"),
            SortSpec::ByString => write!(f, "ByString"),
            SortSpec::ByInt => write!(f, "ByInt"),
            SortSpec::ByFloat => write!(f, "ByFloat"),
            SortSpec::ByDate => write!(f, "ByDate"),
            SortSpec::ByBool => write!(f, "ByBool"),
            SortSpec::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Metadata describing how one record field is displayed and sorted.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{Column, SortSpec};
///
/// let columns = vec![
///     Column::new("company", "Company").with_width(40),
///     Column::new("employees", "Employees").with_sort(SortSpec::ByInt),
///     Column::new("notes", "Notes").with_sort(SortSpec::NoSort),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    field_name: String,
    display_name: String,
    /// Width percentage; 0 means auto.
    width: u8,
    sort: SortSpec,
    formatter: Option<Formatter>,
    sort_order: SortOrder,
}

impl Column {
    /// Creates a column for a field, defaulting to string sort, auto width
    /// and no formatter.
    ///
    /// Opting out of sorting is an explicit choice via
    /// [`with_sort`](Self::with_sort) with [`SortSpec::NoSort`]; the string
    /// default only applies when no sort spec is supplied at all.
    pub fn new(field_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            display_name: display_name.into(),
            width: 0,
            sort: SortSpec::default(),
            formatter: None,
            sort_order: SortOrder::None,
        }
    }

    /// Sets the column width as a percentage. All columns should add up
    /// to 100.
    pub fn with_width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    /// Sets the sort spec, including [`SortSpec::NoSort`].
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Sets a custom comparator factory for the column.
    pub fn with_comparator(mut self, factory: impl Fn(bool) -> Comparator + 'static) -> Self {
        self.sort = SortSpec::Custom(Rc::new(factory));
        self
    }

    /// Sets a formatter callback for the column's cell output.
    pub fn with_formatter(mut self, formatter: impl Fn(&Record) -> String + 'static) -> Self {
        self.formatter = Some(Rc::new(formatter));
        self
    }

    /// The name of the record field shown in this column.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The string used in the column header.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The column width percentage; 0 means auto.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The column's sort spec.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// The column's formatter callback, if set.
    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// The column's current sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Sets the current sort order directly.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Returns `true` unless the column opted out of sorting.
    pub fn is_sortable(&self) -> bool {
        !matches!(self.sort, SortSpec::NoSort)
    }

    /// Returns `true` iff the column is currently in ascending order.
    pub fn is_ascending(&self) -> bool {
        self.sort_order == SortOrder::Asc
    }

    /// Reverses the sort order, or sets it to ascending if the column is
    /// currently unordered. Pure state transition; applying the sort is the
    /// grid's job.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = match self.sort_order {
            SortOrder::None | SortOrder::Desc => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
        };
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field_name", &self.field_name)
            .field("display_name", &self.display_name)
            .field("width", &self.width)
            .field("sort", &self.sort)
            .field("formatter", &self.formatter.as_ref().map(|_| ".."))
            .field("sort_order", &self.sort_order)
            .finish()
    }
}
