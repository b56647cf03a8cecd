//! In-place sort strategies
//!
//! All strategies use the standard library's stable sort, so records with
//! equal keys keep their relative order in both directions. Direction is
//! applied by reversing the ascending ordering rather than swapping
//! operands; for a well-behaved comparator the two are identical.

use std::cmp::Ordering;

use crate::column::SortSpec;
use crate::model::Record;
use crate::model::Value;

/// Case-insensitive lexicographic sort over the display form of the field.
///
/// Non-string values are coerced through their natural string representation
/// before uppercasing, so this never fails for any input type.
pub fn by_string(records: &mut [Record], field: &str, ascending: bool) {
    sort_by_key(records, field, ascending, |v| {
        Some(v.as_display().to_uppercase())
    });
}

/// Numeric sort after a lenient integer parse.
pub fn by_int(records: &mut [Record], field: &str, ascending: bool) {
    sort_by_key(records, field, ascending, Value::as_i64_lossy);
}

/// Numeric sort after a lenient float parse.
pub fn by_float(records: &mut [Record], field: &str, ascending: bool) {
    sort_by_key(records, field, ascending, Value::as_f64_lossy);
}

/// Chronological sort after a lenient date parse.
pub fn by_date(records: &mut [Record], field: &str, ascending: bool) {
    sort_by_key(records, field, ascending, Value::as_datetime_lossy);
}

/// Dispatches a column's sort spec to the matching strategy.
///
/// Custom factories are handed the direction and take over entirely.
/// `ByBool` (and any spec without a dedicated strategy) falls through to the
/// string sort.
pub fn apply(sort: &SortSpec, records: &mut [Record], field: &str, ascending: bool) {
    log::trace!("[sort] {:?} on {:?}, ascending={}", sort, field, ascending);
    match sort {
        SortSpec::ByInt => by_int(records, field, ascending),
        SortSpec::ByFloat => by_float(records, field, ascending),
        SortSpec::ByDate => by_date(records, field, ascending),
        SortSpec::Custom(factory) => {
            let comparator = factory(ascending);
            records.sort_by(|a, b| comparator(a, b));
        }
        SortSpec::NoSort | SortSpec::ByString | SortSpec::ByBool => {
            by_string(records, field, ascending);
        }
    }
}

/// Stable in-place sort by an extracted key.
///
/// A `None` key (missing field, unparseable value, NaN) compares equal to
/// everything, matching the unordered-comparison semantics of NaN: such
/// records keep their relative positions instead of clustering.
fn sort_by_key<K: PartialOrd>(
    records: &mut [Record],
    field: &str,
    ascending: bool,
    key: impl Fn(&Value) -> Option<K>,
) {
    records.sort_by(|a, b| {
        let ka = a.get(field).and_then(&key);
        let kb = b.get(field).and_then(&key);
        let ord = match (ka, kb) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        if ascending { ord } else { ord.reverse() }
    });
}
