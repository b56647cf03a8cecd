//! Data grid core library
//!
//! A renderer-agnostic pagination, sorting and search engine for tabular
//! data. The [`Grid`] controller owns an in-memory set of [`model::Record`]s
//! and produces plain [`view::PageView`] values that a rendering layer (DOM,
//! terminal, anything) turns into an actual table.

pub mod column;
pub mod error;
pub mod model;
pub mod pager;
pub mod settings;
pub mod sort;
pub mod view;

mod grid;

pub use column::{Column, SortOrder, SortSpec};
pub use error::GridError;
pub use grid::Grid;
pub use model::{Record, Value};
pub use settings::GridSettings;
pub use view::{PageView, RowSlot, RowView};
