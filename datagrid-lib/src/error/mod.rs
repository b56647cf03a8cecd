//! Error types

mod grid;

pub use grid::*;
