//! Common types and utilities shared by the writer and the deck builders.

pub mod style;
pub mod unit;
pub mod xml;

pub use style::RGBColor;
