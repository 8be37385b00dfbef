//! Field simulation engine.
//!
//! This module implements the toroidal 2D cell field where the Game of Life
//! plays out, plus the classic seed patterns consumed by `Field::set_pattern`.

pub mod field;
pub mod patterns;

pub use field::{Field, FieldSnapshot};
