//! Command implementations.

pub mod dictionary;
pub mod puzzles;
pub mod validate;
