//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod clue;
mod row;
mod scoring;

pub use clue::Clue;
pub use row::{Letter, Row, RowState};
pub use scoring::score;
