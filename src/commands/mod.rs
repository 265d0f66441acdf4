//! Command implementations

pub mod share;
pub mod simple;

pub use share::{challenge_for, run_share};
pub use simple::run_simple;
