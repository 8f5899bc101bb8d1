//! Command handlers, grouped by area.

pub mod survey;

pub use survey::*;
