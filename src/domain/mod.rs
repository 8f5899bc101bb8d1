//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `survey` - Items, pairs, decisions, and decision logs
//! - `analysis` - Pure scoring services (matrices, weights, scores)
//! - `report` - Two-sheet result workbook

pub mod analysis;
pub mod foundation;
pub mod report;
pub mod survey;
