//! Response Time - Pairwise preference survey scored by response latency
//!
//! Participants choose between pairs of keywords, then between pairs of
//! options under each keyword. Response times become comparison
//! intensities, comparison matrices become geometric-mean weights, and the
//! weights combine into one score per option.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use app::SurveyApp;
