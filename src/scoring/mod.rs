//! Scoring: stateless projection from raw counters to display values.

pub mod service;

pub use service::{display_time, ScoreDisplay, ScoringService};
