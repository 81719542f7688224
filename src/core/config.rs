//! Engine configuration.
//!
//! - `ScoringRules`: point values and penalties
//! - `EngineConfig`: seed, presentation hints, scoring
//!
//! Defaults reproduce standard Klondike scoring with a one-card draw.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Point values used by the scoring projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points per card moved off the waste.
    pub waste_move: u32,
    /// Points per tableau card flipped face-up by a move.
    pub reveal: u32,
    /// Points per card landing on a foundation.
    pub foundation: u32,
    /// Penalty per waste recycle.
    pub recycle_penalty: u32,
    /// Penalty per elapsed `time_penalty_interval_secs`.
    pub time_penalty: u32,
    /// Length of one time-penalty interval, in seconds.
    pub time_penalty_interval_secs: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            waste_move: 5,
            reveal: 20,
            foundation: 50,
            recycle_penalty: 50,
            time_penalty: 2,
            time_penalty_interval_secs: 10,
        }
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the deal RNG. `None` seeds from entropy.
    /// Same seed produces the same sequence of deals.
    pub seed: Option<u64>,

    /// How long the caller should keep the draw guard raised, in
    /// milliseconds. Advisory: the engine never measures time, the
    /// caller's timer calls `release_draw_guard` when it elapses.
    pub draw_debounce_ms: u64,

    /// How many waste cards the render snapshot exposes.
    pub waste_display_count: usize,

    pub scoring: ScoringRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_debounce_ms: 350,
            waste_display_count: 3,
            scoring: ScoringRules::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom draw debounce window.
    #[must_use]
    pub fn with_draw_debounce_ms(mut self, millis: u64) -> Self {
        self.draw_debounce_ms = millis;
        self
    }

    /// Create a new config exposing `count` waste cards to the view.
    #[must_use]
    pub fn with_waste_display_count(mut self, count: usize) -> Self {
        self.waste_display_count = count;
        self
    }

    /// Create a new config with custom scoring rules.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// The draw debounce window as a `Duration`.
    #[must_use]
    pub fn draw_debounce(&self) -> Duration {
        Duration::from_millis(self.draw_debounce_ms)
    }
}
