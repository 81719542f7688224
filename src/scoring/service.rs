//! Score and time projection.
//!
//! Stateless: the display values are a pure function of the raw counters
//! stored in `GameState` and the configured `ScoringRules`.
//!
//! ```text
//! display_score = max(0, raw − recycles × 50 − ⌊elapsed / 10⌋ × 2)
//! display_time  = mm:ss
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameState, ScoringRules};

/// What the view shows for score and clock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDisplay {
    pub score: u32,
    pub time: String,
}

/// Derives display values from raw counters. Owns no mutable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoringService {
    rules: ScoringRules,
}

impl ScoringService {
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Raw score minus recycle and time penalties, floored at zero.
    #[must_use]
    pub fn display_score(&self, raw: u32, recycle_count: u32, elapsed_seconds: u32) -> u32 {
        let interval = self.rules.time_penalty_interval_secs.max(1);
        let recycle_penalty = u64::from(recycle_count) * u64::from(self.rules.recycle_penalty);
        let time_penalty = u64::from(elapsed_seconds / interval) * u64::from(self.rules.time_penalty);
        let score = u64::from(raw).saturating_sub(recycle_penalty + time_penalty);
        // score <= raw, so it fits.
        score as u32
    }

    /// Points earned by one applied move.
    ///
    /// `from_waste`: the card left the waste. `revealed`: a face-down
    /// tableau card was flipped. `to_foundation`: the card landed on a
    /// foundation.
    #[must_use]
    pub fn move_points(&self, from_waste: bool, revealed: bool, to_foundation: bool) -> u32 {
        let mut points = 0;
        if from_waste {
            points += self.rules.waste_move;
        }
        if revealed {
            points += self.rules.reveal;
        }
        if to_foundation {
            points += self.rules.foundation;
        }
        points
    }

    /// Project a state into its display values.
    #[must_use]
    pub fn project(&self, state: &GameState) -> ScoreDisplay {
        ScoreDisplay {
            score: self.display_score(state.score, state.recycle_count, state.elapsed_seconds),
            time: display_time(state.elapsed_seconds),
        }
    }
}

/// Elapsed seconds as zero-padded `mm:ss`. Minutes keep counting past 59.
#[must_use]
pub fn display_time(elapsed_seconds: u32) -> String {
    format!("{:02}:{:02}", elapsed_seconds / 60, elapsed_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_penalties() {
        let scoring = ScoringService::default();
        assert_eq!(scoring.display_score(0, 0, 0), 0);
        assert_eq!(scoring.display_score(125, 0, 9), 125);
    }

    #[test]
    fn test_time_penalty_per_ten_seconds() {
        let scoring = ScoringService::default();
        assert_eq!(scoring.display_score(100, 0, 10), 98);
        assert_eq!(scoring.display_score(100, 0, 19), 98);
        assert_eq!(scoring.display_score(100, 0, 20), 96);
    }

    #[test]
    fn test_recycle_penalty() {
        let scoring = ScoringService::default();
        assert_eq!(scoring.display_score(200, 1, 0), 150);
        assert_eq!(scoring.display_score(200, 2, 35), 94);
    }

    #[test]
    fn test_floor_at_zero() {
        let scoring = ScoringService::default();
        assert_eq!(scoring.display_score(40, 1, 0), 0);
        assert_eq!(scoring.display_score(0, 0, 3600), 0);
        assert_eq!(scoring.display_score(u32::MAX, u32::MAX, u32::MAX), 0);
    }

    #[test]
    fn test_move_points() {
        let scoring = ScoringService::default();
        assert_eq!(scoring.move_points(true, false, false), 5);
        assert_eq!(scoring.move_points(true, false, true), 55);
        assert_eq!(scoring.move_points(false, true, true), 70);
        assert_eq!(scoring.move_points(false, true, false), 20);
        assert_eq!(scoring.move_points(false, false, false), 0);
    }

    #[test]
    fn test_display_time() {
        assert_eq!(display_time(0), "00:00");
        assert_eq!(display_time(9), "00:09");
        assert_eq!(display_time(61), "01:01");
        assert_eq!(display_time(3599), "59:59");
        assert_eq!(display_time(3600), "60:00");
    }

    #[test]
    fn test_custom_rules() {
        let rules = ScoringRules {
            recycle_penalty: 100,
            time_penalty_interval_secs: 0,
            ..ScoringRules::default()
        };
        let scoring = ScoringService::new(rules);
        // A zero interval is treated as one second.
        assert_eq!(scoring.display_score(300, 1, 5), 190);
        assert_eq!(scoring.rules().recycle_penalty, 100);
    }
}
