//! Rule configuration.
//!
//! The defaults describe the standard game: stacks hold at most five
//! pieces, six captures win, and `n` pieces travel exactly `n` cells.
//! The board is always 6x6.
//!
//! ```
//! use focus_engine::core::{DistanceRule, RulesConfig};
//!
//! let config = RulesConfig::default().with_distance_rule(DistanceRule::UpTo);
//! assert_eq!(config.max_stack_height, 5);
//! assert!(config.distance_rule.allows(1, 2));
//! ```

use serde::{Deserialize, Serialize};

/// Default stack height limit.
pub const DEFAULT_MAX_STACK_HEIGHT: usize = 5;

/// Default number of captures that wins the game.
pub const DEFAULT_CAPTURE_GOAL: u32 = 6;

/// How far a stack of `n` pieces may travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceRule {
    /// Moving `n` pieces moves them exactly `n` cells.
    #[default]
    Exact,
    /// Moving `n` pieces moves them anywhere from 1 to `n` cells.
    UpTo,
}

impl DistanceRule {
    /// Check whether moving `count` pieces `distance` cells is allowed.
    #[must_use]
    pub const fn allows(self, distance: usize, count: usize) -> bool {
        match self {
            DistanceRule::Exact => distance == count,
            DistanceRule::UpTo => distance >= 1 && distance <= count,
        }
    }
}

/// Tunable rules for a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Tallest stack allowed once a move completes.
    pub max_stack_height: usize,

    /// Captured-piece count at which a player has won.
    pub capture_goal: u32,

    /// Movement distance rule.
    pub distance_rule: DistanceRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_stack_height: DEFAULT_MAX_STACK_HEIGHT,
            capture_goal: DEFAULT_CAPTURE_GOAL,
            distance_rule: DistanceRule::Exact,
        }
    }
}

impl RulesConfig {
    /// Set the stack height limit.
    ///
    /// # Panics
    ///
    /// Panics if `height` is 0.
    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        assert!(height > 0, "Stack height limit must be at least 1");
        self.max_stack_height = height;
        self
    }

    /// Set the number of captures needed to win.
    ///
    /// # Panics
    ///
    /// Panics if `goal` is 0.
    #[must_use]
    pub fn with_capture_goal(mut self, goal: u32) -> Self {
        assert!(goal > 0, "Capture goal must be at least 1");
        self.capture_goal = goal;
        self
    }

    /// Set the movement distance rule.
    #[must_use]
    pub fn with_distance_rule(mut self, rule: DistanceRule) -> Self {
        self.distance_rule = rule;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.max_stack_height, 5);
        assert_eq!(config.capture_goal, 6);
        assert_eq!(config.distance_rule, DistanceRule::Exact);
    }

    #[test]
    fn test_builder() {
        let config = RulesConfig::default()
            .with_max_stack_height(3)
            .with_capture_goal(2)
            .with_distance_rule(DistanceRule::UpTo);

        assert_eq!(config.max_stack_height, 3);
        assert_eq!(config.capture_goal, 2);
        assert_eq!(config.distance_rule, DistanceRule::UpTo);
    }

    #[test]
    fn test_distance_rules() {
        assert!(DistanceRule::Exact.allows(2, 2));
        assert!(!DistanceRule::Exact.allows(1, 2));
        assert!(!DistanceRule::Exact.allows(3, 2));

        assert!(DistanceRule::UpTo.allows(1, 2));
        assert!(DistanceRule::UpTo.allows(2, 2));
        assert!(!DistanceRule::UpTo.allows(3, 2));
        assert!(!DistanceRule::UpTo.allows(0, 2));
    }

    #[test]
    #[should_panic(expected = "Stack height limit must be at least 1")]
    fn test_zero_height_rejected() {
        let _ = RulesConfig::default().with_max_stack_height(0);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_capture_goal(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
