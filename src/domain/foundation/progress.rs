//! Goal progress value object (0-100 scale) and its display tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Goal completion percentage, clamped to 0-100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// No progress.
    pub const ZERO: Self = Self(0);

    /// Goal complete.
    pub const COMPLETE: Self = Self(100);

    /// Creates a new Progress, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Progress, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "progress",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns the display tier for this progress value.
    ///
    /// Below 30 a goal is far behind (warning), below 70 it needs
    /// attention (caution), at 70 or above it is on track (good).
    pub fn tier(&self) -> ProgressTier {
        match self.0 {
            0..=29 => ProgressTier::Warning,
            30..=69 => ProgressTier::Caution,
            _ => ProgressTier::Good,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Display tier of a progress bar, a closed set rather than an open
/// style-class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    Good,
    Caution,
    Warning,
}

impl fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressTier::Good => "good",
            ProgressTier::Caution => "caution",
            ProgressTier::Warning => "warning",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn progress_new_accepts_valid_values() {
        assert_eq!(Progress::new(0).value(), 0);
        assert_eq!(Progress::new(65).value(), 65);
        assert_eq!(Progress::new(100).value(), 100);
    }

    #[test]
    fn progress_new_clamps_to_100() {
        assert_eq!(Progress::new(101).value(), 100);
        assert_eq!(Progress::new(255).value(), 100);
    }

    #[test]
    fn progress_try_new_rejects_over_100() {
        let result = Progress::try_new(101);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "progress");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn tier_boundaries_match_widget_breakpoints() {
        assert_eq!(Progress::new(0).tier(), ProgressTier::Warning);
        assert_eq!(Progress::new(29).tier(), ProgressTier::Warning);
        assert_eq!(Progress::new(30).tier(), ProgressTier::Caution);
        assert_eq!(Progress::new(69).tier(), ProgressTier::Caution);
        assert_eq!(Progress::new(70).tier(), ProgressTier::Good);
        assert_eq!(Progress::new(100).tier(), ProgressTier::Good);
    }

    #[test]
    fn progress_displays_with_percent_sign() {
        assert_eq!(format!("{}", Progress::new(65)), "65%");
        assert_eq!(format!("{}", Progress::ZERO), "0%");
    }

    #[test]
    fn progress_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Progress::new(40)).unwrap(), "40");
        let p: Progress = serde_json::from_str("80").unwrap();
        assert_eq!(p.value(), 80);
    }

    proptest! {
        #[test]
        fn clamped_value_always_in_range(raw in any::<u8>()) {
            let p = Progress::new(raw);
            prop_assert!(p.value() <= 100);
        }

        #[test]
        fn tier_is_total_and_consistent(raw in 0u8..=100) {
            let tier = Progress::new(raw).tier();
            if raw < 30 {
                prop_assert_eq!(tier, ProgressTier::Warning);
            } else if raw < 70 {
                prop_assert_eq!(tier, ProgressTier::Caution);
            } else {
                prop_assert_eq!(tier, ProgressTier::Good);
            }
        }
    }
}
