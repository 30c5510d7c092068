//! Card - The unit of memory being scheduled
//!
//! A card carries its FSRS memory state (stability, difficulty), its place
//! in the scheduling lifecycle (state, step), and its review bookkeeping
//! (reps, last/next review timestamps). The scheduler consumes a card and
//! returns an evolved copy; persistence belongs to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm;
use crate::params::Parameters;

/// Milliseconds in one day, used for elapsed-time conversion
pub(crate) const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

// ============================================================================
// CARD STATE
// ============================================================================

/// Scheduling lifecycle state of a card.
///
/// Cards start in `New`, pass through short-interval `Learning` steps,
/// graduate to long-interval `Review`, and drop into `Relearning` after a
/// lapse. There is no terminal state; `Review` and `Relearning` cycle
/// indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    /// Never reviewed; stability and difficulty not yet established
    #[default]
    New,
    /// Working through the learning steps before first graduation
    Learning,
    /// Graduated; scheduled by the forgetting-curve interval
    Review,
    /// Lapsed out of Review; working through the relearning steps
    Relearning,
}

impl CardState {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CardState::New => "new",
            CardState::Learning => "learning",
            CardState::Review => "review",
            CardState::Relearning => "relearning",
        }
    }
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CardState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(CardState::New),
            "learning" => Ok(CardState::Learning),
            "review" => Ok(CardState::Review),
            "relearning" => Ok(CardState::Relearning),
            _ => Err(format!("Unknown card state: {}", s)),
        }
    }
}

// ============================================================================
// RATING
// ============================================================================

/// Error returned when a numeric rating is outside 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rating value: {0} (expected 1-4)")]
pub struct InvalidRating(pub u8);

/// User-reported recall quality for a just-shown card.
///
/// The numeric values (1-4) match the FSRS grade convention and index the
/// initial-stability weights `w0..w3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Complete failure to recall
    Again = 1,
    /// Recalled with serious difficulty
    Hard = 2,
    /// Recalled after some hesitation
    Good = 3,
    /// Recalled effortlessly
    Easy = 4,
}

impl Rating {
    /// All ratings in grade order, for preview iteration
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Numeric grade value (1-4)
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Again),
            2 => Ok(Rating::Hard),
            3 => Ok(Rating::Good),
            4 => Ok(Rating::Easy),
            other => Err(InvalidRating(other)),
        }
    }
}

// ============================================================================
// CARD
// ============================================================================

/// A scheduled memorization item.
///
/// Invariants maintained by the scheduler:
/// - `difficulty` stays within [1, 10] once established (0 = not yet set)
/// - `stability` stays positive once established (0 = not yet set)
/// - `reps` increments exactly once per scheduling call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Memory stability in days: elapsed time at which recall drops to 90%
    pub stability: f64,
    /// Inherent difficulty (1.0 = easy, 10.0 = hard); 0.0 until established
    pub difficulty: f64,
    /// Scheduling lifecycle state
    pub state: CardState,
    /// Index into the active learning/relearning step sequence
    pub step: usize,
    /// Number of reviews performed
    pub reps: u32,
    /// When the card was last reviewed
    pub last_review: Option<DateTime<Utc>>,
    /// When the card next becomes due; `None` means due immediately
    pub next_review: Option<DateTime<Utc>>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            stability: 0.0,
            difficulty: 0.0,
            state: CardState::New,
            step: 0,
            reps: 0,
            last_review: None,
            next_review: None,
        }
    }
}

impl Card {
    /// Create a new card with all memory fields zeroed
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether this card is due for review at `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review.map(|t| t <= now).unwrap_or(true)
    }

    /// Fractional days elapsed since the last review, floored at zero.
    ///
    /// A card that has never been reviewed has no elapsed time.
    pub fn elapsed_days(&self, now: DateTime<Utc>) -> f64 {
        match self.last_review {
            Some(last) => ((now - last).num_milliseconds() as f64 / MS_PER_DAY).max(0.0),
            None => 0.0,
        }
    }

    /// Current probability of successful recall under the forgetting curve.
    ///
    /// Returns 0.0 for cards whose stability is not yet established.
    pub fn retrievability(&self, params: &Parameters, now: DateTime<Utc>) -> f64 {
        algorithm::retrievability(params, self.elapsed_days(now), self.stability)
    }
}

// ============================================================================
// TESTS
// ============================================================================
