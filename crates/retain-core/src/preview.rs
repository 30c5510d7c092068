//! Interval formatting and per-rating previews
//!
//! Renders a scheduling offset as a compact human-readable duration
//! ("10m", "3h", "16d", "2mo") and bundles the four per-rating previews
//! the presentation layer shows on its rating buttons.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::card::Rating;

const MS_PER_MINUTE: f64 = 1000.0 * 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Format a duration as the largest fitting unit, rounded to the nearest
/// whole value: minutes under an hour, hours under a day, days under a
/// 30-day month, months beyond that.
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_milliseconds() as f64 / MS_PER_MINUTE;
    if minutes < MINUTES_PER_HOUR {
        return format!("{}m", minutes.round());
    }
    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return format!("{}h", hours.round());
    }
    let days = hours / HOURS_PER_DAY;
    if days < DAYS_PER_MONTH {
        return format!("{}d", days.round());
    }
    format!("{}mo", (days / DAYS_PER_MONTH).round())
}

/// Formatted "what happens if I press this" previews, one per rating.
///
/// Produced by [`Scheduler::preview`](crate::Scheduler::preview); purely
/// informational and never a substitute for the scheduled card itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPreviews {
    /// Preview for [`Rating::Again`]
    pub again: String,
    /// Preview for [`Rating::Hard`]
    pub hard: String,
    /// Preview for [`Rating::Good`]
    pub good: String,
    /// Preview for [`Rating::Easy`]
    pub easy: String,
}

impl RatingPreviews {
    /// Look up the preview string for a rating
    pub fn get(&self, rating: Rating) -> &str {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
