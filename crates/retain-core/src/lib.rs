//! # Retain Core
//!
//! Deterministic FSRS-5 review scheduling built on the three-component
//! memory model:
//!
//! - **Difficulty (D)**: inherent item hardness in [1, 10]
//! - **Stability (S)**: days until recall probability decays to 90%
//! - **Retrievability (R)**: instantaneous probability of recall
//!
//! The crate is the pure computational core of a spaced-repetition system:
//! `(card, rating, now, config) -> new card`. It holds no state, performs
//! no I/O, and never blocks; storage, sync, and presentation layers call
//! into it and persist what it returns.
//!
//! Reference: https://github.com/open-spaced-repetition/fsrs4anki/wiki/The-Algorithm
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use retain_core::{Card, Rating, Scheduler, SchedulerConfig};
//!
//! let scheduler = Scheduler::new(SchedulerConfig::default());
//! let card = Card::new();
//! let now = Utc::now();
//!
//! // Show the user what each button would do
//! let previews = scheduler.preview(&card, now);
//! assert_eq!(previews.good, "10m");
//!
//! // Commit a rating
//! let card = scheduler.schedule(&card, Rating::Good, now);
//! assert_eq!(card.reps, 1);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
// Only warn about missing docs for public items exported from the crate root
// Internal struct fields and enum variants don't need documentation
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod algorithm;
pub mod card;
pub mod config;
pub mod params;
pub mod preview;
pub mod scheduler;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Data model
pub use card::{Card, CardState, InvalidRating, Rating};

// Configuration
pub use config::{ConfigError, SchedulerConfig};

// Parameter set
pub use params::{Parameters, DECAY, DEFAULT_WEIGHTS, FACTOR, WEIGHT_COUNT};

// Memory model formulas for advanced usage
pub use algorithm::{
    init_difficulty, init_stability, next_interval, retrievability, stability_after_forgetting,
    stability_after_recall, update_difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY, MIN_INTERVAL_DAYS,
};

// Scheduling
pub use preview::{format_duration, RatingPreviews};
pub use scheduler::Scheduler;

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// FSRS algorithm generation implemented by this crate (19 weights)
pub const FSRS_VERSION: u8 = 5;

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Card, CardState, ConfigError, Parameters, Rating, RatingPreviews, Scheduler,
        SchedulerConfig,
    };
}
