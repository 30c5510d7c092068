//! Scheduling State Machine
//!
//! Drives card transitions (New -> Learning -> Review <-> Relearning) and
//! computes the next due time, delegating the memory math to
//! [`crate::algorithm`]. One handler per lifecycle state, each returning a
//! [`Transition`] that [`Scheduler::schedule`] applies uniformly, so the
//! transition table is testable per state rather than by control-flow
//! tracing.

use chrono::{DateTime, Duration, Utc};

use crate::algorithm::{
    init_difficulty, init_stability, next_interval, retrievability, stability_after_forgetting,
    stability_after_recall, update_difficulty,
};
use crate::card::{Card, CardState, Rating};
use crate::config::SchedulerConfig;
use crate::params::Parameters;
use crate::preview::{format_duration, RatingPreviews};

// ============================================================================
// TRANSITION
// ============================================================================

/// Outcome of rating a card in one state: the evolved memory fields, the
/// destination state/step, and how far in the future the card is due.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    stability: f64,
    difficulty: f64,
    state: CardState,
    step: usize,
    due_offset: Duration,
}

// ============================================================================
// SCHEDULER
// ============================================================================

/// The FSRS-5 review scheduler.
///
/// Holds an immutable parameter set and a validated configuration; every
/// operation is a pure function of its inputs, so a `Scheduler` is freely
/// shareable across threads.
#[derive(Debug, Clone)]
pub struct Scheduler {
    params: Parameters,
    config: SchedulerConfig,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler {
    /// Create a scheduler with the stock FSRS-5 parameter set
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_parameters(config, Parameters::default())
    }

    /// Create a scheduler with an explicit parameter set
    pub fn with_parameters(config: SchedulerConfig, params: Parameters) -> Self {
        Self { params, config }
    }

    /// The parameter set in use
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The configuration in use
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Apply a rating to a card at time `now`, returning the evolved card.
    ///
    /// The input is never mutated; the caller owns persistence of the
    /// returned value. Every call sets `last_review = now` and increments
    /// `reps`, whatever branch is taken.
    pub fn schedule(&self, card: &Card, rating: Rating, now: DateTime<Utc>) -> Card {
        // Computed once per call from the pre-update stability; only the
        // Review handler consumes it.
        let elapsed_days = card.elapsed_days(now);

        let transition = match card.state {
            CardState::New => self.rate_new(rating),
            CardState::Learning => self.rate_learning(card, rating, self.config.learning_steps()),
            CardState::Relearning => {
                self.rate_learning(card, rating, self.config.relearning_steps())
            }
            CardState::Review => self.rate_review(card, rating, elapsed_days),
        };

        tracing::debug!(
            from = %card.state,
            to = %transition.state,
            rating = %rating,
            stability = transition.stability,
            difficulty = transition.difficulty,
            "scheduled review"
        );

        Card {
            stability: transition.stability,
            difficulty: transition.difficulty,
            state: transition.state,
            step: transition.step,
            reps: card.reps + 1,
            last_review: Some(now),
            next_review: Some(now + transition.due_offset),
        }
    }

    /// Speculatively schedule the card once per rating and format the
    /// resulting due offsets. Read-only: the card is untouched and nothing
    /// is committed.
    pub fn preview(&self, card: &Card, now: DateTime<Utc>) -> RatingPreviews {
        let [again, hard, good, easy] = Rating::ALL.map(|rating| {
            let outcome = self.schedule(card, rating, now);
            let due = outcome.next_review.unwrap_or(now);
            format_duration(due - now)
        });
        RatingPreviews { again, hard, good, easy }
    }

    // ========================================================================
    // PER-STATE HANDLERS
    // ========================================================================

    /// First rating of a New card: seed stability and difficulty, then
    /// either enter the learning steps or graduate straight to Review.
    fn rate_new(&self, rating: Rating) -> Transition {
        let stability = init_stability(&self.params, rating);
        let difficulty = init_difficulty(&self.params, rating);
        let steps = self.config.learning_steps();

        match rating {
            Rating::Again | Rating::Hard => Transition {
                stability,
                difficulty,
                state: CardState::Learning,
                step: 0,
                due_offset: step_offset(steps[0]),
            },
            Rating::Good if steps.len() > 1 => Transition {
                stability,
                difficulty,
                state: CardState::Learning,
                step: 1,
                due_offset: step_offset(steps[1]),
            },
            // Good with a single learning step, or Easy: straight to Review
            Rating::Good | Rating::Easy => Transition {
                stability,
                difficulty,
                state: CardState::Review,
                step: 0,
                due_offset: self.interval_offset(stability),
            },
        }
    }

    /// Rating inside the Learning or Relearning steps. `steps` is the
    /// sequence matching the card's current state.
    fn rate_learning(&self, card: &Card, rating: Rating, steps: &[f64]) -> Transition {
        // Difficulty only evolves once the memory is established
        let difficulty = if card.stability > 0.0 {
            update_difficulty(&self.params, card.difficulty, rating)
        } else {
            card.difficulty
        };

        match rating {
            // Forgot: back to the first step, state unchanged
            Rating::Again => Transition {
                stability: card.stability,
                difficulty,
                state: card.state,
                step: 0,
                due_offset: step_offset(steps[0]),
            },
            // Struggled: repeat the current step
            Rating::Hard => Transition {
                stability: card.stability,
                difficulty,
                state: card.state,
                step: card.step,
                due_offset: step_offset(steps[card.step.min(steps.len() - 1)]),
            },
            Rating::Good => {
                let next_step = card.step + 1;
                if next_step >= steps.len() {
                    // Past the last step: graduate. A card that entered the
                    // steps without established stability (Again/Hard from
                    // New) seeds it from the current grade here.
                    let stability = if card.stability > 0.0 {
                        card.stability
                    } else {
                        init_stability(&self.params, rating)
                    };
                    Transition {
                        stability,
                        difficulty,
                        state: CardState::Review,
                        step: 0,
                        due_offset: self.interval_offset(stability),
                    }
                } else {
                    Transition {
                        stability: card.stability,
                        difficulty,
                        state: card.state,
                        step: next_step,
                        due_offset: step_offset(steps[next_step]),
                    }
                }
            }
            // Easy skips the remaining steps entirely, seeding any memory
            // field that was never established
            Rating::Easy => {
                let stability = if card.stability > 0.0 {
                    card.stability
                } else {
                    init_stability(&self.params, rating)
                };
                let difficulty = if difficulty > 0.0 {
                    difficulty
                } else {
                    init_difficulty(&self.params, rating)
                };
                Transition {
                    stability,
                    difficulty,
                    state: CardState::Review,
                    step: 0,
                    due_offset: self.interval_offset(stability),
                }
            }
        }
    }

    /// Rating of a graduated Review card: the only branch where elapsed
    /// time (via retrievability) feeds the stability update.
    fn rate_review(&self, card: &Card, rating: Rating, elapsed_days: f64) -> Transition {
        let r = retrievability(&self.params, elapsed_days, card.stability);
        let difficulty = update_difficulty(&self.params, card.difficulty, rating);

        match rating {
            // Lapse: shrink stability and drop into the relearning steps
            Rating::Again => Transition {
                stability: stability_after_forgetting(
                    &self.params,
                    card.difficulty,
                    card.stability,
                    r,
                ),
                difficulty,
                state: CardState::Relearning,
                step: 0,
                due_offset: step_offset(self.config.relearning_steps()[0]),
            },
            // Recall: grow stability and stay in Review
            Rating::Hard | Rating::Good | Rating::Easy => {
                let stability =
                    stability_after_recall(&self.params, card.difficulty, card.stability, r, rating);
                Transition {
                    stability,
                    difficulty,
                    state: CardState::Review,
                    step: card.step,
                    due_offset: self.interval_offset(stability),
                }
            }
        }
    }

    fn interval_offset(&self, stability: f64) -> Duration {
        Duration::days(next_interval(
            &self.params,
            stability,
            self.config.desired_retention(),
        ))
    }
}

/// Convert a step duration in (possibly fractional) minutes to an offset
fn step_offset(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}

// ============================================================================
// TESTS
// ============================================================================
