//! Scheduler configuration
//!
//! Desired retention plus the learning/relearning step sequences. Validated
//! at construction so the scheduler itself never has to fail: an empty step
//! sequence or an out-of-range retention is a caller error and is rejected
//! here, never silently defaulted.

use serde::{Deserialize, Serialize};

/// Default target recall probability
pub const DEFAULT_DESIRED_RETENTION: f64 = 0.9;

/// Default learning steps in minutes
pub const DEFAULT_LEARNING_STEPS: [f64; 2] = [1.0, 10.0];

/// Default relearning steps in minutes
pub const DEFAULT_RELEARNING_STEPS: [f64; 1] = [10.0];

// ============================================================================
// ERRORS
// ============================================================================

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Desired retention outside the open interval (0, 1)
    #[error("Desired retention must be within (0, 1), got {0}")]
    InvalidRetention(f64),
    /// No learning steps provided
    #[error("Learning steps must not be empty")]
    EmptyLearningSteps,
    /// No relearning steps provided
    #[error("Relearning steps must not be empty")]
    EmptyRelearningSteps,
    /// A step duration that is zero, negative, or not finite
    #[error("Step durations must be positive and finite, got {0}")]
    InvalidStep(f64),
}

// ============================================================================
// SCHEDULER CONFIG
// ============================================================================

/// Validated scheduler configuration.
///
/// Fields are private so the non-empty / positive-step invariants hold for
/// the lifetime of the value; construct via [`SchedulerConfig::new`] or use
/// the defaults (retention 0.9, learning steps `[1, 10]` minutes,
/// relearning steps `[10]` minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawConfig")]
pub struct SchedulerConfig {
    desired_retention: f64,
    learning_steps: Vec<f64>,
    relearning_steps: Vec<f64>,
}

/// Unvalidated mirror used to route deserialization through validation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    desired_retention: f64,
    learning_steps: Vec<f64>,
    relearning_steps: Vec<f64>,
}

impl TryFrom<RawConfig> for SchedulerConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        SchedulerConfig::new(raw.desired_retention, raw.learning_steps, raw.relearning_steps)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            desired_retention: DEFAULT_DESIRED_RETENTION,
            learning_steps: DEFAULT_LEARNING_STEPS.to_vec(),
            relearning_steps: DEFAULT_RELEARNING_STEPS.to_vec(),
        }
    }
}

impl SchedulerConfig {
    /// Create a validated configuration.
    ///
    /// Step durations are minutes and may be fractional. Fails fast on an
    /// empty sequence, a non-positive or non-finite step, or a retention
    /// outside (0, 1).
    pub fn new(
        desired_retention: f64,
        learning_steps: Vec<f64>,
        relearning_steps: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if !desired_retention.is_finite() || desired_retention <= 0.0 || desired_retention >= 1.0 {
            return Err(ConfigError::InvalidRetention(desired_retention));
        }
        if learning_steps.is_empty() {
            return Err(ConfigError::EmptyLearningSteps);
        }
        if relearning_steps.is_empty() {
            return Err(ConfigError::EmptyRelearningSteps);
        }
        for &step in learning_steps.iter().chain(relearning_steps.iter()) {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidStep(step));
            }
        }
        Ok(Self {
            desired_retention,
            learning_steps,
            relearning_steps,
        })
    }

    /// Target recall probability used to size review intervals
    #[inline]
    pub fn desired_retention(&self) -> f64 {
        self.desired_retention
    }

    /// Learning step durations in minutes (never empty)
    #[inline]
    pub fn learning_steps(&self) -> &[f64] {
        &self.learning_steps
    }

    /// Relearning step durations in minutes (never empty)
    #[inline]
    pub fn relearning_steps(&self) -> &[f64] {
        &self.relearning_steps
    }
}

// ============================================================================
// TESTS
// ============================================================================
