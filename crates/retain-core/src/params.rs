//! FSRS-5 Parameter Set
//!
//! The 19 model weights plus the two forgetting-curve constants that
//! parameterize every formula in the crate. Bundled into an immutable
//! [`Parameters`] value that is passed explicitly into each formula call,
//! so tests can substitute alternate weight sets without touching globals.
//!
//! Reference: https://github.com/open-spaced-repetition/fsrs4anki/wiki/The-Algorithm

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of model weights in FSRS-5
pub const WEIGHT_COUNT: usize = 19;

/// Forgetting-curve decay exponent (FSRS-4.5+)
pub const DECAY: f64 = -0.5;

/// Forgetting-curve normalization factor.
///
/// Chosen so that `retrievability(S, S) = 0.9` exactly: elapsed time equal
/// to the stability always means a 90% chance of recall.
pub const FACTOR: f64 = 19.0 / 81.0;

/// FSRS-5 default weights, fitted on the open review dataset.
pub const DEFAULT_WEIGHTS: [f64; WEIGHT_COUNT] = [
    0.40255,  // w0: S0(Again)
    1.18385,  // w1: S0(Hard)
    3.173,    // w2: S0(Good)
    15.69105, // w3: S0(Easy)
    7.1949,   // w4: D0 base (initial difficulty at Again)
    0.5345,   // w5: D0 decay rate
    1.4604,   // w6: difficulty delta per grade
    0.0046,   // w7: mean reversion weight
    1.54575,  // w8: recall stability base
    0.1192,   // w9: recall stability decay
    1.01925,  // w10: recall retrievability factor
    1.9395,   // w11: forget stability base
    0.11,     // w12: forget difficulty factor
    0.29605,  // w13: forget stability factor
    2.2698,   // w14: forget retrievability factor
    0.2315,   // w15: hard penalty
    2.9898,   // w16: easy bonus
    0.51655,  // w17: same-day review factor (unused by this scheduler)
    0.6621,   // w18: same-day review offset (unused by this scheduler)
];

// ============================================================================
// PARAMETERS
// ============================================================================

/// Immutable FSRS-5 parameter set.
///
/// Every memory-model formula takes a `&Parameters` rather than reading
/// module-level state. The default value is the stock FSRS-5 fit; callers
/// that fit their own weights elsewhere can inject them here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// The 19 model weights `w0..w18`
    pub w: [f64; WEIGHT_COUNT],
    /// Forgetting-curve decay exponent
    pub decay: f64,
    /// Forgetting-curve normalization factor
    pub factor: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            w: DEFAULT_WEIGHTS,
            decay: DECAY,
            factor: FACTOR,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
