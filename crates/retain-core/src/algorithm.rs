//! Memory Model Functions
//!
//! The pure FSRS-5 formulas over the three-component model:
//! - Difficulty (D): inherent item hardness, clamped to [1, 10]
//! - Stability (S): days until recall probability decays to 90%
//! - Retrievability (R): instantaneous probability of recall
//!
//! All functions are stateless and take the parameter set explicitly.
//! Rounding happens only at interval materialization, never mid-formula.

use crate::card::Rating;
use crate::params::Parameters;

/// Minimum difficulty
pub const MIN_DIFFICULTY: f64 = 1.0;

/// Maximum difficulty
pub const MAX_DIFFICULTY: f64 = 10.0;

/// Minimum next-review interval in days
pub const MIN_INTERVAL_DAYS: i64 = 1;

#[inline]
fn clamp_difficulty(d: f64) -> f64 {
    d.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Initial stability after the first rating.
///
/// `S0(G) = w[G-1]`: the first four weights are the seed stabilities.
pub fn init_stability(params: &Parameters, rating: Rating) -> f64 {
    params.w[(rating.value() - 1) as usize]
}

/// Initial difficulty after the first rating.
///
/// `D0(G) = w4 - e^(w5 * (G-1)) + 1`, clamped to [1, 10].
pub fn init_difficulty(params: &Parameters, rating: Rating) -> f64 {
    let g = rating.value() as f64;
    clamp_difficulty(params.w[4] - (params.w[5] * (g - 1.0)).exp() + 1.0)
}

/// Updated difficulty after a review.
///
/// `dD = -w6 * (G - 3)`, then mean reversion toward the Good-rating
/// baseline `D0(3)` with weight `w7`. The reversion keeps difficulty from
/// drifting unboundedly over many reviews.
pub fn update_difficulty(params: &Parameters, difficulty: f64, rating: Rating) -> f64 {
    let g = rating.value() as f64;
    let delta = -params.w[6] * (g - 3.0);
    let d_prime = difficulty + delta;
    let d0_good = params.w[4] - (params.w[5] * 2.0).exp() + 1.0;
    clamp_difficulty(params.w[7] * d0_good + (1.0 - params.w[7]) * d_prime)
}

/// Probability of recall after `elapsed_days` at stability `stability`.
///
/// `R(t, S) = (1 + FACTOR * t/S)^DECAY`. Degenerate stability (S <= 0)
/// yields 0 rather than a NaN: the natural limit of the forgetting curve.
pub fn retrievability(params: &Parameters, elapsed_days: f64, stability: f64) -> f64 {
    if stability <= 0.0 {
        return 0.0;
    }
    (1.0 + params.factor * elapsed_days / stability).powf(params.decay)
}

/// Next review interval in whole days for the desired retention.
///
/// Inverts the forgetting curve: the elapsed time at which recall drops to
/// `desired_retention`. Rounded to the nearest day, floored at 1.
pub fn next_interval(params: &Parameters, stability: f64, desired_retention: f64) -> i64 {
    let interval =
        (stability / params.factor) * (desired_retention.powf(1.0 / params.decay) - 1.0);
    (interval.round() as i64).max(MIN_INTERVAL_DAYS)
}

/// Stability after a successful recall (Hard/Good/Easy).
///
/// Multiplicative growth: `S' = S * (sinc + 1)` where
/// `sinc = e^w8 * (11-D) * S^(-w9) * (e^(w10*(1-R)) - 1) * penalty * bonus`.
/// Harder items and reviews made while retrievability is still high grow
/// less; Hard dampens via `w15`, Easy amplifies via `w16`.
pub fn stability_after_recall(
    params: &Parameters,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
    rating: Rating,
) -> f64 {
    let hard_penalty = if rating == Rating::Hard { params.w[15] } else { 1.0 };
    let easy_bonus = if rating == Rating::Easy { params.w[16] } else { 1.0 };

    let sinc = params.w[8].exp()
        * (11.0 - difficulty)
        * stability.powf(-params.w[9])
        * ((params.w[10] * (1.0 - retrievability)).exp() - 1.0)
        * hard_penalty
        * easy_bonus;

    stability * (sinc + 1.0)
}

/// Stability after a lapse (Again in Review state).
///
/// `S'f(D, S, R) = w11 * D^(-w12) * ((S+1)^w13 - 1) * e^(w14*(1-R))`.
/// Decoupled from the recall-growth formula: forgetting restarts the
/// learning trajectory at a lower stability.
pub fn stability_after_forgetting(
    params: &Parameters,
    difficulty: f64,
    stability: f64,
    retrievability: f64,
) -> f64 {
    params.w[11]
        * difficulty.powf(-params.w[12])
        * ((stability + 1.0).powf(params.w[13]) - 1.0)
        * (params.w[14] * (1.0 - retrievability)).exp()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Parameters {
        Parameters::default()
    }

    #[test]
    fn test_init_stability_reads_seed_weights() {
        let p = params();
        assert_eq!(init_stability(&p, Rating::Again), p.w[0]);
        assert_eq!(init_stability(&p, Rating::Hard), p.w[1]);
        assert_eq!(init_stability(&p, Rating::Good), p.w[2]);
        assert_eq!(init_stability(&p, Rating::Easy), p.w[3]);
    }

    #[test]
    fn test_init_difficulty_bounds() {
        let p = params();
        for rating in Rating::ALL {
            let d = init_difficulty(&p, rating);
            assert!((MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&d), "D0({rating}) = {d}");
        }
        // Again seeds the hardest, Easy the easiest
        assert!(init_difficulty(&p, Rating::Again) > init_difficulty(&p, Rating::Easy));
    }

    #[test]
    fn test_update_difficulty_bounds() {
        let p = params();
        for d in [1.0, 2.5, 5.0, 7.3, 10.0] {
            for rating in Rating::ALL {
                let next = update_difficulty(&p, d, rating);
                assert!(
                    (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&next),
                    "update_difficulty({d}, {rating}) = {next}"
                );
            }
        }
    }

    #[test]
    fn test_update_difficulty_direction() {
        let p = params();
        // Again pushes difficulty up, Easy pulls it down, Good barely moves it
        assert!(update_difficulty(&p, 5.0, Rating::Again) > 5.0);
        assert!(update_difficulty(&p, 5.0, Rating::Easy) < 5.0);
        assert!((update_difficulty(&p, 5.0, Rating::Good) - 5.0).abs() < 0.05);
    }

    #[test]
    fn test_retrievability_anchor() {
        let p = params();
        for s in [0.5, 1.0, 3.173, 10.0, 100.0, 365.0] {
            let r = retrievability(&p, s, s);
            assert!((r - 0.9).abs() < 1e-12, "R({s}, {s}) = {r}");
        }
    }

    #[test]
    fn test_retrievability_degenerate_stability() {
        let p = params();
        assert_eq!(retrievability(&p, 5.0, 0.0), 0.0);
        assert_eq!(retrievability(&p, 5.0, -1.0), 0.0);
    }

    #[test]
    fn test_retrievability_decreases_over_time() {
        let p = params();
        assert_eq!(retrievability(&p, 0.0, 10.0), 1.0);
        let day1 = retrievability(&p, 1.0, 10.0);
        let day10 = retrievability(&p, 10.0, 10.0);
        let day100 = retrievability(&p, 100.0, 10.0);
        assert!(day1 > day10 && day10 > day100);
    }

    #[test]
    fn test_next_interval_monotone_in_stability() {
        let p = params();
        let mut prev = 0;
        for s in [0.5, 1.0, 2.0, 5.0, 15.0, 60.0, 365.0] {
            let interval = next_interval(&p, s, 0.9);
            assert!(interval >= prev, "interval({s}) = {interval} < {prev}");
            prev = interval;
        }
    }

    #[test]
    fn test_next_interval_floor() {
        let p = params();
        // Tiny stability and very high retention both collapse below one day
        assert_eq!(next_interval(&p, 0.01, 0.9), 1);
        assert_eq!(next_interval(&p, 1.0, 0.999), 1);
    }

    #[test]
    fn test_next_interval_equals_stability_at_default_retention() {
        // With DECAY = -0.5 and FACTOR = 19/81, the interval formula reduces
        // algebraically to round(S) when desired retention is 0.9.
        let p = params();
        assert_eq!(next_interval(&p, 3.173, 0.9), 3);
        assert_eq!(next_interval(&p, 15.69105, 0.9), 16);
        assert_eq!(next_interval(&p, 100.0, 0.9), 100);
    }

    #[test]
    fn test_next_interval_respects_retention() {
        let p = params();
        // Lower desired retention waits longer before the next review
        assert!(next_interval(&p, 10.0, 0.8) > next_interval(&p, 10.0, 0.9));
        assert!(next_interval(&p, 10.0, 0.9) > next_interval(&p, 10.0, 0.97));
    }

    #[test]
    fn test_stability_after_recall_grows() {
        let p = params();
        for rating in [Rating::Hard, Rating::Good, Rating::Easy] {
            let s = stability_after_recall(&p, 5.0, 10.0, 0.9, rating);
            assert!(s > 10.0, "recall with {rating} should grow stability, got {s}");
        }
    }

    #[test]
    fn test_stability_after_recall_rating_ordering() {
        let p = params();
        let hard = stability_after_recall(&p, 5.0, 10.0, 0.9, Rating::Hard);
        let good = stability_after_recall(&p, 5.0, 10.0, 0.9, Rating::Good);
        let easy = stability_after_recall(&p, 5.0, 10.0, 0.9, Rating::Easy);
        assert!(hard < good && good < easy);
    }

    #[test]
    fn test_stability_after_recall_difficulty_dampens_growth() {
        let p = params();
        let easy_item = stability_after_recall(&p, 2.0, 10.0, 0.9, Rating::Good);
        let hard_item = stability_after_recall(&p, 9.0, 10.0, 0.9, Rating::Good);
        assert!(easy_item > hard_item);
    }

    #[test]
    fn test_stability_after_forgetting_shrinks() {
        let p = params();
        let s = stability_after_forgetting(&p, 5.0, 10.0, 0.9);
        assert!(s > 0.0 && s < 10.0, "post-lapse stability = {s}");
    }

    #[test]
    fn test_stability_after_forgetting_reference_value() {
        // S'f(5, 10, 0.9) with stock weights:
        // 1.9395 * 5^-0.11 * (11^0.29605 - 1) * e^(2.2698 * 0.1)
        let p = params();
        let expected = 1.9395
            * 5.0_f64.powf(-0.11)
            * (11.0_f64.powf(0.29605) - 1.0)
            * (2.2698_f64 * 0.1).exp();
        let actual = stability_after_forgetting(&p, 5.0, 10.0, 0.9);
        assert!((actual - expected).abs() < 1e-12);
        // Roughly two days of post-lapse stability
        assert!((actual - 2.1).abs() < 0.1);
    }
}
