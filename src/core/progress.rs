use crate::models::nutrient::{NutrientGoal, sanitize_amount};
use crate::models::progress::{Band, ProgressResult, Thresholds};

/// Ceiling used when the supplied one is unusable: no visual overflow.
pub const FALLBACK_CEILING: f64 = 1.0;

/// Project a goal into its progress snapshot.
///
/// Total over all inputs: negative or non-finite amounts count as zero, an
/// unusable ceiling falls back to [`FALLBACK_CEILING`] and invalid
/// thresholds fall back to [`Thresholds::default`]. A zero goal yields a
/// zero fraction in the `Normal` band.
pub fn compute_progress(
    goal: &NutrientGoal,
    ceiling: f64,
    thresholds: &Thresholds,
) -> ProgressResult {
    let goal_amount = sanitize_amount(goal.goal_amount);
    let consumed = sanitize_amount(goal.consumed_amount);
    let ceiling = sanitize_ceiling(ceiling);
    let thresholds = thresholds.or_default();

    if goal_amount == 0.0 {
        return ProgressResult {
            goal_amount,
            consumed_amount: consumed,
            fraction_of_goal: 0.0,
            percent_of_goal: 0.0,
            unclamped_percent: 0.0,
            remaining: 0.0,
            over_amount: 0.0,
            band: Band::Normal,
        };
    }

    let ratio = consumed / goal_amount;
    let fraction_of_goal = ratio.min(ceiling);

    ProgressResult {
        goal_amount,
        consumed_amount: consumed,
        fraction_of_goal,
        percent_of_goal: to_percent(fraction_of_goal),
        unclamped_percent: to_percent(ratio),
        remaining: (goal_amount - consumed).max(0.0),
        over_amount: (consumed - goal_amount).max(0.0),
        band: classify_band(ratio, &thresholds),
    }
}

/// Band for an unclamped ratio. Lower cut points are inclusive; an infinite
/// ratio is exceeded and NaN is normal.
pub fn classify_band(ratio: f64, thresholds: &Thresholds) -> Band {
    let thresholds = thresholds.or_default();
    if ratio.is_nan() || ratio < thresholds.approaching {
        Band::Normal
    } else if ratio < thresholds.exceeded {
        Band::Approaching
    } else {
        Band::Exceeded
    }
}

/// Percentage of a ratio, saturating at `f64::MAX` so it always serializes.
fn to_percent(ratio: f64) -> f64 {
    let percent = ratio * 100.0;
    if percent.is_finite() { percent } else { f64::MAX }
}

fn sanitize_ceiling(ceiling: f64) -> f64 {
    if ceiling.is_finite() && ceiling > 0.0 {
        ceiling
    } else {
        FALLBACK_CEILING
    }
}
