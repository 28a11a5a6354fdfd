use chrono::NaiveDate;
use serde::Serialize;

use crate::core::intake::DailyTotals;
use crate::core::macros::compute_macro_breakdown;
use crate::core::progress::compute_progress;
use crate::models::config::Config;
use crate::models::nutrient::{Nutrient, NutrientGoal, sanitize_amount};
use crate::models::progress::{MacroBreakdown, ProgressResult};

#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calories: CalorieSummary,
    pub macros: MacroProgress,
    pub breakdown: MacroBreakdown,
}

#[derive(Debug, Serialize)]
pub struct CalorieSummary {
    #[serde(flatten)]
    pub progress: ProgressResult,
    pub burned: f64,
    /// Consumed minus burned, floored at zero.
    pub net_calories: f64,
    /// Remaining once burned calories are credited back to the goal.
    pub adjusted_remaining: f64,
}

#[derive(Debug, Serialize)]
pub struct MacroProgress {
    pub protein: ProgressResult,
    pub carbs: ProgressResult,
    pub fat: ProgressResult,
}

impl MacroProgress {
    pub fn get(&self, nutrient: Nutrient) -> Option<&ProgressResult> {
        match nutrient {
            Nutrient::Protein => Some(&self.protein),
            Nutrient::Carbs => Some(&self.carbs),
            Nutrient::Fat => Some(&self.fat),
            Nutrient::Calories => None,
        }
    }
}

/// Build the daily dashboard from a day's totals and the configured goals.
pub fn compute(totals: &DailyTotals, config: &Config, date: NaiveDate) -> DailySummary {
    let thresholds = config.thresholds();
    let goal_of = |n: Nutrient| NutrientGoal::new(config.goal_for(n), totals.consumed(n));
    let progress_of =
        |n: Nutrient| compute_progress(&goal_of(n), config.ceiling_for(n), &thresholds);

    let calorie_goal = goal_of(Nutrient::Calories).with_burned(totals.burned);
    let calories = compute_progress(
        &calorie_goal,
        config.ceiling_for(Nutrient::Calories),
        &thresholds,
    );
    let burned = sanitize_amount(calorie_goal.burned_amount);
    let net_calories = (calories.consumed_amount - burned).max(0.0);
    let adjusted_remaining = if calories.goal_amount > 0.0 {
        (calories.goal_amount + burned - calories.consumed_amount).max(0.0)
    } else {
        0.0
    };

    DailySummary {
        date,
        calories: CalorieSummary {
            progress: calories,
            burned,
            net_calories,
            adjusted_remaining,
        },
        macros: MacroProgress {
            protein: progress_of(Nutrient::Protein),
            carbs: progress_of(Nutrient::Carbs),
            fat: progress_of(Nutrient::Fat),
        },
        breakdown: compute_macro_breakdown(
            &goal_of(Nutrient::Protein),
            &goal_of(Nutrient::Carbs),
            &goal_of(Nutrient::Fat),
        ),
    }
}
