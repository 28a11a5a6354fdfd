use crate::models::nutrient::{Nutrient, NutrientGoal, sanitize_amount};
use crate::models::progress::MacroBreakdown;

/// Split of consumed protein, carbs and fat by mass and by energy.
///
/// Shares are zero when nothing was consumed; otherwise each set sums to 1.
pub fn compute_macro_breakdown(
    protein: &NutrientGoal,
    carbs: &NutrientGoal,
    fat: &NutrientGoal,
) -> MacroBreakdown {
    let p = sanitize_amount(protein.consumed_amount);
    let c = sanitize_amount(carbs.consumed_amount);
    let f = sanitize_amount(fat.consumed_amount);
    let total = p + c + f;

    let p_kcal = p * Nutrient::Protein.kcal_per_gram();
    let c_kcal = c * Nutrient::Carbs.kcal_per_gram();
    let f_kcal = f * Nutrient::Fat.kcal_per_gram();
    let macro_calories = p_kcal + c_kcal + f_kcal;

    MacroBreakdown {
        protein: p,
        carbs: c,
        fat: f,
        total,
        protein_share: share(p, total),
        carbs_share: share(c, total),
        fat_share: share(f, total),
        macro_calories,
        protein_energy_share: share(p_kcal, macro_calories),
        carbs_energy_share: share(c_kcal, macro_calories),
        fat_energy_share: share(f_kcal, macro_calories),
    }
}

/// Share of the mass total for one macro. Calories have no share.
pub fn share_of_total(breakdown: &MacroBreakdown, nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Protein => breakdown.protein_share,
        Nutrient::Carbs => breakdown.carbs_share,
        Nutrient::Fat => breakdown.fat_share,
        Nutrient::Calories => 0.0,
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total } else { 0.0 }
}
