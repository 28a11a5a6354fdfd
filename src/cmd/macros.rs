use anyhow::Result;
use serde_json::json;

use openplate::core::macros::compute_macro_breakdown;
use openplate::models::nutrient::NutrientGoal;
use openplate::output;
use openplate::output::human;

pub fn run(protein: f64, carbs: f64, fat: f64, human_flag: bool) -> Result<()> {
    let breakdown = compute_macro_breakdown(
        &NutrientGoal::consumed(protein),
        &NutrientGoal::consumed(carbs),
        &NutrientGoal::consumed(fat),
    );

    if human_flag {
        println!("{}", human::format_breakdown(&breakdown));
    } else {
        let out = output::success("macros", json!({ "breakdown": breakdown }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
