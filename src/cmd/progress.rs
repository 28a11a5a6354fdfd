use anyhow::Result;
use serde_json::json;

use openplate::core::intake::ensure_amount;
use openplate::core::progress::compute_progress;
use openplate::models::config::Config;
use openplate::models::nutrient::{Nutrient, NutrientGoal};
use openplate::output;
use openplate::output::human;

pub fn run(
    nutrient: &str,
    consumed: f64,
    goal: Option<f64>,
    burned: Option<f64>,
    ceiling: Option<f64>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let nutrient = config.resolve_nutrient(nutrient)?;
    if burned.is_some() && nutrient != Nutrient::Calories {
        anyhow::bail!("--burned only applies to calories, not {}", nutrient);
    }

    let consumed = ensure_amount("consumed", consumed)?;
    let goal_amount = match goal {
        Some(g) => ensure_amount("--goal", g)?,
        None => config.goal_for(nutrient),
    };
    let burned = match burned {
        Some(b) => ensure_amount("--burned", b)?,
        None => 0.0,
    };
    let ceiling = match ceiling {
        Some(c) => {
            if ensure_amount("--ceiling", c)? == 0.0 {
                anyhow::bail!("--ceiling must be greater than zero");
            }
            c
        }
        None => config.ceiling_for(nutrient),
    };
    let nutrient_goal = NutrientGoal::new(goal_amount, consumed).with_burned(burned);
    let result = compute_progress(&nutrient_goal, ceiling, &config.thresholds());

    if human_flag {
        println!("{}", human::format_progress(nutrient, &result));
    } else {
        let out = output::success(
            "progress",
            json!({
                "nutrient": nutrient,
                "unit": nutrient.unit(),
                "ceiling": ceiling,
                "burned": nutrient_goal.burned_amount,
                "color": result.band.color_hex(),
                "progress": result,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
