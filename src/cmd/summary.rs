use anyhow::Result;
use chrono::{Local, NaiveDate};

use openplate::core::intake::{self, DailyTotals, ensure_amount};
use openplate::models::config::Config;
use openplate::models::nutrient::Nutrient;
use openplate::output;
use openplate::output::human;

/// Amounts given directly as flags.
pub struct Intake {
    pub calories: Option<f64>,
    pub burned: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

pub fn run(
    flags: Intake,
    batch: Option<&str>,
    date: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;

    let mut totals = DailyTotals::default();
    for (nutrient, amount) in [
        (Nutrient::Calories, flags.calories),
        (Nutrient::Protein, flags.protein),
        (Nutrient::Carbs, flags.carbs),
        (Nutrient::Fat, flags.fat),
    ] {
        if let Some(v) = amount {
            totals.add(nutrient, ensure_amount(&format!("--{}", nutrient), v)?)?;
        }
    }
    if let Some(v) = flags.burned {
        totals.add_burned(ensure_amount("--burned", v)?)?;
    }

    if let Some(batch_json) = batch {
        intake::apply_batch(&mut totals, &config, batch_json)?;
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let summary = openplate::core::summary::compute(&totals, &config, date);

    if human_flag {
        println!("{}", human::format_summary(&summary));
    } else {
        let out = output::success("summary", serde_json::to_value(&summary)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
