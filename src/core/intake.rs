use anyhow::Result;
use serde::Serialize;

use crate::models::config::Config;
use crate::models::nutrient::Nutrient;

/// Running totals for one day, accumulated from logged intakes and activities.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct DailyTotals {
    pub calories: f64,
    pub burned: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailyTotals {
    /// Add a consumed amount for one nutrient. Fails if the running total
    /// would stop being finite.
    pub fn add(&mut self, nutrient: Nutrient, amount: f64) -> Result<()> {
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        };
        *slot = checked_sum(*slot, amount, &nutrient.to_string())?;
        Ok(())
    }

    /// Add calories burned through activity.
    pub fn add_burned(&mut self, amount: f64) -> Result<()> {
        self.burned = checked_sum(self.burned, amount, "burned")?;
        Ok(())
    }

    pub fn consumed(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Reject amounts that are negative or not finite.
pub fn ensure_amount(label: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!(
            "{} must be a finite, non-negative number, got {}",
            label,
            value
        );
    }
    Ok(value)
}

fn checked_sum(total: f64, amount: f64, label: &str) -> Result<f64> {
    let sum = total + ensure_amount(label, amount)?;
    if !sum.is_finite() {
        anyhow::bail!("{} total overflowed", label);
    }
    Ok(sum)
}

/// Fold a JSON array of intake/activity entries into `totals`.
///
/// Accepted shapes:
/// - `{"type": "<nutrient or alias>", "amount": N}`
/// - `{"type": "burned", "amount": N}` for activities
/// - `{"type": "food", "calories": N, "protein": N, "carbs": N, "fat": N}`
///   where every field is optional
pub fn apply_batch(
    totals: &mut DailyTotals,
    config: &Config,
    batch_json: &str,
) -> Result<usize> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(batch_json)?;

    for (i, entry) in entries.iter().enumerate() {
        apply_entry(totals, config, entry)
            .map_err(|e| anyhow::anyhow!("batch entry {}: {}", i, e))?;
    }

    tracing::debug!(entries = entries.len(), "applied intake batch");
    Ok(entries.len())
}

fn apply_entry(
    totals: &mut DailyTotals,
    config: &Config,
    entry: &serde_json::Value,
) -> Result<()> {
    let kind = entry["type"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("missing 'type'"))?;
    let kind = config.resolve_alias(kind);

    match kind.as_str() {
        "burned" | "activity" => totals.add_burned(required_amount(entry, "amount")?),
        "food" | "meal" => {
            for nutrient in [
                Nutrient::Calories,
                Nutrient::Protein,
                Nutrient::Carbs,
                Nutrient::Fat,
            ] {
                let field = nutrient.to_string();
                if !entry[field.as_str()].is_null() {
                    totals.add(nutrient, required_amount(entry, &field)?)?;
                }
            }
            Ok(())
        }
        other => {
            let nutrient: Nutrient = other.parse()?;
            totals.add(nutrient, required_amount(entry, "amount")?)
        }
    }
}

fn required_amount(entry: &serde_json::Value, field: &str) -> Result<f64> {
    let v = entry[field]
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("missing '{}'", field))?;
    ensure_amount(&format!("'{}'", field), v)
}
