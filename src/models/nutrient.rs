use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A tracked daily quantity: total energy or one of the three macros.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const MACROS: [Nutrient; 3] = [Self::Protein, Self::Carbs, Self::Fat];

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            _ => "g",
        }
    }

    pub fn is_macro(&self) -> bool {
        !matches!(self, Self::Calories)
    }

    /// Atwater energy factor. Calories map to 1 so kcal pass through unchanged.
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Self::Calories => 1.0,
            Self::Protein | Self::Carbs => 4.0,
            Self::Fat => 9.0,
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calories => write!(f, "calories"),
            Self::Protein => write!(f, "protein"),
            Self::Carbs => write!(f, "carbs"),
            Self::Fat => write!(f, "fat"),
        }
    }
}

impl FromStr for Nutrient {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "calories" | "kcal" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "carbs" | "carbohydrate" | "carbohydrates" => Ok(Self::Carbs),
            "fat" => Ok(Self::Fat),
            _ => anyhow::bail!(
                "invalid nutrient: {} (expected calories/protein/carbs/fat)",
                s
            ),
        }
    }
}

/// Target and running totals for a single nutrient over one period.
///
/// `burned_amount` is only meaningful for calories. A `goal_amount` of zero
/// means no goal is set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientGoal {
    pub goal_amount: f64,
    pub consumed_amount: f64,
    #[serde(default)]
    pub burned_amount: f64,
}

impl NutrientGoal {
    pub fn new(goal_amount: f64, consumed_amount: f64) -> Self {
        Self {
            goal_amount,
            consumed_amount,
            burned_amount: 0.0,
        }
    }

    pub fn with_burned(mut self, burned_amount: f64) -> Self {
        self.burned_amount = burned_amount;
        self
    }

    /// Consumed amount with only a macro's intake known; no goal attached.
    pub fn consumed(consumed_amount: f64) -> Self {
        Self::new(0.0, consumed_amount)
    }

    pub fn has_goal(&self) -> bool {
        sanitize_amount(self.goal_amount) > 0.0
    }
}

/// Negative and non-finite amounts degrade to zero.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
