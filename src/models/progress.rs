use serde::{Deserialize, Serialize};

pub const DEFAULT_APPROACHING: f64 = 0.8;
pub const DEFAULT_EXCEEDED: f64 = 1.0;

/// Qualitative progress classification that drives color-coding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Normal,
    Approaching,
    Exceeded,
}

impl Band {
    /// Fixed green/amber/red gradient shared by every progress visualization.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Normal => "#4CAF50",
            Self::Approaching => "#FFC107",
            Self::Exceeded => "#F44336",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Approaching => write!(f, "approaching"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Cut points, as fractions of the goal, where the band changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    #[serde(default = "default_approaching")]
    pub approaching: f64,
    #[serde(default = "default_exceeded")]
    pub exceeded: f64,
}

fn default_approaching() -> f64 {
    DEFAULT_APPROACHING
}
fn default_exceeded() -> f64 {
    DEFAULT_EXCEEDED
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            approaching: DEFAULT_APPROACHING,
            exceeded: DEFAULT_EXCEEDED,
        }
    }
}

impl Thresholds {
    pub fn new(approaching: f64, exceeded: f64) -> Self {
        Self {
            approaching,
            exceeded,
        }
    }

    /// Both finite and `0 < approaching < exceeded`.
    pub fn is_valid(&self) -> bool {
        self.approaching.is_finite()
            && self.exceeded.is_finite()
            && self.approaching > 0.0
            && self.approaching < self.exceeded
    }

    /// Returns these thresholds, or the defaults when they are unusable.
    pub fn or_default(self) -> Self {
        if self.is_valid() { self } else { Self::default() }
    }
}

/// Derived snapshot of one nutrient's progress. Never mutated; recompute it
/// whenever the underlying goal changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressResult {
    pub goal_amount: f64,
    pub consumed_amount: f64,
    /// `consumed / goal`, clamped to the ceiling.
    pub fraction_of_goal: f64,
    pub percent_of_goal: f64,
    /// Percentage without the ceiling, for "exceeded by N%" labels.
    pub unclamped_percent: f64,
    pub remaining: f64,
    pub over_amount: f64,
    pub band: Band,
}

impl ProgressResult {
    pub fn is_exceeded(&self) -> bool {
        self.band == Band::Exceeded
    }
}

/// Grams of each macro eaten, and how they split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub total: f64,
    pub protein_share: f64,
    pub carbs_share: f64,
    pub fat_share: f64,
    /// Energy the macros represent (4/4/9 kcal per gram).
    pub macro_calories: f64,
    pub protein_energy_share: f64,
    pub carbs_energy_share: f64,
    pub fat_energy_share: f64,
}
