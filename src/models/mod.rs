pub mod config;
pub mod nutrient;
pub mod progress;

pub use nutrient::{Nutrient, NutrientGoal};
pub use progress::{Band, MacroBreakdown, ProgressResult, Thresholds};
