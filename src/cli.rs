use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "openplate", version, about = "Agent-native nutrition progress CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config with goals unset and default aliases
    Init,

    /// Progress of one nutrient against its goal
    Progress {
        /// Nutrient (calories, protein, carbs, fat) or alias
        nutrient: String,

        /// Amount consumed so far
        consumed: f64,

        /// Goal amount (default: configured goal)
        #[arg(long)]
        goal: Option<f64>,

        /// Calories burned through activity
        #[arg(long)]
        burned: Option<f64>,

        /// Clamp ceiling for the progress fraction (default: configured ceiling)
        #[arg(long)]
        ceiling: Option<f64>,
    },

    /// Split of consumed macros by mass and energy
    Macros {
        /// Protein consumed (g)
        protein: f64,
        /// Carbohydrate consumed (g)
        carbs: f64,
        /// Fat consumed (g)
        fat: f64,
    },

    /// Daily calorie and macro dashboard
    Summary {
        /// Calories consumed (kcal)
        #[arg(long)]
        calories: Option<f64>,

        /// Calories burned through activity (kcal)
        #[arg(long)]
        burned: Option<f64>,

        /// Protein consumed (g)
        #[arg(long)]
        protein: Option<f64>,

        /// Carbohydrate consumed (g)
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat consumed (g)
        #[arg(long)]
        fat: Option<f64>,

        /// Batch JSON array of logged intakes and activities
        #[arg(long)]
        batch: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. goals.calories, progress.macro_ceiling, alias.pr)
        key: String,
        /// Config value
        value: String,
    },
}
