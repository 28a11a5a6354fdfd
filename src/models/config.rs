use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::nutrient::Nutrient;
use crate::models::progress::Thresholds;

pub const DEFAULT_CALORIE_CEILING: f64 = 1.5;
pub const DEFAULT_MACRO_CEILING: f64 = 1.2;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub goals: Goals,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Daily goals. `None` means no goal is set for that nutrient.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Goals {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_calorie_ceiling")]
    pub calorie_ceiling: f64,
    #[serde(default = "default_macro_ceiling")]
    pub macro_ceiling: f64,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_calorie_ceiling() -> f64 {
    DEFAULT_CALORIE_CEILING
}
fn default_macro_ceiling() -> f64 {
    DEFAULT_MACRO_CEILING
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            calorie_ceiling: DEFAULT_CALORIE_CEILING,
            macro_ceiling: DEFAULT_MACRO_CEILING,
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        let config: Self = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        if !config.progress.thresholds.is_valid() {
            tracing::warn!(
                approaching = config.progress.thresholds.approaching,
                exceeded = config.progress.thresholds.exceeded,
                "configured thresholds are out of order, using defaults"
            );
        }
        Ok(config)
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Resolve an alias to a nutrient name, or return the input unchanged.
    pub fn resolve_alias(&self, input: &str) -> String {
        self.aliases
            .get(input)
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    /// Resolve an alias and parse the result as a nutrient.
    pub fn resolve_nutrient(&self, input: &str) -> anyhow::Result<Nutrient> {
        self.resolve_alias(input).parse()
    }

    pub fn default_aliases() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("cal".into(), "calories".into());
        m.insert("kc".into(), "calories".into());
        m.insert("p".into(), "protein".into());
        m.insert("c".into(), "carbs".into());
        m.insert("carb".into(), "carbs".into());
        m.insert("f".into(), "fat".into());
        m.insert("b".into(), "burned".into());
        m
    }

    /// Configured goal for a nutrient; zero when unset.
    pub fn goal_for(&self, nutrient: Nutrient) -> f64 {
        let goal = match nutrient {
            Nutrient::Calories => self.goals.calories,
            Nutrient::Protein => self.goals.protein,
            Nutrient::Carbs => self.goals.carbs,
            Nutrient::Fat => self.goals.fat,
        };
        goal.unwrap_or(0.0)
    }

    /// Calories and macros use separate overflow ceilings.
    pub fn ceiling_for(&self, nutrient: Nutrient) -> f64 {
        if nutrient.is_macro() {
            self.progress.macro_ceiling
        } else {
            self.progress.calorie_ceiling
        }
    }

    /// Thresholds to classify with, falling back to defaults when invalid.
    pub fn thresholds(&self) -> Thresholds {
        self.progress.thresholds.or_default()
    }

    /// Apply a `config set` key. Values are validated before anything changes.
    pub fn set_key(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            k if k.starts_with("goals.") => {
                let nutrient: Nutrient = k.trim_start_matches("goals.").parse()?;
                let slot = match nutrient {
                    Nutrient::Calories => &mut self.goals.calories,
                    Nutrient::Protein => &mut self.goals.protein,
                    Nutrient::Carbs => &mut self.goals.carbs,
                    Nutrient::Fat => &mut self.goals.fat,
                };
                *slot = match value {
                    "none" | "" => None,
                    v => Some(parse_non_negative(key, v)?),
                };
            }
            "progress.calorie_ceiling" => {
                self.progress.calorie_ceiling = parse_positive(key, value)?;
            }
            "progress.macro_ceiling" => {
                self.progress.macro_ceiling = parse_positive(key, value)?;
            }
            "progress.thresholds.approaching" => {
                let t = Thresholds::new(
                    parse_positive(key, value)?,
                    self.progress.thresholds.exceeded,
                );
                if !t.is_valid() {
                    anyhow::bail!(
                        "approaching threshold must be below exceeded ({})",
                        t.exceeded
                    );
                }
                self.progress.thresholds = t;
            }
            "progress.thresholds.exceeded" => {
                let t = Thresholds::new(
                    self.progress.thresholds.approaching,
                    parse_positive(key, value)?,
                );
                if !t.is_valid() {
                    anyhow::bail!(
                        "exceeded threshold must be above approaching ({})",
                        t.approaching
                    );
                }
                self.progress.thresholds = t;
            }
            k if k.starts_with("alias.") => {
                let alias = k.trim_start_matches("alias.");
                if alias.is_empty() {
                    anyhow::bail!("alias name must not be empty");
                }
                if !is_alias_target(value) {
                    anyhow::bail!(
                        "alias target must be a nutrient, burned, activity, food or meal, got '{}'",
                        value
                    );
                }
                self.aliases.insert(alias.to_string(), value.to_string());
            }
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("OPENPLATE_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".openplate")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}

/// Names a batch entry or `progress` can resolve an alias to.
fn is_alias_target(value: &str) -> bool {
    matches!(value, "burned" | "activity" | "food" | "meal") || value.parse::<Nutrient>().is_ok()
}

fn parse_non_negative(key: &str, value: &str) -> anyhow::Result<f64> {
    let v: f64 = value
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a number, got '{}'", key, value))?;
    if !v.is_finite() || v < 0.0 {
        anyhow::bail!("{} must be a finite, non-negative number", key);
    }
    Ok(v)
}

fn parse_positive(key: &str, value: &str) -> anyhow::Result<f64> {
    let v = parse_non_negative(key, value)?;
    if v == 0.0 {
        anyhow::bail!("{} must be greater than zero", key);
    }
    Ok(v)
}
