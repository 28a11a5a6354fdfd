#![allow(dead_code)]

use openplate::models::nutrient::NutrientGoal;
use std::ffi::OsString;
use std::sync::{LazyLock, Mutex};
use tempfile::TempDir;

pub const EPS: f64 = 1e-9;

static HOME_ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Goal with no burned calories.
pub fn goal(goal_amount: f64, consumed_amount: f64) -> NutrientGoal {
    NutrientGoal::new(goal_amount, consumed_amount)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

struct OpenPlateHomeGuard {
    previous: Option<OsString>,
}

impl OpenPlateHomeGuard {
    fn set(path: &std::path::Path) -> Self {
        let previous = std::env::var_os("OPENPLATE_HOME");
        // SAFETY: tests that touch OPENPLATE_HOME are serialized by HOME_ENV_LOCK.
        unsafe { std::env::set_var("OPENPLATE_HOME", path) };
        Self { previous }
    }
}

impl Drop for OpenPlateHomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            // SAFETY: tests that touch OPENPLATE_HOME are serialized by HOME_ENV_LOCK.
            Some(value) => unsafe { std::env::set_var("OPENPLATE_HOME", value) },
            // SAFETY: as above.
            None => unsafe { std::env::remove_var("OPENPLATE_HOME") },
        }
    }
}

/// Run `f` with `OPENPLATE_HOME` pointing at a fresh temp dir.
pub fn with_temp_home<T>(f: impl FnOnce(&std::path::Path) -> T) -> T {
    let _lock = HOME_ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    let _home = OpenPlateHomeGuard::set(dir.path());
    f(dir.path())
}
