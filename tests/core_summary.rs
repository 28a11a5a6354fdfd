mod common;

use chrono::NaiveDate;
use common::assert_close;
use openplate::core::intake::{DailyTotals, apply_batch, ensure_amount};
use openplate::core::summary;
use openplate::models::config::Config;
use openplate::models::nutrient::Nutrient;
use openplate::models::progress::{Band, Thresholds};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn config_with_goals() -> Config {
    let mut config = Config::default();
    config.goals.calories = Some(2000.0);
    config.goals.protein = Some(120.0);
    config.goals.carbs = Some(250.0);
    config.goals.fat = Some(70.0);
    config.aliases = Config::default_aliases();
    config
}

// ── apply_batch ─────────────────────────────────────────────────────────────

#[test]
fn test_batch_accumulates_intakes() {
    let config = config_with_goals();
    let mut totals = DailyTotals::default();
    let batch = r#"[
        {"type": "protein", "amount": 30},
        {"type": "protein", "amount": 25.5},
        {"type": "calories", "amount": 600},
        {"type": "burned", "amount": 250}
    ]"#;
    let n = apply_batch(&mut totals, &config, batch).unwrap();
    assert_eq!(n, 4);
    assert_close(totals.protein, 55.5);
    assert_close(totals.calories, 600.0);
    assert_close(totals.burned, 250.0);
    assert_eq!(totals.fat, 0.0);
}

#[test]
fn test_batch_food_entry_carries_all_macros() {
    let config = Config::default();
    let mut totals = DailyTotals::default();
    let batch = r#"[{"type": "food", "calories": 420, "protein": 30, "carbs": 40, "fat": 12}]"#;
    apply_batch(&mut totals, &config, batch).unwrap();
    assert_eq!(
        totals,
        DailyTotals {
            calories: 420.0,
            burned: 0.0,
            protein: 30.0,
            carbs: 40.0,
            fat: 12.0,
        }
    );
}

#[test]
fn test_batch_food_entry_fields_are_optional() {
    let mut totals = DailyTotals::default();
    apply_batch(&mut totals, &Config::default(), r#"[{"type": "meal", "fat": 9}]"#).unwrap();
    assert_close(totals.fat, 9.0);
    assert_eq!(totals.calories, 0.0);
}

#[test]
fn test_batch_resolves_aliases() {
    let config = config_with_goals();
    let mut totals = DailyTotals::default();
    let batch = r#"[{"type": "p", "amount": 10}, {"type": "b", "amount": 100}]"#;
    apply_batch(&mut totals, &config, batch).unwrap();
    assert_close(totals.protein, 10.0);
    assert_close(totals.burned, 100.0);
}

#[test]
fn test_batch_adds_to_existing_totals() {
    let mut totals = DailyTotals::default();
    totals.add(Nutrient::Carbs, 100.0).unwrap();
    apply_batch(
        &mut totals,
        &Config::default(),
        r#"[{"type": "carbohydrate", "amount": 20}]"#,
    )
    .unwrap();
    assert_close(totals.consumed(Nutrient::Carbs), 120.0);
}

#[test]
fn test_batch_rejects_negative_amount() {
    let mut totals = DailyTotals::default();
    let err = apply_batch(
        &mut totals,
        &Config::default(),
        r#"[{"type": "fat", "amount": 5}, {"type": "fat", "amount": -3}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("entry 1"));
}

#[test]
fn test_batch_rejects_missing_fields_and_unknown_types() {
    let config = Config::default();
    let mut totals = DailyTotals::default();
    assert!(apply_batch(&mut totals, &config, r#"[{"amount": 5}]"#).is_err());
    assert!(apply_batch(&mut totals, &config, r#"[{"type": "fat"}]"#).is_err());
    let err = apply_batch(&mut totals, &config, r#"[{"type": "sugar", "amount": 5}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid nutrient"));
    assert!(apply_batch(&mut totals, &config, "not json").is_err());
}

#[test]
fn test_batch_rejects_overflowing_total() {
    let mut totals = DailyTotals::default();
    let err = apply_batch(
        &mut totals,
        &Config::default(),
        r#"[{"type": "calories", "amount": 1.7e308}, {"type": "calories", "amount": 1.7e308}]"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("entry 1"));
    assert!(err.to_string().contains("overflowed"));
    assert!(totals.calories.is_finite());
}

#[test]
fn test_add_rejects_overflow_and_bad_amounts() {
    let mut totals = DailyTotals::default();
    totals.add(Nutrient::Fat, f64::MAX).unwrap();
    assert!(totals.add(Nutrient::Fat, f64::MAX).is_err());
    assert_eq!(totals.fat, f64::MAX);
    assert!(totals.add(Nutrient::Protein, -1.0).is_err());
    assert!(totals.add_burned(f64::NAN).is_err());
    totals.add_burned(120.0).unwrap();
    assert_close(totals.burned, 120.0);
}

#[test]
fn test_ensure_amount() {
    assert_eq!(ensure_amount("goal", 0.0).unwrap(), 0.0);
    assert_eq!(ensure_amount("goal", 12.5).unwrap(), 12.5);
    let err = ensure_amount("--goal", -500.0).unwrap_err();
    assert!(err.to_string().contains("--goal"));
    assert!(ensure_amount("goal", f64::INFINITY).is_err());
}

// ── summary::compute ────────────────────────────────────────────────────────

#[test]
fn test_summary_uses_configured_goals_and_ceilings() {
    let config = config_with_goals();
    let totals = DailyTotals {
        calories: 3500.0,
        burned: 0.0,
        protein: 200.0,
        carbs: 100.0,
        fat: 56.0,
    };
    let s = summary::compute(&totals, &config, day());

    assert_eq!(s.date, day());
    // 3500 / 2000 = 1.75, clamped to the calorie ceiling 1.5
    assert_close(s.calories.progress.fraction_of_goal, 1.5);
    assert_close(s.calories.progress.unclamped_percent, 175.0);
    // 200 / 120 clamps to the macro ceiling 1.2
    assert_close(s.macros.protein.fraction_of_goal, 1.2);
    assert_eq!(s.macros.protein.band, Band::Exceeded);
    assert_close(s.macros.carbs.fraction_of_goal, 0.4);
    assert_eq!(s.macros.carbs.band, Band::Normal);
    assert_close(s.macros.fat.fraction_of_goal, 0.8);
    assert_eq!(s.macros.fat.band, Band::Approaching);
}

#[test]
fn test_summary_without_goals_is_all_normal() {
    let totals = DailyTotals {
        calories: 1800.0,
        burned: 0.0,
        protein: 50.0,
        carbs: 150.0,
        fat: 30.0,
    };
    let s = summary::compute(&totals, &Config::default(), day());
    assert_eq!(s.calories.progress.fraction_of_goal, 0.0);
    assert_eq!(s.calories.progress.band, Band::Normal);
    for n in Nutrient::MACROS {
        let p = s.macros.get(n).unwrap();
        assert_eq!(p.fraction_of_goal, 0.0);
        assert_eq!(p.band, Band::Normal);
    }
    assert_close(s.breakdown.total, 230.0);
    assert_eq!(s.calories.adjusted_remaining, 0.0);
}

#[test]
fn test_summary_burned_calories() {
    let config = config_with_goals();
    let totals = DailyTotals {
        calories: 1800.0,
        burned: 400.0,
        ..Default::default()
    };
    let s = summary::compute(&totals, &config, day());
    assert_close(s.calories.burned, 400.0);
    assert_close(s.calories.net_calories, 1400.0);
    assert_close(s.calories.progress.remaining, 200.0);
    assert_close(s.calories.adjusted_remaining, 600.0);
}

#[test]
fn test_summary_net_calories_floor_at_zero() {
    let totals = DailyTotals {
        calories: 300.0,
        burned: 900.0,
        ..Default::default()
    };
    let s = summary::compute(&totals, &config_with_goals(), day());
    assert_eq!(s.calories.net_calories, 0.0);
}

#[test]
fn test_summary_invalid_thresholds_use_defaults() {
    let mut config = config_with_goals();
    config.progress.thresholds = Thresholds::new(1.1, 0.5);
    let totals = DailyTotals {
        calories: 1700.0,
        ..Default::default()
    };
    let s = summary::compute(&totals, &config, day());
    assert_eq!(s.calories.progress.band, Band::Approaching);
}

#[test]
fn test_summary_serializes_flat_calorie_fields() {
    let totals = DailyTotals {
        calories: 1600.0,
        burned: 100.0,
        ..Default::default()
    };
    let s = summary::compute(&totals, &config_with_goals(), day());
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["date"], "2026-03-14");
    assert_eq!(v["calories"]["band"], "approaching");
    assert!((v["calories"]["fraction_of_goal"].as_f64().unwrap() - 0.8).abs() < 1e-9);
    assert_eq!(v["calories"]["burned"], 100.0);
    assert_eq!(v["macros"]["protein"]["band"], "normal");
}
