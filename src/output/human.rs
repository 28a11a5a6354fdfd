use colored::{ColoredString, Colorize};
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::summary::DailySummary;
use crate::models::nutrient::Nutrient;
use crate::models::progress::{Band, MacroBreakdown, ProgressResult};

const BAR_WIDTH: usize = 20;

/// Band name painted in its gradient color.
pub fn band_label(band: Band) -> ColoredString {
    let label = band.to_string();
    match band {
        Band::Normal => label.green(),
        Band::Approaching => label.yellow(),
        Band::Exceeded => label.red(),
    }
}

/// Text progress bar. Anything past the goal shows as a full bar.
pub fn render_bar(fraction: f64) -> String {
    let filled = if fraction.is_finite() {
        (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// One-line progress for a nutrient.
pub fn format_progress(nutrient: Nutrient, p: &ProgressResult) -> String {
    let unit = nutrient.unit();
    if p.goal_amount == 0.0 {
        return format!(
            "{}: {:.0} {} consumed (no goal set)",
            nutrient, p.consumed_amount, unit
        );
    }

    let detail = if p.over_amount > 0.0 {
        format!(
            "+{:.0} {} over ({:.0}% of goal)",
            p.over_amount, unit, p.unclamped_percent
        )
    } else {
        format!("{:.0} {} remaining", p.remaining, unit)
    };

    format!(
        "{}: {:.0}/{:.0} {} {} {:.0}% [{}] {}",
        nutrient,
        p.consumed_amount,
        p.goal_amount,
        unit,
        render_bar(p.fraction_of_goal),
        p.percent_of_goal,
        band_label(p.band),
        detail
    )
}

/// Table of grams, mass share and energy share per macro.
pub fn format_breakdown(b: &MacroBreakdown) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Macro", "Grams", "Share", "Energy share"]);

    let rows = [
        (Nutrient::Protein, b.protein, b.protein_share, b.protein_energy_share),
        (Nutrient::Carbs, b.carbs, b.carbs_share, b.carbs_energy_share),
        (Nutrient::Fat, b.fat, b.fat_share, b.fat_energy_share),
    ];
    for (nutrient, grams, share, energy) in rows {
        table.add_row(vec![
            nutrient.to_string(),
            format!("{:.1}", grams),
            format!("{:.1}%", share * 100.0),
            format!("{:.1}%", energy * 100.0),
        ]);
    }
    table.add_row(vec![
        "total".to_string(),
        format!("{:.1}", b.total),
        (if b.total > 0.0 { "100.0%" } else { "0.0%" }).to_string(),
        format!("{:.0} kcal", b.macro_calories),
    ]);
    table.to_string()
}

/// Pretty-print the daily summary.
pub fn format_summary(s: &DailySummary) -> String {
    let mut out = format!("=== OpenPlate Summary: {} ===\n\n", s.date);
    out.push_str(&format_progress(Nutrient::Calories, &s.calories.progress));
    if s.calories.burned > 0.0 {
        out.push_str(&format!(
            "\nBurned: {:.0} kcal | Net: {:.0} kcal",
            s.calories.burned, s.calories.net_calories
        ));
        if s.calories.progress.goal_amount > 0.0 {
            out.push_str(&format!(
                " | Remaining with activity: {:.0} kcal",
                s.calories.adjusted_remaining
            ));
        }
    }
    out.push('\n');
    for nutrient in Nutrient::MACROS {
        if let Some(p) = s.macros.get(nutrient) {
            out.push('\n');
            out.push_str(&format_progress(nutrient, p));
        }
    }
    out.push_str("\n\n");
    out.push_str(&format_breakdown(&s.breakdown));
    out
}
