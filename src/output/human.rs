use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use crate::core::body;
use crate::core::energy::DerivedMetrics;
use crate::core::nutrition::DailyTotals;
use crate::core::plan::CaloriePlan;
use crate::core::report::ReportResult;
use crate::core::status::StatusData;
use crate::models::meal::MealRecord;

/// Pretty-print a single meal entry.
pub fn format_meal(m: &MealRecord) -> String {
    let ts = m.created_at.format("%Y-%m-%d %H:%M");
    format!(
        "{} | {} = {} kcal (P {} / C {} / F {} g)",
        ts, m.name, m.calories, m.protein, m.carbs, m.fats
    )
}

pub fn format_totals(t: &DailyTotals) -> String {
    format!(
        "{} kcal  protein {} g  carbs {} g  fats {} g",
        t.calories, t.protein, t.carbs, t.fats
    )
}

/// Derived metrics with the BMI band, one per line.
pub fn format_metrics(m: &DerivedMetrics) -> String {
    let bmi_line = match body::bmi_category(m.bmi) {
        Some(cat) => format!("BMI:  {} ({})", m.bmi, cat),
        None => "BMI:  unknown".to_string(),
    };
    format!("{}\nBMR:  {} kcal\nTDEE: {} kcal", bmi_line, m.bmr, m.tdee)
}

/// Render the plan list as a table.
pub fn plans_table(plans: &[CaloriePlan], selected: f64) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["plan", "rate", "kcal/day", ""]);
    for p in plans {
        let marker = if f64::from(p.calories_per_day) == selected {
            "selected"
        } else {
            ""
        };
        table.add_row([
            p.plan_type.to_string(),
            p.rate_label.clone(),
            p.calories_per_day.to_string(),
            marker.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_status(s: &StatusData) -> String {
    let mut out = format!("{} | {}\n", s.date, s.user);

    if let Some(m) = &s.metrics {
        out.push_str(&format!("{}\n", format_metrics(m)));
    }
    if s.target > 0.0 {
        out.push_str(&format!("Target: {} kcal\n", s.target));
    } else {
        out.push_str("Target: none (run `openkcal plans --select <type>`)\n");
    }

    out.push_str(&format!(
        "Today: {} meal(s), {}\n",
        s.today.meal_count,
        format_totals(&s.today.totals)
    ));
    let day = if s.today.successful {
        "on track".green().to_string()
    } else if s.today.totals.calories > s.target && s.target > 0.0 {
        "over target".red().to_string()
    } else {
        "not yet met".yellow().to_string()
    };
    out.push_str(&format!("Day: {} ({} kcal remaining)\n", day, s.today.remaining));

    let week: String = s
        .week
        .days
        .iter()
        .enumerate()
        .map(|(i, ok)| {
            let mark = if *ok { "#" } else { "." };
            if i == s.week.today_index {
                format!("[{}]", mark)
            } else {
                format!(" {} ", mark)
            }
        })
        .collect();
    out.push_str(&format!("Week (Mon..Sun): {}\n", week));
    out.push_str(&format!(
        "Streak: {}\n",
        format!("{} day(s)", s.week.streak).green()
    ));
    out
}

/// Render a date-range report as a table plus a summary line.
pub fn format_report(r: &ReportResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["", "calories", "protein", "carbs", "fats"]);
    table.add_row([
        "total".to_string(),
        format!("{:.0}", r.totals.calories),
        format!("{:.0}", r.totals.protein),
        format!("{:.0}", r.totals.carbs),
        format!("{:.0}", r.totals.fats),
    ]);
    if let Some(avg) = &r.daily_avg {
        table.add_row([
            "avg/day".to_string(),
            format!("{:.0}", avg.calories),
            format!("{:.0}", avg.protein),
            format!("{:.0}", avg.carbs),
            format!("{:.0}", avg.fats),
        ]);
    }

    format!(
        "{} .. {}: {} meal(s) over {} day(s), {} successful\n{}",
        r.from, r.to, r.total_meals, r.days_logged, r.successful_days, table
    )
}
