use serde::Serialize;

use crate::core::body;
use crate::models::profile::{ActivityLevel, Sex, UnitSystem, UserProfile};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DerivedMetrics {
    pub bmi: f64,
    pub bmr: i32,
    pub tdee: i32,
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(
    age: u32,
    sex: Sex,
    height_raw: &str,
    weight: f64,
    unit: UnitSystem,
    activity_level: ActivityLevel,
) -> i32 {
    let bmr = body::compute_bmr(age, sex, height_raw, weight, unit);
    (f64::from(bmr) * activity_level.multiplier()).round() as i32
}

/// Recompute all derived metrics from a profile's raw fields.
///
/// Nothing here is cached: this is the single recompute entry point callers
/// invoke after any profile mutation, so derived values can never be stale.
pub fn derive_metrics(p: &UserProfile) -> DerivedMetrics {
    let bmi = body::compute_bmi(p.unit, p.weight_raw, &p.height_raw);
    let bmr = body::compute_bmr(p.age, p.sex, &p.height_raw, p.weight_raw, p.unit);
    let tdee = (f64::from(bmr) * p.activity_level.multiplier()).round() as i32;
    DerivedMetrics { bmi, bmr, tdee }
}
