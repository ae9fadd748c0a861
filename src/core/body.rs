use crate::core::units;
use crate::models::profile::{Sex, UnitSystem};

/// Inches cap applied on the BMI path only. A height like "5'15" is read as
/// 5'11 for BMI, while BMR uses the full value; the asymmetry matches the
/// historical behavior BMI values were computed with.
const BMI_MAX_INCHES: f64 = 11.0;

/// Body mass index from raw profile fields, 1 decimal place.
///
/// Returns 0.0 as an "unknown" sentinel for non-positive weight or height;
/// callers must not treat 0 as a physiological BMI.
pub fn compute_bmi(unit: UnitSystem, weight: f64, height_raw: &str) -> f64 {
    if !(weight > 0.0) || !weight.is_finite() {
        return 0.0;
    }
    match unit {
        UnitSystem::Metric => {
            let cm = units::parse_metric_height(height_raw);
            if cm <= 0.0 {
                return 0.0;
            }
            let m = cm / 100.0;
            units::round1(weight / (m * m))
        }
        UnitSystem::Imperial => {
            let (feet, inches) = units::parse_feet_inches(height_raw);
            let total_inches = feet * 12.0 + inches.min(BMI_MAX_INCHES);
            if total_inches <= 0.0 {
                return 0.0;
            }
            units::round1(weight / (total_inches * total_inches) * 703.0)
        }
    }
}

/// Standard BMI bands. None for the 0 sentinel.
pub fn bmi_category(bmi: f64) -> Option<&'static str> {
    if bmi <= 0.0 {
        return None;
    }
    Some(match bmi {
        b if b < 18.5 => "underweight",
        b if b < 25.0 => "normal",
        b if b < 30.0 => "overweight",
        _ => "obese",
    })
}

/// Basal metabolic rate (Mifflin-St Jeor), rounded to the nearest kcal.
///
/// Imperial height is parsed uncapped (full inches value), unlike the BMI
/// path. Returns 0 for non-positive weight or height.
pub fn compute_bmr(age: u32, sex: Sex, height_raw: &str, weight: f64, unit: UnitSystem) -> i32 {
    let (weight_kg, height_cm) = match unit {
        UnitSystem::Metric => (weight, units::parse_metric_height(height_raw)),
        UnitSystem::Imperial => {
            let (feet, inches) = units::parse_feet_inches(height_raw);
            (units::lb_to_kg(weight), units::in_to_cm(feet * 12.0 + inches))
        }
    };
    if !(weight_kg > 0.0) || !weight_kg.is_finite() || height_cm <= 0.0 {
        return 0;
    }

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    bmr.round() as i32
}
