use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::energy;
use crate::models::profile::UserProfile;

/// Absolute floor no plan may drop below, regardless of BMR.
pub const ABSOLUTE_MIN_CALORIES: i32 = 1200;
/// Margin below BMR that is still considered safe.
pub const BMR_SAFETY_MARGIN: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Maintain,
    MildLoss,
    ActiveLoss,
    ExtremeLoss,
}

impl FromStr for PlanType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "maintain" => Ok(Self::Maintain),
            "mild_loss" | "mild" => Ok(Self::MildLoss),
            "active_loss" | "active" => Ok(Self::ActiveLoss),
            "extreme_loss" | "extreme" => Ok(Self::ExtremeLoss),
            other => anyhow::bail!(
                "invalid plan type: {} (expected maintain/mild_loss/active_loss/extreme_loss)",
                other
            ),
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maintain => write!(f, "maintain"),
            Self::MildLoss => write!(f, "mild_loss"),
            Self::ActiveLoss => write!(f, "active_loss"),
            Self::ExtremeLoss => write!(f, "extreme_loss"),
        }
    }
}

/// A candidate daily calorie target. Transient, never persisted; selecting
/// one copies its calories onto the profile's `caloric_intake`.
#[derive(Debug, Clone, Serialize)]
pub struct CaloriePlan {
    pub plan_type: PlanType,
    /// Human-readable weekly rate, empty for Maintain.
    pub rate_label: String,
    pub calories_per_day: i32,
}

/// Minimum daily calorie target a plan may not drop below.
pub fn min_safe_calories(bmr: i32) -> i32 {
    (bmr - BMR_SAFETY_MARGIN).max(ABSOLUTE_MIN_CALORIES)
}

/// Generate the ranked plan list for a profile: Maintain first, then
/// deficits in decreasing calories, with anything under the safety floor
/// filtered out. Returns 1-4 plans for a computable profile, empty when the
/// profile's metrics are unknown (0 sentinel BMR).
pub fn generate_plans(profile: &UserProfile) -> Vec<CaloriePlan> {
    let m = energy::derive_metrics(profile);
    if m.bmr <= 0 {
        return Vec::new();
    }
    let floor = min_safe_calories(m.bmr);

    let candidates = [
        (PlanType::Maintain, "", m.tdee),
        (PlanType::MildLoss, "-0.25 kg/week", m.tdee - 275),
        (PlanType::ActiveLoss, "-0.5 kg/week", m.tdee - 550),
        (PlanType::ExtremeLoss, "-1 kg/week", m.tdee - 1100),
    ];

    let plans: Vec<CaloriePlan> = candidates
        .into_iter()
        .filter(|(_, _, calories)| *calories >= floor)
        .map(|(plan_type, rate_label, calories_per_day)| CaloriePlan {
            plan_type,
            rate_label: rate_label.to_string(),
            calories_per_day,
        })
        .collect();

    // tdee >= bmr * 1.2 > bmr - 300, so once bmr >= 1000 the floor's 1200
    // clamp is also covered and Maintain always survives
    debug_assert!(
        m.bmr < 1000 || plans.iter().any(|p| p.plan_type == PlanType::Maintain),
        "maintain plan must survive the safety floor"
    );

    plans
}
