use anyhow::Result;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => anyhow::bail!("invalid sex: {} (expected male/female)", other),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

// ---------------------------------------------------------------------------
// UnitSystem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn is_imperial(&self) -> bool {
        matches!(self, Self::Imperial)
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => anyhow::bail!("invalid unit system: {} (expected metric/imperial)", other),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

// ---------------------------------------------------------------------------
// ActivityLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    SlightlyActive,
    ModeratelyActive,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::SlightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = Infallible;

    // Unknown labels fall back to Sedentary (lowest multiplier).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "slightly_active" | "slightly-active" | "light" => Self::SlightlyActive,
            "moderately_active" | "moderately-active" | "moderate" => Self::ModeratelyActive,
            "very_active" | "very-active" | "high" => Self::VeryActive,
            _ => Self::Sedentary,
        })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::SlightlyActive => write!(f, "slightly_active"),
            Self::ModeratelyActive => write!(f, "moderately_active"),
            Self::VeryActive => write!(f, "very_active"),
        }
    }
}

// ---------------------------------------------------------------------------
// Height
// ---------------------------------------------------------------------------

/// Validated height in either unit system.
///
/// This is the strict counterpart to the lenient string parsing the engine
/// uses: `parse` rejects malformed input instead of defaulting to zero, so
/// profile edits can surface a real error to the user. Inches run 0-99 and
/// are stored as given; they are not carried into feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Metric { cm: f64 },
    Imperial { feet: u32, inches: u32 },
}

impl Height {
    /// Parse user input for the given unit system, rejecting malformed values.
    pub fn parse(raw: &str, unit: UnitSystem) -> Result<Self> {
        match unit {
            UnitSystem::Metric => {
                let cm: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid height: {} (expected cm)", raw))?;
                if cm <= 0.0 || !cm.is_finite() {
                    anyhow::bail!("invalid height: {} (must be positive)", raw);
                }
                Ok(Self::Metric { cm })
            }
            UnitSystem::Imperial => {
                let re = Regex::new(r"^\s*(\d+)\s*'\s*(\d{1,2})?\s*$").expect("valid regex");
                let caps = re.captures(raw).ok_or_else(|| {
                    anyhow::anyhow!("invalid height: {} (expected FEET'INCHES, e.g. 5'10)", raw)
                })?;
                let feet: u32 = caps[1].parse()?;
                let inches: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse())?;
                Ok(Self::Imperial { feet, inches })
            }
        }
    }

    pub fn centimeters(&self) -> f64 {
        match self {
            Self::Metric { cm } => *cm,
            Self::Imperial { feet, inches } => (f64::from(*feet) * 12.0 + f64::from(*inches)) * 2.54,
        }
    }

    /// The raw string shape the profile stores ("178" or "5'10").
    pub fn to_raw(&self) -> String {
        match self {
            Self::Metric { cm } => format!("{}", cm),
            Self::Imperial { feet, inches } => format!("{}'{}", feet, inches),
        }
    }
}

// ---------------------------------------------------------------------------
// UserProfile
// ---------------------------------------------------------------------------

/// Anthropometric profile for one user.
///
/// Only raw inputs are stored: BMI, BMR and TDEE are always derived on read
/// via `core::energy::derive_metrics`, so there is no cached value to go
/// stale when weight, height or unit system changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub age: u32,
    pub sex: Sex,
    /// Centimeters as a plain number string in metric ("178"), or
    /// FEET'INCHES in imperial ("5'10").
    pub height_raw: String,
    /// Kilograms in metric, pounds in imperial.
    pub weight_raw: f64,
    pub unit: UnitSystem,
    pub activity_level: ActivityLevel,
    /// Daily calorie target of the currently selected plan. 0 = none chosen.
    pub caloric_intake: f64,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: String) -> Self {
        Self {
            user_id,
            age: 0,
            sex: Sex::Male,
            height_raw: "0".to_string(),
            weight_raw: 0.0,
            unit: UnitSystem::Metric,
            activity_level: ActivityLevel::Sedentary,
            caloric_intake: 0.0,
            updated_at: Utc::now(),
        }
    }
}
