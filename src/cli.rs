use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "openkcal",
    version,
    about = "Agent-native nutrition and energy-balance CLI"
)]
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
    /// Initialize profile and data directory
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log a meal
    Log {
        /// Meal name
        #[arg(required_unless_present = "batch")]
        name: Option<String>,

        /// Calories (kcal)
        #[arg(required_unless_present = "batch")]
        calories: Option<f64>,

        /// Protein (g)
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbohydrates (g)
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fats (g)
        #[arg(long, default_value_t = 0.0)]
        fats: f64,

        /// Health score (0-10)
        #[arg(long, default_value_t = 0.0)]
        health_score: f64,

        /// Data source (default: manual)
        #[arg(long)]
        source: Option<String>,

        /// Batch JSON array of meals
        #[arg(long)]
        batch: Option<String>,
    },

    /// Show logged meals
    Show {
        /// Number of recent meals to show (default: today's meals)
        #[arg(long)]
        last: Option<u32>,

        /// Show meals from this date
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Show meals to this date
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Derived body metrics (BMI, BMR, TDEE)
    Metrics,

    /// Generate calorie-intake plans
    Plans {
        /// Select a plan and persist its calories as the daily target
        #[arg(long)]
        select: Option<String>,
    },

    /// Quick status overview (today, week, streak)
    Status,

    /// Nutrition report over a date range
    Report {
        #[arg(long)]
        from: NaiveDate,

        #[arg(long)]
        to: NaiveDate,
    },

    /// Show or edit the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Export meal history
    Export {
        /// Output format: json or csv
        #[arg(long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,

        #[arg(long)]
        from: Option<NaiveDate>,

        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Re-import meal history from a JSON file (replaces existing history)
    Import {
        /// Path to a JSON array of meals
        file: String,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile with freshly derived metrics
    Show,
    /// Set a profile field (age, sex, height, weight, unit, activity)
    Set {
        /// Field name
        key: String,
        /// Field value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. user)
        key: String,
        /// Config value
        value: String,
    },
}
