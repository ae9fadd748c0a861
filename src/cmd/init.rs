use anyhow::Result;
use chrono::Utc;
use std::io::{self, Write};
use std::str::FromStr;

use openkcal::core::energy;
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::models::profile::{ActivityLevel, Height, Sex, UnitSystem, UserProfile};

pub fn run(skip: bool) -> Result<()> {
    let config = Config::load().unwrap_or_default();

    if skip {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
        return Ok(());
    }

    println!("OpenKcal — Initial Setup\n");

    let age = prompt_u32("Age")?;
    let sex = prompt_parse::<Sex>("Sex (male/female)")?;
    let unit = prompt_parse::<UnitSystem>("Unit system (metric/imperial)")?;
    let height_label = match unit {
        UnitSystem::Metric => "Height (cm)",
        UnitSystem::Imperial => "Height (FEET'INCHES, e.g. 5'10)",
    };
    let height = prompt_height(height_label, unit)?;
    let weight_label = match unit {
        UnitSystem::Metric => "Weight (kg)",
        UnitSystem::Imperial => "Weight (lb)",
    };
    let weight = prompt_f64(weight_label)?;
    let activity = prompt_string(
        "Activity level (sedentary/slightly_active/moderately_active/very_active)",
    )?;

    let profile = UserProfile {
        user_id: config.user.clone(),
        age,
        sex,
        height_raw: height.to_raw(),
        weight_raw: weight,
        unit,
        activity_level: ActivityLevel::from_str(&activity).unwrap_or_default(),
        caloric_intake: 0.0,
        updated_at: Utc::now(),
    };

    config.save()?;
    let db = Database::open(&Config::db_path())?;
    db.upsert_profile(&profile)?;

    let m = energy::derive_metrics(&profile);
    println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    println!(
        "BMI {} | BMR {} kcal | TDEE {} kcal. Pick a plan with `openkcal plans`",
        m.bmi, m.bmr, m.tdee
    );

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_u32(label: &str) -> Result<u32> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("  invalid number, try again"),
        }
    }
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) if v > 0.0 => return Ok(v),
            _ => println!("  invalid number, try again"),
        }
    }
}

fn prompt_parse<T: FromStr<Err = anyhow::Error>>(label: &str) -> Result<T> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(e) => println!("  {}", e),
        }
    }
}

fn prompt_height(label: &str, unit: UnitSystem) -> Result<Height> {
    loop {
        let s = prompt_string(label)?;
        match Height::parse(&s, unit) {
            Ok(h) => return Ok(h),
            Err(e) => println!("  {}", e),
        }
    }
}
