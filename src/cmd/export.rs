use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use openkcal::core::export;
use openkcal::db::Database;
use openkcal::models::config::Config;
use openkcal::output;

pub fn run_export(
    format: &str,
    output_path: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    human_flag: bool,
) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let content = match format {
        "csv" => export::to_csv(&db, &config.user, from, to)?,
        "json" => export::to_json(&db, &config.user, from, to)?,
        other => anyhow::bail!("unsupported format: {} (expected csv/json)", other),
    };

    if let Some(path) = output_path {
        std::fs::write(path, &content)?;
        if human_flag {
            println!("Exported to {}", path);
        } else {
            let out = output::success("export", json!({ "path": path, "format": format }));
            println!("{}", serde_json::to_string(&out)?);
        }
    } else {
        print!("{}", content);
    }
    Ok(())
}

pub fn run_import(file: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;

    let json_str = std::fs::read_to_string(file)?;
    let (deleted, inserted) = export::import_json(&db, &config.user, &json_str)?;

    if human_flag {
        println!(
            "Imported {} meal(s), replaced {} existing",
            inserted, deleted
        );
    } else {
        let out = output::success(
            "import",
            json!({ "deleted": deleted, "inserted": inserted }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
