mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, ProfileAction};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip),
        Commands::Log {
            name,
            calories,
            protein,
            carbs,
            fats,
            health_score,
            source,
            batch,
        } => {
            if let Some(batch_json) = batch {
                cmd::log::run_batch(&batch_json, cli.human)
            } else {
                let n = name.as_deref().expect("name is required");
                let c = calories.expect("calories is required");
                cmd::log::run(
                    n,
                    c,
                    protein,
                    carbs,
                    fats,
                    health_score,
                    source.as_deref(),
                    cli.date,
                    cli.human,
                )
            }
        }
        Commands::Show { last, from, to } => cmd::show::run(last, from, to, cli.date, cli.human),
        Commands::Metrics => cmd::metrics::run(cli.human),
        Commands::Plans { select } => cmd::plans::run(select.as_deref(), cli.human),
        Commands::Status => cmd::status::run(cli.date, cli.human),
        Commands::Report { from, to } => cmd::report::run(from, to, cli.human),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd::profile::run_show(cli.human),
            ProfileAction::Set { key, value } => cmd::profile::run_set(&key, &value, cli.human),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Export {
            format,
            output,
            from,
            to,
        } => cmd::export::run_export(&format, output.as_deref(), from, to, cli.human),
        Commands::Import { file } => cmd::export::run_import(&file, cli.human),
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        let err = openkcal::output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
