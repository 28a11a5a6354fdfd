mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use openplate::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("OPENPLATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (command, result) = match cli.command {
        Commands::Init => ("init", cmd::init::run()),
        Commands::Progress {
            nutrient,
            consumed,
            goal,
            burned,
            ceiling,
        } => (
            "progress",
            cmd::progress::run(&nutrient, consumed, goal, burned, ceiling, cli.human),
        ),
        Commands::Macros {
            protein,
            carbs,
            fat,
        } => ("macros", cmd::macros::run(protein, carbs, fat, cli.human)),
        Commands::Summary {
            calories,
            burned,
            protein,
            carbs,
            fat,
            batch,
        } => {
            let intake = cmd::summary::Intake {
                calories,
                burned,
                protein,
                carbs,
                fat,
            };
            (
                "summary",
                cmd::summary::run(intake, batch.as_deref(), cli.date, cli.human),
            )
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(cli.human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        let code = output::ErrorCode::classify(&e);
        tracing::debug!(?code, error = ?e, "command failed");
        let err = output::error(command, code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
