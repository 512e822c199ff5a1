// plancheck/src/main.rs

mod cli;
mod commands;
mod render;

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

use cli::{Cli, Commands};
use commands::Context;
use commands::check::CheckArgs;
use commands::measure::MeasureArgs;
use plancheck_core::PlancheckError;
use plancheck_core::infrastructure::error::InfrastructureError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{:?}", into_report(err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let Cli {
        project_dir,
        standards_dir,
        verbose,
        command,
    } = cli;

    // Settings decide the final log level, so loading them logs through a
    // scoped subscriber at the command-line level.
    let ctx = tracing::subscriber::with_default(stderr_subscriber(log_level(verbose, None)), || {
        Context::load(&project_dir, standards_dir)
    })?;
    tracing::subscriber::set_global_default(stderr_subscriber(log_level(
        verbose,
        Some(&ctx.settings.log_level),
    )))?;

    match command {
        Commands::ListRules => commands::list_rules::execute(&ctx)?,

        Commands::ShowRules { name, format } => commands::show_rules::execute(&ctx, &name, format)?,

        Commands::Check {
            rule_sets,
            building_type,
            categories,
            format,
            output,
        } => commands::check::execute(
            &ctx,
            CheckArgs {
                rule_sets,
                building_type,
                categories,
                format,
                output,
            },
        )?,

        Commands::ExtractDims {
            folder,
            layers,
            dimension_types,
            format,
        } => commands::extract::execute(&ctx, folder, layers, dimension_types, format)?,

        Commands::Measure {
            folder,
            rule_sets,
            building_type,
            format,
            output,
            strict,
        } => {
            return commands::measure::execute(
                &ctx,
                MeasureArgs {
                    folder,
                    rule_sets,
                    building_type,
                    format,
                    output,
                    strict,
                },
            );
        }
    }

    Ok(true)
}

fn log_level(verbose: u8, configured: Option<&str>) -> Level {
    match verbose {
        0 => configured
            .and_then(|l| l.parse::<Level>().ok())
            .unwrap_or(Level::INFO),
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// Logs go to stderr so `--format json` output on stdout stays parseable.
fn stderr_subscriber(level: Level) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .finish()
}

fn into_report(err: anyhow::Error) -> miette::Report {
    match err.downcast::<PlancheckError>() {
        Ok(e) => miette::Report::new(e),
        Err(err) => match err.downcast::<InfrastructureError>() {
            Ok(e) => miette::Report::new(e),
            Err(err) => miette::miette!("{:#}", err),
        },
    }
}
