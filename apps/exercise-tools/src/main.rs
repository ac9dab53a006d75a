//! exercise-tools binary
//!
//! Logs go to stderr; stdout only carries the one-line result of each job.

use anyhow::Context;
use clap::Parser;
use exercise_tools::cli::{Cli, Commands};
use exercise_tools::{run_config, run_manifest, Config, ManifestConfig, RemovePagesConfig};
use exercise_tools::{OutputSpec, ToolError};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(command: Commands) -> anyhow::Result<Result<(), ToolError>> {
    let outcome = match command {
        Commands::RemovePages {
            input,
            output,
            range,
            policy,
        } => {
            let job = RemovePagesConfig {
                input,
                policy: policy.into(),
                outputs: vec![OutputSpec {
                    path: output,
                    range,
                }],
            };
            exercise_tools::run_remove_pages(&job).map(|_| ())
        }
        Commands::Manifest { root, dir, output } => {
            let defaults = ManifestConfig::from_project_root(&root);
            let job = ManifestConfig {
                directory: dir.unwrap_or(defaults.directory),
                output: output.unwrap_or(defaults.output),
            };
            run_manifest(&job).map(|_| ())
        }
        Commands::Run { config } => {
            let config = Config::from_file(&config)?;
            run_config(&config).map(|_| ())
        }
        Commands::PrintDefaultConfig => {
            print!("{}", Config::scripted_defaults().to_toml_string()?);
            Ok(())
        }
    };
    Ok(outcome)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("exercise-tools v{}", env!("CARGO_PKG_VERSION"));

    match execute(cli.command)? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_user_error() => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e).context("exercise-tools failed"),
    }
}
