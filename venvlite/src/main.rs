mod cli;
mod commands;
mod observability;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use venvlite_core::config::EnvConfig;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Setup {
            env_dir,
            python,
            requirements,
        } => {
            let config = EnvConfig::from_env().with_cli_overrides(env_dir, python, requirements, None);
            commands::setup::cmd_setup(&config)?;
        }
        Commands::Run {
            env_dir,
            python,
            entry,
            runner_args,
        } => {
            let config = EnvConfig::from_env().with_cli_overrides(env_dir, python, None, entry);
            let code = commands::run::cmd_run(&config, &runner_args)?;
            // The operator sees the runner's own exit code, untranslated.
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Clean { env_dir, dry_run } => {
            let config = EnvConfig::from_env().with_cli_overrides(env_dir, None, None, None);
            commands::clean::cmd_clean(&config.env_dir, dry_run)?;
        }
        Commands::Status {
            env_dir,
            requirements,
            json,
        } => {
            let config =
                EnvConfig::from_env().with_cli_overrides(env_dir, None, requirements, None);
            commands::status::cmd_status(&config, json)?;
        }
    }

    Ok(())
}
