use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rayon::prelude::*;
use std::path::PathBuf;

use crate::{
    cli::handlers::commons,
    core::{commands::parse_commands, envlist::parse_envlist},
    models::ResolvedEnv,
};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints the substituted commands of each environment."
)]
struct ShowArgs {
    /// The configuration file to read. Defaults to `./tox.ini`.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// The environments to show, as an envlist expression. Defaults to `[tox]envlist`.
    #[arg(long, short)]
    env: Option<String>,

    /// Print JSON instead of shell-quoted command lines.
    #[arg(long)]
    json: bool,

    /// Positional arguments for `{posargs}`, given after `--`.
    #[arg(last = true)]
    posargs: Vec<String>,
}

/// Prints the resolved commands of the selected environments.
pub fn handle(args: Vec<String>) -> Result<()> {
    let show_args = ShowArgs::try_parse_from(&args)?;
    let resolved = resolve_envs(&show_args)?;

    if show_args.json {
        let json_output = serde_json::to_string_pretty(&resolved)
            .context("Failed to serialize the resolved environments to JSON")?;
        println!("{}", json_output);
        return Ok(());
    }

    for env in &resolved {
        println!("{}", env.name.cyan().bold());
        if env.commands.is_empty() {
            println!("  {}", "(no commands)".dimmed());
        }
        for argv in &env.commands {
            println!("  {} {}", "$".dimmed(), commons::format_command(argv));
        }
    }
    Ok(())
}

/// Resolves the commands of every selected environment. Environments are independent,
/// so they are resolved in parallel; the output keeps the envlist order.
fn resolve_envs(args: &ShowArgs) -> Result<Vec<ResolvedEnv>> {
    let loaded = commons::load_config(args.config.as_deref())?;
    let names = match &args.env {
        Some(expr) => parse_envlist(expr),
        None => loaded.envlist()?,
    };

    names
        .par_iter()
        .map(|name| -> Result<ResolvedEnv> {
            let env = loaded.env(name, &args.posargs);
            let commands = parse_commands(&env)
                .with_context(|| format!("Failed to resolve the commands of '{}'", name))?;
            Ok(ResolvedEnv {
                name: name.clone(),
                commands,
            })
        })
        .collect()
}
