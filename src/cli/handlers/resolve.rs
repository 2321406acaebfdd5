use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::{cli::handlers::commons, core::interpolator::replace_braces};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Substitutes the {...} placeholders of a template for one environment."
)]
struct ResolveArgs {
    /// The template, e.g. "pytest {posargs:tests} --basetemp={envtmpdir}".
    template: String,

    /// The configuration file to read. Defaults to `./tox.ini`.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// The environment whose name, attributes and factors are used.
    #[arg(long, short, default_value = "python")]
    env: String,

    /// Positional arguments for `{posargs}`, given after `--`.
    #[arg(last = true)]
    posargs: Vec<String>,
}

/// Substitutes the placeholders of a template against one environment.
pub fn handle(args: Vec<String>) -> Result<()> {
    let resolve_args = ResolveArgs::try_parse_from(&args)?;
    println!("{}", resolve_template(&resolve_args)?);
    Ok(())
}

fn resolve_template(args: &ResolveArgs) -> Result<String> {
    let loaded = commons::load_config(args.config.as_deref())?;
    let env = loaded.env(&args.env, &args.posargs);
    replace_braces(&args.template, &env).with_context(|| {
        format!(
            "Failed to resolve '{}' for environment '{}'",
            args.template, args.env
        )
    })
}
