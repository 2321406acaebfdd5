use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::{cli::handlers::commons, core::envlist::parse_envlist};

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints the expanded list of environment names."
)]
struct EnvlistArgs {
    /// An envlist expression, e.g. "{py27,py34}-django{15,16}, flake8".
    /// Defaults to `[tox]envlist` of the configuration file.
    expr: Option<String>,

    /// The configuration file to read. Defaults to `./tox.ini`.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

/// Prints the expanded environment list, one name per line.
pub fn handle(args: Vec<String>) -> Result<()> {
    let envlist_args = EnvlistArgs::try_parse_from(&args)?;
    for name in list_envs(&envlist_args)? {
        println!("{}", name);
    }
    Ok(())
}

fn list_envs(args: &EnvlistArgs) -> Result<Vec<String>> {
    match &args.expr {
        Some(expr) => Ok(parse_envlist(expr)),
        None => commons::load_config(args.config.as_deref())?.envlist(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_envs_from_expression() {
        let args = EnvlistArgs::try_parse_from(["{py26,py27}-django{15,16}, py32"]).unwrap();
        assert_eq!(
            list_envs(&args).unwrap(),
            vec![
                "py26-django15",
                "py26-django16",
                "py27-django15",
                "py27-django16",
                "py32"
            ]
        );
    }

    #[test]
    fn test_list_envs_from_config() {
        let dir = tempdir().unwrap();
        let ini_path = dir.path().join("tox.ini");
        fs::write(&ini_path, "[tox]\nenvlist =\n    py{27,34}\n    docs\n").unwrap();

        let args = EnvlistArgs::try_parse_from(["--config", ini_path.to_str().unwrap()]).unwrap();
        assert_eq!(list_envs(&args).unwrap(), vec!["py27", "py34", "docs"]);
    }
}
