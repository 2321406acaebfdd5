use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::cli::{Cli, handlers};

/// Defines an action, its aliases and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>) -> Result<()>,
}

/// The single source of truth for all actions.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "envlist",
        aliases: &["ls"],
        handler: handlers::envlist::handle,
    },
    CommandDefinition {
        name: "expand",
        aliases: &[],
        handler: handlers::expand::handle,
    },
    CommandDefinition {
        name: "resolve",
        aliases: &["subst"],
        handler: handlers::resolve::handle,
    },
    CommandDefinition {
        name: "show",
        aliases: &["commands"],
        handler: handlers::show::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes the parsed command line to its handler.
/// Without an action, the environments of `./tox.ini` are listed.
pub fn dispatch(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let Some(action) = cli.action else {
        return handlers::envlist::handle(Vec::new());
    };

    let command = find_command(&action).ok_or_else(|| {
        let known: Vec<&str> = COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect();
        anyhow!(
            "Unknown action '{}'. Available actions: {}",
            action.yellow(),
            known.join(", ")
        )
    })?;

    (command.handler)(cli.args)
}
