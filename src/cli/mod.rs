use clap::Parser;

pub mod dispatcher;
pub mod handlers;

/// ctox: brace expansion and placeholder substitution for tox.ini files.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
    after_help = "Actions:\n  envlist   Print the expanded environment names\n  expand    Print the brace expansion of an expression\n  resolve   Substitute the placeholders of a template for one environment\n  show      Print the resolved commands of each environment",
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The action to run (envlist, expand, resolve, show).
    pub action: Option<String>,

    /// Arguments for the action. Run `ctox <action> --help` for details.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
