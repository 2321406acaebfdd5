use anyhow::Result;
use clap::Parser;

use crate::core::brace_expander::expand_curlys;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    about = "Prints every string produced by the {a,b,...} groups of an expression."
)]
struct ExpandArgs {
    /// The expression to expand, e.g. "py{27,34}-{unit,integration}".
    expr: String,
}

/// Prints each name a brace expression expands to.
pub fn handle(args: Vec<String>) -> Result<()> {
    let expand_args = ExpandArgs::try_parse_from(&args)?;
    for expanded in expand_curlys(&expand_args.expr) {
        println!("{}", expanded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_args_require_an_expression() {
        assert!(ExpandArgs::try_parse_from(Vec::<String>::new()).is_err());
        let args = ExpandArgs::try_parse_from(["py{27,34}"]).unwrap();
        assert_eq!(args.expr, "py{27,34}");
    }
}
