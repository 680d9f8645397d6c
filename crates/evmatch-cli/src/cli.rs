use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "evmatch",
    about = "Structural comparison of JSON events",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that an actual JSON document matches an expected template
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// JSON file holding the expected template
    pub expected: PathBuf,
    /// JSON file holding the actual document
    pub actual: PathBuf,
    /// Also report keys that only the actual document has
    #[arg(long)]
    pub strict: bool,
    /// TOML file with comparison options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compare_with_flags() {
        let cli = Cli::try_parse_from([
            "evmatch", "compare", "exp.json", "act.json", "--strict", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.verbose);
        let Command::Compare(args) = cli.command;
        assert_eq!(args.expected, PathBuf::from("exp.json"));
        assert_eq!(args.actual, PathBuf::from("act.json"));
        assert!(args.strict);
        assert!(args.config.is_none());
    }

    #[test]
    fn compare_requires_both_files() {
        assert!(Cli::try_parse_from(["evmatch", "compare", "exp.json"]).is_err());
    }
}
