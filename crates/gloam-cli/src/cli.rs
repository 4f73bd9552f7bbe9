//! CLI argument definitions using Clap v4

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use gloam_core::OverflowPolicy;

/// Gloam - inspect lazily resolved GL entry points
#[derive(Parser, Debug)]
#[command(name = "gloam")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display the active resolution strategy and what the binding tracks
    #[command(alias = "i")]
    Info,

    /// List the entry points of the GL binding
    #[command(alias = "ls")]
    List(ListArgs),

    /// Resolve entry points in the running process
    #[command(alias = "r")]
    Resolve(ResolveArgs),

    /// Parse an extension string against the tracked extensions
    #[command(alias = "p")]
    Parse(ParseArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only names containing this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Symbol names to resolve
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub names: Vec<String>,

    /// Preload every entry point of the GL binding
    #[arg(long)]
    pub all: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the parse command
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Space-delimited extension string, as glGetString(GL_EXTENSIONS) returns it
    pub extensions: String,

    /// What to do with an over-long token (defaults to GLOAM_TOKEN_OVERFLOW or halt)
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowArg>,

    /// Longest accepted token in bytes (defaults to GLOAM_TOKEN_LIMIT or 255)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Token overflow policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Stop at the first over-long token
    Halt,
    /// Ignore over-long tokens and keep going
    Skip,
    /// No length limit
    Unbounded,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Halt => OverflowPolicy::Halt,
            OverflowArg::Skip => OverflowPolicy::Skip,
            OverflowArg::Unbounded => OverflowPolicy::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_needs_names_or_all() {
        assert!(Cli::try_parse_from(["gloam", "resolve"]).is_err());
        assert!(Cli::try_parse_from(["gloam", "resolve", "--all", "glClear"]).is_err());

        let cli = Cli::try_parse_from(["gloam", "resolve", "glClear", "glFlush"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => assert_eq!(args.names, ["glClear", "glFlush"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "gloam",
            "-vv",
            "parse",
            "GL_ARB_imaging",
            "--overflow",
            "skip",
            "--limit",
            "16",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.extensions, "GL_ARB_imaging");
                assert_eq!(args.overflow, Some(OverflowArg::Skip));
                assert_eq!(args.limit, Some(16));
                assert!(!args.json);
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_overflow_arg_maps_to_policy() {
        assert_eq!(OverflowPolicy::from(OverflowArg::Halt), OverflowPolicy::Halt);
        assert_eq!(OverflowPolicy::from(OverflowArg::Unbounded), OverflowPolicy::Unbounded);
    }
}
