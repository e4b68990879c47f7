pub mod batch;
pub mod derive;
pub mod filters;
pub mod identify;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use teamnet_common::config::{Config, ErrorMode, SplitPolicy};
use teamnet_common::team::selection::TeamSelection;

#[derive(Parser)]
#[command(name = "teamnet")]
#[command(about = "Derive per-team /24 subnets from team numbers.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip invalid team identifiers instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// How three digit team numbers are split into octets
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::Standard)]
    pub policy: PolicyArg,

    /// Print less (repeat for even less)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log more (repeat for even more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the subnet of one or more teams
    #[command(alias = "d")]
    Derive {
        #[arg(required = true, allow_negative_numbers = true)]
        teams: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Derive the subnets of a selection such as "1-20, 1234"
    #[command(alias = "b")]
    Batch {
        selection: TeamSelection,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Find the team a subnet belongs to
    #[command(alias = "i")]
    Identify { subnet: String },
    /// List the named functions exported to automation hosts
    #[command(alias = "f")]
    Filters,
    /// Run a named function on a JSON value
    #[command(alias = "c")]
    Call { name: String, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable tree
    Table,
    /// One CIDR string per line
    Cidr,
    /// JSON records
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// 1-3 digits stay whole in the third octet
    Standard,
    /// 3 digits split into leading digit and last two digits
    SplitThreeDigit,
}

impl From<PolicyArg> for SplitPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Standard => SplitPolicy::Standard,
            PolicyArg::SplitThreeDigit => SplitPolicy::SplitThreeDigit,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            mode: if self.lenient {
                ErrorMode::Lenient
            } else {
                ErrorMode::Strict
            },
            policy: self.policy.into(),
            quiet: self.quiet,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_global_flags_build_config() {
        let cli = CommandLine::parse_from([
            "teamnet",
            "derive",
            "123",
            "--lenient",
            "--policy",
            "split-three-digit",
            "-qq",
        ]);
        let cfg = cli.config();
        assert_eq!(cfg.mode, ErrorMode::Lenient);
        assert_eq!(cfg.policy, SplitPolicy::SplitThreeDigit);
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn test_batch_parses_selection() {
        let cli = CommandLine::parse_from(["teamnet", "batch", "1-3,1234", "-f", "cidr"]);
        match cli.command {
            Commands::Batch { selection, format } => {
                assert_eq!(selection.expand().unwrap().len(), 4);
                assert_eq!(format, OutputFormat::Cidr);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_invalid_selection_is_rejected() {
        assert!(CommandLine::try_parse_from(["teamnet", "batch", "9-1"]).is_err());
    }
}
