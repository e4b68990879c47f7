mod commands;
mod terminal;

use commands::{CommandLine, Commands, batch, derive, filters, identify};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet, commands.no_color);
    let cfg = commands.config();

    match commands.command {
        Commands::Derive { teams, format } => {
            print::header("deriving team subnets", cfg.quiet);
            derive::derive(&teams, format, &cfg)
        }
        Commands::Batch { selection, format } => {
            print::header("deriving team selection", cfg.quiet);
            batch::batch(&selection, format, &cfg)
        }
        Commands::Identify { subnet } => {
            print::header("identifying subnet", cfg.quiet);
            identify::identify(&subnet, &cfg)
        }
        Commands::Filters => {
            print::header("exported functions", cfg.quiet);
            filters::list(&cfg);
            Ok(())
        }
        Commands::Call { name, value } => filters::call(&name, &value, &cfg),
    }
}
