mod commands;
mod terminal;

use commands::{CommandLine, CompareArgs, Commands, compare, list};
use logcmp_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner);

    match commands
        .command
        .unwrap_or_else(|| Commands::Compare(CompareArgs::default()))
    {
        Commands::List => {
            print::header("log directories");
            list::list(&cfg)
        }
        Commands::Compare(args) => {
            print::header("getting ready for comparison");
            compare::compare(args, &cfg)
        }
    }
}
