mod commands;
mod terminal;

use commands::{CommandLine, Commands, play, quick};
use lotto_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        seed: commands.seed,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Play => {
            print::header("let's play", cfg.quiet);
            play::play(&cfg)
        }
        Commands::Quick {
            amount,
            winning,
            bonus,
        } => {
            print::header("quick draw", cfg.quiet);
            quick::quick(amount, winning, bonus, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
