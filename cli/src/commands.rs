pub mod play;
pub mod quick;

use clap::{ArgAction, Parser, Subcommand};
use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "A console lottery game.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to only show the earnings rate
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for the automatic ticket generator
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Buy tickets and enter the draw interactively
    #[command(alias = "p")]
    Play,
    /// Buy automatic tickets and score them against a given draw
    #[command(alias = "q")]
    Quick {
        /// Purchase amount
        #[arg(short, long)]
        amount: u64,
        /// Winning numbers, e.g. "1,2,3,4,5,6"
        #[arg(short, long)]
        winning: Ticket,
        /// Bonus number; without it the bonus tier is not played
        #[arg(short, long)]
        bonus: Option<LottoNumber>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub(crate) fn ticket_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
