//! Visualizer Binary
//!
//! Builds a binary game tree from leaf values and replays minimax or
//! alpha-beta searches over it, one step per tick, in the terminal.
//!
//! Options: --leaves, --interval, --json, --seed
mod query;
mod render;
mod repl;

use clap::Parser;
use mmx_replay::*;
use mmx_search::*;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated leaf values of the initial tree
    #[arg(long, default_value = mmx_core::DEFAULT_LEAVES, allow_hyphen_values = true)]
    leaves: String,
    /// Delay between playback ticks, e.g. "250ms" or "1s"
    #[arg(long, value_parser = interval)]
    interval: Option<Duration>,
    /// Emit snapshots and frames as JSON lines instead of drawings
    #[arg(long)]
    json: bool,
    /// Seed for random tree generation
    #[arg(long)]
    seed: Option<u64>,
}

fn interval(s: &str) -> Result<Duration, String> {
    mmx_core::parse_duration(s).ok_or_else(|| format!("invalid duration `{}`", s))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    mmx_core::log();
    let leaves = Leaves::try_from(args.leaves.as_str())?;
    let session = match args.seed {
        Some(seed) => Session::seeded(leaves, seed),
        None => Session::new(leaves),
    };
    let player = args.interval.map(Player::new).unwrap_or_default();
    repl::Repl::new(session, player, args.json).run().await
}
