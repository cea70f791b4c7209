use clap::Parser;
use mmx_core::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Build a tree from comma-separated leaf values", alias = "b")]
    Build {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        values: Vec<String>,
    },
    #[command(about = "Build a tree from random leaf values", alias = "rand")]
    Random {
        #[arg(default_value_t = RANDOM_TREE_SIZE)]
        size: usize,
        #[arg(long, default_value_t = RANDOM_VALUE_MIN, allow_hyphen_values = true)]
        min: Value,
        #[arg(long, default_value_t = RANDOM_VALUE_MAX, allow_hyphen_values = true)]
        max: Value,
    },
    #[command(about = "Search the tree with plain minimax", alias = "mm")]
    Minimax,
    #[command(about = "Search the tree with alpha-beta pruning", alias = "ab")]
    Alphabeta,
    #[command(about = "Animate the remaining steps, Ctrl-C pauses", alias = "p")]
    Play,
    #[command(about = "Advance exactly one step", alias = "s")]
    Step,
    #[command(about = "Jump back to the first step")]
    Rewind,
    #[command(about = "Rebuild the current leaves, dropping the search")]
    Reset,
    #[command(about = "Drop the tree entirely")]
    Clear,
    #[command(about = "Draw the tree", alias = "t")]
    Tree,
    #[command(about = "List every recorded step")]
    Trace,
    #[command(about = "Show evaluated and pruned counts")]
    Stats,
    #[command(about = "Highlight the optimal line", alias = "pv")]
    Path,
}

impl Query {
    /// Leaf values as typed, rejoined for the leaf parser.
    pub fn values(values: &[String]) -> String {
        values.join(" ")
    }
}
