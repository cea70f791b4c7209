//! Game-tree construction and search with replayable traces.
//!
//! A [`Tree`] is grown breadth-first from [`Leaves`]. Either [`Search`]
//! implementation walks it, mutating per-node [`Data`] in place and
//! appending [`Step`]s to a [`Trace`]. [`Stats`] summarizes the outcome.
//!
//! # Module Structure
//!
//! - `leaves` — Parsing and generation of leaf inputs
//! - `tree` — Binary tree over a petgraph `DiGraph`
//! - `search` — Algorithm seam ([`Search`], [`Algorithm`], [`Run`])
//! - `minimax` / `alphabeta` — The two algorithms
//! - `step` / `trace` — Event log consumed by replay
//! - `stats` — Evaluated/pruned counts and pruning efficiency
//! - `api` — Conversions into `mmx-dto` transfer objects
mod alphabeta;
mod api;
mod data;
mod error;
mod leaves;
mod minimax;
mod role;
mod search;
mod stats;
mod step;
mod trace;
mod tree;

pub use alphabeta::*;
pub use api::*;
pub use data::*;
pub use error::*;
pub use leaves::*;
pub use minimax::*;
pub use role::*;
pub use search::*;
pub use stats::*;
pub use step::*;
pub use trace::*;
pub use tree::*;

pub use petgraph::graph::NodeIndex;
