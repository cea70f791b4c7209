//! Minimax and alpha-beta search over synthetic binary game trees.
//!
//! This facade crate re-exports all public mmx crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and runtime utilities
//! - [`dto`] — Serializable snapshots, steps, and frames for hosts
//! - [`search`] — Tree construction, both algorithms, traces, stats
//! - [`replay`] — Playback state machine, host session, timed player

pub use mmx_core   as core;
pub use mmx_dto    as dto;
pub use mmx_replay as replay;
pub use mmx_search as search;
