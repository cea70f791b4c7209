//! Playback of pre-recorded search traces.
//!
//! The search runs to completion up front; playback only moves a cursor
//! over the resulting [`Trace`](mmx_search::Trace).
//!
//! ## Core Types
//!
//! - [`Replay`] — Explicit state machine over one tree and its trace
//! - [`Phase`] — Idle, Ready, Running, Paused, Done
//! - [`Session`] — Host command surface (build, run, step, reset, random)
//! - [`Player`] — Cancellable fixed-interval ticker driving a [`Replay`]
mod phase;
mod player;
mod replay;
mod session;

pub use phase::*;
pub use player::*;
pub use replay::*;
pub use session::*;
