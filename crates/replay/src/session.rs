use crate::*;
use mmx_core::*;
use mmx_search::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::ops::RangeInclusive;

/// The command surface a host UI drives.
///
/// Holds the committed leaf input alongside the [`Replay`]. Every command
/// validates before it mutates, so a rejected input leaves the current tree
/// and trace untouched.
#[derive(Debug)]
pub struct Session {
    input: Leaves,
    replay: Replay,
    rng: SmallRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Leaves::default())
    }
}

impl Session {
    /// Commit an input and build its tree.
    pub fn new(input: Leaves) -> Self {
        Self::with_rng(input, SmallRng::from_rng(&mut rand::rng()))
    }
    /// Deterministic random trees, for tests and reproducible demos.
    pub fn seeded(input: Leaves, seed: u64) -> Self {
        Self::with_rng(input, SmallRng::seed_from_u64(seed))
    }
    fn with_rng(input: Leaves, rng: SmallRng) -> Self {
        let mut replay = Replay::default();
        replay.build(&input);
        Self { input, replay, rng }
    }

    pub fn input(&self) -> &Leaves {
        &self.input
    }
    pub fn replay(&self) -> &Replay {
        &self.replay
    }
    pub fn replay_mut(&mut self) -> &mut Replay {
        &mut self.replay
    }

    /// Parse, commit, and build a new tree from comma-separated values.
    pub fn build_tree(&mut self, values: &str) -> Result<&Tree, SearchError> {
        let leaves = Leaves::try_from(values)?;
        log::info!("building tree from {} leaves", leaves.len());
        self.replay.build(&leaves);
        self.input = leaves;
        self.replay.tree().ok_or(SearchError::EmptyTree)
    }
    pub fn run_minimax(&mut self) -> Result<Score, SearchError> {
        self.replay.run(Algorithm::Minimax)
    }
    pub fn run_alpha_beta(&mut self) -> Result<Score, SearchError> {
        self.replay.run(Algorithm::AlphaBeta)
    }
    pub fn step_forward(&mut self) -> Result<Step, SearchError> {
        self.replay.step()
    }
    pub fn pause(&mut self) -> bool {
        self.replay.pause()
    }
    /// Drop the trace and rebuild the committed input from scratch.
    pub fn reset(&mut self) {
        self.replay.reset();
        self.replay.build(&self.input);
    }
    /// Drop tree and trace without rebuilding.
    pub fn discard(&mut self) {
        self.replay.reset();
    }
    /// Replace the input with random values and rebuild.
    pub fn generate_random_tree(
        &mut self,
        size: usize,
        range: RangeInclusive<Value>,
    ) -> Result<&Leaves, SearchError> {
        let leaves = Leaves::sample(size, range, &mut self.rng)?;
        log::info!("generated random leaves {}", leaves);
        self.replay.build(&leaves);
        self.input = leaves;
        Ok(&self.input)
    }
    pub fn principal(&mut self) -> Result<Vec<NodeIndex>, SearchError> {
        self.replay.principal()
    }
}
