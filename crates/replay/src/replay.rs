use crate::*;
use mmx_core::*;
use mmx_dto::*;
use mmx_search::*;

/// Cursor over one tree and the trace produced by searching it.
///
/// ```text
/// Idle ──build──▶ Ready ──run──▶ Running ──tick*──▶ Done
///                                  │  ▲               │
///                           pause/step resume         │
///                                  ▼  │               │
///                                 Paused ──step*──────┘
/// reset: any ──▶ Idle
/// ```
///
/// The search is run eagerly in [`Replay::run`]; afterwards the node flags
/// are final and only the cursor moves.
#[derive(Debug, Default)]
pub struct Replay {
    tree: Option<Tree>,
    trace: Trace,
    cursor: usize,
    phase: Phase,
    algorithm: Option<Algorithm>,
}

impl Replay {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }
    /// Steps not yet consumed.
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.cursor
    }
    /// Steps consumed so far.
    pub fn consumed(&self) -> &[Step] {
        &self.trace.steps()[..self.cursor]
    }
    /// Node of the most recently consumed step, for highlighting.
    pub fn current(&self) -> Option<NodeIndex> {
        self.consumed().last().map(|step| step.node())
    }

    /// Replace whatever was loaded with a freshly built tree.
    pub fn build(&mut self, leaves: &Leaves) {
        *self = Self {
            tree: Some(Tree::build(leaves)),
            phase: Phase::Ready,
            ..Self::default()
        };
        log::debug!("replay ready with {} leaves", leaves.len());
    }
    /// Discard tree and trace unconditionally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    /// Search the loaded tree to completion and start playback.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<Score, SearchError> {
        let tree = self.tree.as_mut().ok_or(SearchError::EmptyTree)?;
        let run = algorithm.run(tree);
        let value = run.value();
        log::info!(
            "{} over {} nodes: root {} in {} steps",
            algorithm,
            tree.n(),
            symbol(value),
            run.trace().len()
        );
        self.trace = run.into_trace();
        self.cursor = 0;
        self.algorithm = Some(algorithm);
        self.phase = Phase::Running;
        Ok(value)
    }

    /// Consume the next step while running. `None` once finished or not running.
    pub fn tick(&mut self) -> Option<Step> {
        match self.phase {
            Phase::Running => self.advance(),
            _ => None,
        }
    }
    /// Consume exactly one step by hand, pausing any running playback.
    pub fn step(&mut self) -> Result<Step, SearchError> {
        match self.phase {
            Phase::Idle => Err(SearchError::EmptyTree),
            Phase::Ready => Err(SearchError::NotSearched),
            Phase::Done => Err(SearchError::Exhausted),
            Phase::Running | Phase::Paused => {
                self.phase = Phase::Paused;
                self.advance().ok_or(SearchError::Exhausted)
            }
        }
    }
    fn advance(&mut self) -> Option<Step> {
        let step = self.trace.get(self.cursor).copied();
        match step {
            Some(_) => self.cursor += 1,
            None => self.phase = Phase::Done,
        }
        if self.remaining() == 0 {
            self.phase = Phase::Done;
        }
        step
    }
    /// Halt ticking. Returns whether playback was running.
    pub fn pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            _ => false,
        }
    }
    /// Continue ticking after a pause. Returns whether playback is running.
    pub fn resume(&mut self) -> bool {
        if self.phase == Phase::Paused && self.remaining() > 0 {
            self.phase = Phase::Running;
        }
        self.phase == Phase::Running
    }
    /// Move the cursor back to the start of the trace.
    pub fn rewind(&mut self) -> Result<(), SearchError> {
        match self.phase {
            Phase::Idle => Err(SearchError::EmptyTree),
            Phase::Ready => Err(SearchError::NotSearched),
            _ => {
                self.cursor = 0;
                self.phase = match self.trace.is_empty() {
                    true => Phase::Done,
                    false => Phase::Paused,
                };
                Ok(())
            }
        }
    }

    /// Summary read from the final node flags.
    pub fn stats(&self) -> Result<Stats, SearchError> {
        let tree = self.tree.as_ref().ok_or(SearchError::EmptyTree)?;
        let algorithm = self.algorithm.ok_or(SearchError::NotSearched)?;
        Ok(Stats::compute(tree, algorithm))
    }
    /// Summary of only the steps consumed so far.
    pub fn live(&self) -> Result<Stats, SearchError> {
        let tree = self.tree.as_ref().ok_or(SearchError::EmptyTree)?;
        let algorithm = self.algorithm.ok_or(SearchError::NotSearched)?;
        Ok(Stats::tally(tree, self.consumed(), algorithm))
    }
    /// Highlight the optimal line of the searched tree.
    pub fn principal(&mut self) -> Result<Vec<NodeIndex>, SearchError> {
        let tree = self.tree.as_mut().ok_or(SearchError::EmptyTree)?;
        if !self.phase.searched() {
            return Err(SearchError::NotSearched);
        }
        Ok(tree.principal())
    }

    pub fn snapshot(&self) -> Result<ApiSnapshot, SearchError> {
        self.tree
            .as_ref()
            .map(ApiSnapshot::from)
            .ok_or(SearchError::EmptyTree)
    }
    /// Frame describing the most recently consumed step.
    pub fn frame(&self) -> Option<ApiFrame> {
        let step = self.consumed().last()?;
        let stats = self.live().ok()?;
        Some(ApiFrame {
            cursor: self.cursor,
            total: self.trace.len(),
            phase: self.phase.to_string(),
            step: ApiStep::from(step),
            stats: ApiStats::from(&stats),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn ready(s: &str) -> Replay {
        let mut replay = Replay::default();
        replay.build(&Leaves::try_from(s).unwrap());
        replay
    }
    #[test]
    fn idle_fails_fast() {
        let mut replay = Replay::default();
        assert_eq!(replay.phase(), Phase::Idle);
        assert_eq!(replay.run(Algorithm::Minimax), Err(SearchError::EmptyTree));
        assert_eq!(replay.step(), Err(SearchError::EmptyTree));
        assert_eq!(replay.stats(), Err(SearchError::EmptyTree));
        assert_eq!(replay.snapshot().err(), Some(SearchError::EmptyTree));
    }
    #[test]
    fn ready_has_no_steps() {
        let mut replay = ready("3, 5, 2, 9");
        assert_eq!(replay.phase(), Phase::Ready);
        assert!(replay.trace().is_empty());
        assert_eq!(replay.step(), Err(SearchError::NotSearched));
        assert_eq!(replay.tick(), None);
        assert_eq!(replay.principal(), Err(SearchError::NotSearched));
    }
    #[test]
    fn run_records_whole_trace_eagerly() {
        let mut replay = ready("3, 5, 2, 9");
        assert_eq!(replay.run(Algorithm::AlphaBeta), Ok(3.));
        assert_eq!(replay.phase(), Phase::Running);
        assert_eq!(replay.trace().len(), 10);
        assert_eq!(replay.cursor(), 0);
        assert_eq!(replay.current(), None);
        // flags are already final before the first tick
        assert_eq!(replay.stats().unwrap().pruned(), 1);
        assert_eq!(replay.live().unwrap().pruned(), 0);
    }
    #[test]
    fn ticks_until_done() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::Minimax).unwrap();
        let mut ticks = 0;
        while let Some(step) = replay.tick() {
            ticks += 1;
            assert_eq!(replay.current(), Some(step.node()));
        }
        assert_eq!(ticks, 10);
        assert_eq!(replay.phase(), Phase::Done);
        assert_eq!(replay.step(), Err(SearchError::Exhausted));
        assert_eq!(replay.live(), replay.stats());
    }
    #[test]
    fn step_pauses_running_playback() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::AlphaBeta).unwrap();
        replay.tick();
        let step = replay.step().unwrap();
        assert_eq!(step.node(), NodeIndex::new(1));
        assert_eq!(replay.phase(), Phase::Paused);
        assert_eq!(replay.tick(), None);
        assert_eq!(replay.cursor(), 2);
        assert!(replay.resume());
        assert!(replay.tick().is_some());
    }
    #[test]
    fn stepping_to_the_end() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::AlphaBeta).unwrap();
        replay.pause();
        for _ in 0..10 {
            replay.step().unwrap();
        }
        assert_eq!(replay.phase(), Phase::Done);
        assert_eq!(replay.step(), Err(SearchError::Exhausted));
        assert!(!replay.resume());
    }
    #[test]
    fn rewind_replays_identically() {
        let mut replay = ready("3, 5, 6, 9, 1, 2, 0, -1");
        replay.run(Algorithm::AlphaBeta).unwrap();
        let first = std::iter::from_fn(|| replay.tick()).collect::<Vec<_>>();
        replay.rewind().unwrap();
        assert_eq!(replay.phase(), Phase::Paused);
        let second = std::iter::from_fn(|| replay.step().ok()).collect::<Vec<_>>();
        assert_eq!(first, second);
    }
    #[test]
    fn reset_discards_everything() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::AlphaBeta).unwrap();
        replay.tick();
        replay.reset();
        assert_eq!(replay.phase(), Phase::Idle);
        assert!(replay.tree().is_none());
        assert!(replay.trace().is_empty());
        assert_eq!(replay.step(), Err(SearchError::EmptyTree));
    }
    #[test]
    fn rebuild_clears_trace() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::AlphaBeta).unwrap();
        replay.build(&Leaves::try_from("1, 2").unwrap());
        assert_eq!(replay.phase(), Phase::Ready);
        assert!(replay.trace().is_empty());
        assert_eq!(replay.algorithm(), None);
        assert!(!replay.tree().unwrap().searched());
    }
    #[test]
    fn frames_carry_live_stats() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::AlphaBeta).unwrap();
        assert!(replay.frame().is_none());
        for _ in 0..8 {
            replay.tick();
        }
        let frame = replay.frame().unwrap();
        assert_eq!((frame.cursor, frame.total), (8, 10));
        assert_eq!(frame.step.kind, "prune");
        assert_eq!((frame.stats.evaluated, frame.stats.pruned), (4, 1));
        assert_eq!(frame.phase, "running");
    }
    #[test]
    fn principal_line_after_run() {
        let mut replay = ready("3, 5, 2, 9");
        replay.run(Algorithm::Minimax).unwrap();
        let path = replay.principal().unwrap();
        let indices = path.iter().map(|x| x.index()).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 3]);
        let tree = replay.tree().unwrap();
        assert_eq!(tree.all().filter(|(_, d)| d.best()).count(), 3);
    }
}
