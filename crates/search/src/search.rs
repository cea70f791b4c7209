use crate::*;
use mmx_core::*;

/// A game-tree search that records every observable event.
///
/// Implementations are zero-sized unit structs selected at compile time;
/// [`Algorithm`] dispatches between them at runtime for the host.
///
/// # Implementor Guidelines
///
/// - Emit exactly one `Visit` per node entered, before recursing
/// - Settle every entered node exactly once, children first
/// - Never settle a node that was pruned
pub trait Search {
    /// Short name for logs and prompts.
    const NAME: &'static str;
    /// Whether the algorithm may skip subtrees.
    const PRUNES: bool;
    /// Walk the tree from its root, returning the root value.
    fn walk(tree: &mut Tree, trace: &mut Trace) -> Score;
    /// Search a tree to completion, clearing any earlier results first.
    fn search(tree: &mut Tree) -> Run {
        if tree.searched() {
            tree.clear();
        }
        let mut trace = Trace::default();
        let value = Self::walk(tree, &mut trace);
        log::debug!(
            "{} settled root at {} in {} steps ({} pruned)",
            Self::NAME,
            symbol(value),
            trace.len(),
            trace.count(Kind::Prune)
        );
        Run { value, trace }
    }
}

/// Outcome of one search: the root value and the full event log.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    value: Score,
    trace: Trace,
}

impl Run {
    pub fn value(&self) -> Score {
        self.value
    }
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

/// Runtime choice between the two searches.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn run(&self, tree: &mut Tree) -> Run {
        match self {
            Self::Minimax => Minimax::search(tree),
            Self::AlphaBeta => AlphaBeta::search(tree),
        }
    }
    pub fn prunes(&self) -> bool {
        match self {
            Self::Minimax => Minimax::PRUNES,
            Self::AlphaBeta => AlphaBeta::PRUNES,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minimax => Minimax::NAME,
            Self::AlphaBeta => AlphaBeta::NAME,
        }
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = SearchError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "minimax" | "mm" => Ok(Self::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Self::AlphaBeta),
            other => Err(SearchError::InvalidInput(format!(
                "unknown algorithm `{}`",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn trees() -> impl Iterator<Item = Tree> {
        let ref mut rng = SmallRng::seed_from_u64(0xB00);
        (1..=40)
            .flat_map(|size| std::iter::repeat_n(size, 5))
            .map(|size| Leaves::sample(size, -20..=20, rng).unwrap())
            .map(|leaves| Tree::build(&leaves))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn alpha_beta_matches_minimax() {
        for tree in trees() {
            let ref mut a = tree.clone();
            let ref mut b = tree.clone();
            let mm = Minimax::search(a);
            let ab = AlphaBeta::search(b);
            assert_eq!(mm.value(), ab.value(), "disagreement on\n{}", tree);
        }
    }
    #[test]
    fn pruned_and_visited_are_disjoint() {
        for mut tree in trees() {
            AlphaBeta::search(&mut tree);
            assert!(tree.all().all(|(_, d)| !(d.visited() && d.pruned())));
        }
    }
    #[test]
    fn every_node_is_visited_or_pruned() {
        for mut tree in trees() {
            AlphaBeta::search(&mut tree);
            let stats = Stats::compute(&tree, Algorithm::AlphaBeta);
            assert_eq!(stats.evaluated() + stats.pruned(), tree.n());
        }
    }
    #[test]
    fn pruned_nodes_are_minimax_visited() {
        for tree in trees() {
            let ref mut exhaustive = tree.clone();
            let ref mut pruning = tree.clone();
            Minimax::search(exhaustive);
            AlphaBeta::search(pruning);
            for (x, data) in pruning.all().filter(|(_, d)| d.pruned()) {
                assert!(exhaustive.at(x).visited(), "pruned node {:?} unseen", x);
                assert!(!data.visited());
            }
        }
    }
    #[test]
    fn minimax_visits_everything_once() {
        for mut tree in trees() {
            let run = Minimax::search(&mut tree);
            assert_eq!(run.trace().count(Kind::Visit), tree.n());
            assert_eq!(run.trace().count(Kind::Prune), 0);
            assert!(tree.all().all(|(_, d)| d.visited()));
        }
    }
    #[test]
    fn roles_follow_depth_parity() {
        for mut tree in trees() {
            let run = AlphaBeta::search(&mut tree);
            for step in run.trace() {
                if let Some(role) = step.role() {
                    let depth = tree.at(step.node()).depth();
                    assert_eq!(role.is_max(), depth % 2 == 0);
                }
            }
        }
    }
    #[test]
    fn settled_children_precede_parent() {
        for mut tree in trees() {
            let run = AlphaBeta::search(&mut tree);
            let ref settled = run
                .trace()
                .iter()
                .enumerate()
                .filter(|(_, s)| s.kind() == Kind::Backtrack)
                .map(|(i, s)| (s.node(), i))
                .collect::<std::collections::HashMap<_, _>>();
            for (parent, at) in settled.iter() {
                for child in tree.children(*parent) {
                    if let Some(then) = settled.get(&child) {
                        assert!(then < at);
                    }
                }
            }
        }
    }
    #[test]
    fn rerun_clears_previous_results() {
        let leaves = Leaves::try_from("3, 5, 6, 9, 1, 2, 0, -1").unwrap();
        let mut tree = Tree::build(&leaves);
        AlphaBeta::search(&mut tree);
        let run = Minimax::search(&mut tree);
        assert_eq!(run.value(), 5.);
        assert!(tree.all().all(|(_, d)| d.visited() && !d.pruned()));
        assert!(tree.all().all(|(_, d)| !d.bounded()));
    }
    #[test]
    fn algorithm_names_parse() {
        assert_eq!(Algorithm::try_from("AB"), Ok(Algorithm::AlphaBeta));
        assert_eq!(Algorithm::try_from("minimax"), Ok(Algorithm::Minimax));
        assert!(Algorithm::try_from("mcts").is_err());
        assert!(Algorithm::AlphaBeta.prunes());
        assert!(!Algorithm::Minimax.prunes());
    }
}
