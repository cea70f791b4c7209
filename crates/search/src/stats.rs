use crate::*;
use mmx_core::*;

/// Summary of a search: how much of the tree was settled versus skipped.
///
/// `best` and `efficiency` are `None` when unavailable. Efficiency is only
/// reported for pruning algorithms that actually pruned something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    evaluated: usize,
    pruned: usize,
    best: Option<Score>,
    efficiency: Option<Efficiency>,
}

impl Stats {
    /// Read the final node flags of a searched tree.
    pub fn compute(tree: &Tree, algorithm: Algorithm) -> Self {
        let evaluated = tree.all().filter(|(_, d)| d.visited()).count();
        let pruned = tree.all().filter(|(_, d)| d.pruned()).count();
        let best = tree.at(tree.root()).value();
        Self::from_counts(evaluated, pruned, best, algorithm)
    }
    /// Derive the same summary from a consumed prefix of the trace only.
    ///
    /// A leaf counts as evaluated at its visit, an internal node at its
    /// backtrack. A prune step accounts for its whole subtree. Over the full
    /// trace this agrees with [`Stats::compute`].
    pub fn tally(tree: &Tree, steps: &[Step], algorithm: Algorithm) -> Self {
        let root = tree.root();
        let evaluated = steps
            .iter()
            .filter(|s| match s.kind() {
                Kind::Visit => tree.at(s.node()).is_leaf(),
                Kind::Backtrack => true,
                Kind::Prune => false,
            })
            .count();
        let pruned = steps
            .iter()
            .filter(|s| s.kind() == Kind::Prune)
            .map(|s| tree.subtree(s.node()).len())
            .sum();
        let best = steps
            .iter()
            .filter(|s| s.node() == root)
            .find_map(|s| match s.kind() {
                Kind::Backtrack => s.value(),
                Kind::Visit if tree.at(root).is_leaf() => tree.at(root).value(),
                _ => None,
            });
        Self::from_counts(evaluated, pruned, best, algorithm)
    }
    fn from_counts(evaluated: usize, pruned: usize, best: Option<Score>, algorithm: Algorithm) -> Self {
        let efficiency = match algorithm.prunes() && pruned > 0 {
            true => Some(pruned as Efficiency / (evaluated + pruned) as Efficiency * 100.),
            false => None,
        };
        Self {
            evaluated,
            pruned,
            best,
            efficiency,
        }
    }

    pub fn evaluated(&self) -> usize {
        self.evaluated
    }
    pub fn pruned(&self) -> usize {
        self.pruned
    }
    pub fn best(&self) -> Option<Score> {
        self.best
    }
    pub fn efficiency(&self) -> Option<Efficiency> {
        self.efficiency
    }
    /// Best value as a label, `-` when unavailable.
    pub fn best_label(&self) -> String {
        self.best.map(symbol).unwrap_or_else(|| "-".to_string())
    }
    /// Efficiency to one decimal place, `-` when unavailable.
    pub fn efficiency_label(&self) -> String {
        self.efficiency
            .map(|e| format!("{:.1}%", e))
            .unwrap_or_else(|| "-".to_string())
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}{:<20}",
            format!("evaluated {}", self.evaluated),
            format!("pruned {}", self.pruned),
            format!("best {}", self.best_label()),
            format!("efficiency {}", self.efficiency_label()),
        )
    }
}
