use crate::*;
use mmx_core::*;

/// Per-node search state stored at each vertex of the [`Tree`].
///
/// Leaves carry their value from creation. Internal nodes acquire one when
/// a search settles them. `visited` and `pruned` are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    value: Option<Score>,
    leaf: bool,
    depth: Depth,
    alpha: Score,
    beta: Score,
    visited: bool,
    pruned: bool,
    best: bool,
}

impl Data {
    pub fn leaf(value: Value, depth: Depth) -> Self {
        Self {
            value: Some(Score::from(value)),
            leaf: true,
            ..Self::internal(depth)
        }
    }
    pub fn internal(depth: Depth) -> Self {
        Self {
            value: None,
            leaf: false,
            depth,
            alpha: Score::NEG_INFINITY,
            beta: Score::INFINITY,
            visited: false,
            pruned: false,
            best: false,
        }
    }
    pub fn value(&self) -> Option<Score> {
        self.value
    }
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }
    pub fn depth(&self) -> Depth {
        self.depth
    }
    pub fn role(&self) -> Role {
        Role::from(self.depth)
    }
    pub fn alpha(&self) -> Score {
        self.alpha
    }
    pub fn beta(&self) -> Score {
        self.beta
    }
    /// true once either bound moved off its default.
    pub fn bounded(&self) -> bool {
        self.alpha != Score::NEG_INFINITY || self.beta != Score::INFINITY
    }
    pub fn visited(&self) -> bool {
        self.visited
    }
    pub fn pruned(&self) -> bool {
        self.pruned
    }
    pub fn best(&self) -> bool {
        self.best
    }

    pub(crate) fn bound(&mut self, alpha: Score, beta: Score) {
        self.alpha = alpha;
        self.beta = beta;
    }
    /// Finalize the node's value. Happens once per run.
    pub(crate) fn settle(&mut self, value: Score) {
        debug_assert!(!self.visited, "node settled twice");
        debug_assert!(!self.pruned, "pruned node settled");
        self.value = Some(value);
        self.visited = true;
    }
    pub(crate) fn prune(&mut self) {
        debug_assert!(!self.visited, "visited node pruned");
        self.pruned = true;
    }
    pub(crate) fn highlight(&mut self) {
        self.best = true;
    }
    pub(crate) fn clear_best(&mut self) {
        self.best = false;
    }
    /// Forget everything a search wrote. Leaf values survive.
    pub(crate) fn clear(&mut self) {
        *self = match (self.leaf, self.value) {
            (true, Some(v)) => Self {
                value: Some(v),
                leaf: true,
                ..Self::internal(self.depth)
            },
            _ => Self::internal(self.depth),
        };
    }
}

/// Render a score for labels, spelling the sentinels as ±∞.
pub fn symbol(score: Score) -> String {
    if score == Score::INFINITY {
        "∞".to_string()
    } else if score == Score::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{}", score)
    }
}
