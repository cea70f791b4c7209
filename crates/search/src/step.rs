use crate::*;
use mmx_core::*;
use petgraph::graph::NodeIndex;

/// Kinds of observable search events.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Visit,
    Backtrack,
    Prune,
}

/// One immutable event of a search run.
///
/// Steps refer to nodes by index, not by copy. A player re-reads the live
/// [`Data`] of that node for anything the step does not carry itself.
///
/// - `Visit` — node entered, before any child is searched
/// - `Backtrack` — internal node settled with its final value
/// - `Prune` — remaining sibling skipped after a cutoff (with its subtree)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Visit {
        node: NodeIndex,
        role: Role,
        alpha: Score,
        beta: Score,
    },
    Backtrack {
        node: NodeIndex,
        alpha: Score,
        beta: Score,
        value: Score,
    },
    Prune {
        node: NodeIndex,
        alpha: Score,
        beta: Score,
    },
}

impl Step {
    pub fn node(&self) -> NodeIndex {
        match self {
            Self::Visit { node, .. } => *node,
            Self::Backtrack { node, .. } => *node,
            Self::Prune { node, .. } => *node,
        }
    }
    pub fn kind(&self) -> Kind {
        match self {
            Self::Visit { .. } => Kind::Visit,
            Self::Backtrack { .. } => Kind::Backtrack,
            Self::Prune { .. } => Kind::Prune,
        }
    }
    /// Only visits record the acting role.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Visit { role, .. } => Some(*role),
            _ => None,
        }
    }
    pub fn alpha(&self) -> Score {
        match self {
            Self::Visit { alpha, .. } => *alpha,
            Self::Backtrack { alpha, .. } => *alpha,
            Self::Prune { alpha, .. } => *alpha,
        }
    }
    pub fn beta(&self) -> Score {
        match self {
            Self::Visit { beta, .. } => *beta,
            Self::Backtrack { beta, .. } => *beta,
            Self::Prune { beta, .. } => *beta,
        }
    }
    /// Only backtracks carry a settled value.
    pub fn value(&self) -> Option<Score> {
        match self {
            Self::Backtrack { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visit => write!(f, "visit"),
            Self::Backtrack => write!(f, "backtrack"),
            Self::Prune => write!(f, "prune"),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visit {
                node,
                role,
                alpha,
                beta,
            } => write!(
                f,
                "visit {} node #{} α={} β={}",
                role,
                node.index(),
                symbol(*alpha),
                symbol(*beta)
            ),
            Self::Backtrack {
                node,
                alpha,
                beta,
                value,
            } => write!(
                f,
                "backtrack node #{} value={} α={} β={}",
                node.index(),
                symbol(*value),
                symbol(*alpha),
                symbol(*beta)
            ),
            Self::Prune { node, alpha, beta } => write!(
                f,
                "prune node #{} α={} β={}",
                node.index(),
                symbol(*alpha),
                symbol(*beta)
            ),
        }
    }
}
