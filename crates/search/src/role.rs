use mmx_core::*;

/// Which player a node belongs to. Fully determined by depth parity.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    /// Even depth; takes the maximum over children.
    Max,
    /// Odd depth; takes the minimum over children.
    Min,
}

impl Role {
    pub fn is_max(&self) -> bool {
        matches!(self, Self::Max)
    }
    /// Value of an aggregation over no children.
    pub fn identity(&self) -> Score {
        match self {
            Self::Max => Score::NEG_INFINITY,
            Self::Min => Score::INFINITY,
        }
    }
    /// Fold one child value into the running aggregate.
    pub fn pick(&self, acc: Score, value: Score) -> Score {
        match self {
            Self::Max => acc.max(value),
            Self::Min => acc.min(value),
        }
    }
}

impl From<Depth> for Role {
    fn from(depth: Depth) -> Self {
        match depth % 2 {
            0 => Self::Max,
            _ => Self::Min,
        }
    }
}

impl std::ops::Not for Role {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Max => write!(f, "MAX"),
            Self::Min => write!(f, "MIN"),
        }
    }
}
