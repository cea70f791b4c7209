/// Lifecycle of a [`Replay`](crate::Replay).
///
/// `Idle` has no tree. `Ready` has a tree but no trace. `Running` advances on
/// ticks, `Paused` only on manual steps, and `Done` has consumed every step.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Ready,
    Running,
    Paused,
    Done,
}

impl Phase {
    /// Whether a trace exists to move through.
    pub fn searched(&self) -> bool {
        matches!(self, Self::Running | Self::Paused | Self::Done)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Ready => write!(f, "ready"),
            Self::Running => write!(f, "running"),
            Self::Paused => write!(f, "paused"),
            Self::Done => write!(f, "done"),
        }
    }
}
