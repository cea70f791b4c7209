/// Errors surfaced to the host by tree construction, search, and replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Leaf input was empty or contained a non-integer entry.
    InvalidInput(String),
    /// A search or step was requested before any tree was built.
    EmptyTree,
    /// A step was requested on a tree that has not been searched yet.
    NotSearched,
    /// Every step of the trace has already been consumed.
    Exhausted,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::EmptyTree => write!(f, "no tree has been built"),
            Self::NotSearched => write!(f, "tree has not been searched"),
            Self::Exhausted => write!(f, "trace is exhausted"),
        }
    }
}

impl std::error::Error for SearchError {}
