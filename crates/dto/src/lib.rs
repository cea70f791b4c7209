//! Data transfer objects for rendering hosts.
//!
//! Tree snapshots, step records, and playback frames, serializable via `serde`.
//! Unbounded alpha/beta and non-finite values travel as `None`, since JSON
//! has no infinities; `label` fields carry the human-readable form.
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiNode {
    pub id: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
    pub role: String,
    pub leaf: bool,
    pub value: Option<f64>,
    pub label: String,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub visited: bool,
    pub pruned: bool,
    pub best: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSnapshot {
    pub root: usize,
    pub nodes: Vec<ApiNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStep {
    pub kind: String,
    pub node: usize,
    pub role: Option<String>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub value: Option<f64>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStats {
    pub evaluated: usize,
    pub pruned: usize,
    pub best: Option<f64>,
    pub efficiency: Option<f64>,
    pub label: String,
}

/// One tick of playback: the step just consumed and the stats after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFrame {
    pub cursor: usize,
    pub total: usize,
    pub phase: String,
    pub step: ApiStep,
    pub stats: ApiStats,
}
