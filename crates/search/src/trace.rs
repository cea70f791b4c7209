use crate::*;

/// The ordered, append-only event log of one search run.
///
/// Built eagerly by a [`Search`] before any playback begins, then only
/// read by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace(Vec<Step>);

impl Trace {
    pub(crate) fn push(&mut self, step: Step) {
        self.0.push(step);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, i: usize) -> Option<&Step> {
        self.0.get(i)
    }
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.0.iter()
    }
    /// Number of steps of a given kind.
    pub fn count(&self, kind: Kind) -> usize {
        self.0.iter().filter(|s| s.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            writeln!(f, "{:>4}. {}", i + 1, step)?;
        }
        Ok(())
    }
}
