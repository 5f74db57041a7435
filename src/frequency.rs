//! Ordered key -> count table backing the separation histogram.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FrequencyError;

/// Key recorded for vertices the traversal never reached.
pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: u32) {
        *self.counts.entry(key).or_default() += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn minimum(&self) -> Result<u32, FrequencyError> {
        self.counts.keys().next().copied().ok_or(FrequencyError::EmptyTable)
    }

    pub fn maximum(&self) -> Result<u32, FrequencyError> {
        self.counts.keys().next_back().copied().ok_or(FrequencyError::EmptyTable)
    }

    /// Sum of counts for keys in `lo..=hi`.
    pub fn total(&self, lo: u32, hi: u32) -> usize {
        if lo > hi {
            return 0;
        }
        self.counts.range(lo..=hi).map(|(_, &count)| count).sum()
    }

    /// Implicitly 0 for absent keys.
    pub fn count(&self, key: u32) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    /// Distinct keys, ascending.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }

    /// Sum of every count, the unreachable bucket included.
    pub fn grand_total(&self) -> usize {
        self.counts.values().sum()
    }
}
