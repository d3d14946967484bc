//! Reorders streamed results into (year, day, part) order
//!
//! Workers finish days in any order. Results are held back until every key
//! before them has been printed.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

/// Ordering key, ascending by year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

pub struct ResultAggregator {
    /// Keys not yet emitted, smallest first
    expected: VecDeque<ResultKey>,
    /// Results that arrived ahead of their turn
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        let mut expected: Vec<_> = expected_keys.into_iter().collect();
        expected.sort_unstable();
        expected.dedup();
        Self {
            expected: expected.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Buffer `result`, returning every result now ready for output in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            let Some(result) = self.pending.remove(next) else {
                break;
            };
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
