//! Pairwise precedence rules and repair of sequences that break them
//!
//! A [`RuleSet`] is keyed by the unordered pair of its two values, so looking up
//! any two sequence elements finds the rule that governs them regardless of
//! which one comes first.

use std::collections::HashMap;
use std::str::FromStr;

use itertools::Itertools;
use log::trace;

use super::error::OrderingError;

/// `before` must appear ahead of `after` wherever both occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub before: u32,
    pub after: u32,
}

impl FromStr for Rule {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || OrderingError::MalformedRule(s.to_string());
        let (before, after) = s.trim().split_once('|').ok_or_else(malformed)?;
        Ok(Rule {
            before: before.trim().parse().map_err(|_| malformed())?,
            after: after.trim().parse().map_err(|_| malformed())?,
        })
    }
}

fn pair_key(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

/// Rules indexed by unordered pair; adding a rule for an existing pair replaces it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: HashMap<(u32, u32), Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rule: Rule) {
        self.rules.insert(pair_key(rule.before, rule.after), rule);
    }

    /// The rule governing `a` and `b`, in either order
    pub fn get(&self, a: u32, b: u32) -> Option<&Rule> {
        self.rules.get(&pair_key(a, b))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether every applicable rule is satisfied by `seq`
    pub fn follows_rules(&self, seq: &[u32]) -> bool {
        seq.iter()
            .tuple_combinations()
            .all(|(&first, &second)| self.get(first, second).is_none_or(|r| r.before == first))
    }

    /// Reorder `seq` so it satisfies every applicable rule
    ///
    /// Kahn's algorithm over sequence positions. Ready elements sit on a stack
    /// seeded in sequence order; the most recently readied element is placed
    /// next. The output is a permutation of `seq`.
    pub fn fix_sequence(&self, seq: &[u32]) -> Result<Vec<u32>, OrderingError> {
        let n = seq.len();
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut pending = vec![0usize; n];

        for (i, j) in (0..n).tuple_combinations() {
            let Some(rule) = self.get(seq[i], seq[j]) else {
                continue;
            };
            let (from, to) = if rule.before == seq[i] { (i, j) } else { (j, i) };
            successors[from].push(to);
            pending[to] += 1;
        }
        for next in &mut successors {
            next.sort_unstable();
        }

        let mut ready: Vec<usize> = (0..n).filter(|&i| pending[i] == 0).collect();
        let mut fixed = Vec::with_capacity(n);

        while let Some(i) = ready.pop() {
            fixed.push(seq[i]);
            for &j in &successors[i] {
                pending[j] -= 1;
                if pending[j] == 0 {
                    ready.push(j);
                }
            }
        }

        if fixed.len() != n {
            return Err(OrderingError::Cycle {
                placed: fixed.len(),
                total: n,
            });
        }
        trace!("repaired {seq:?} into {fixed:?}");
        Ok(fixed)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.add(rule);
        }
        set
    }
}
