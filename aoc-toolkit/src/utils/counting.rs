//! Memoized counting over combinatorial state spaces
//!
//! Both counters are [`DpProblem`]s evaluated through a [`DpCache`] created
//! per top-level call, so independent calls never share state.

use log::debug;

use super::dp_cache::{DpCache, DpProblem, HashMapBackend};
use super::error::{CountingError, DpCacheError};

const STONE_FACTOR: u64 = 2024;

/// The stones one stone turns into after a single blink
///
/// `0` becomes `1`; a number with an even digit count splits into its left and
/// right halves; anything else is multiplied by 2024. Fails when that product
/// does not fit in a `u64`.
pub fn blink(stone: u64) -> Result<Vec<u64>, CountingError> {
    if stone == 0 {
        return Ok(vec![1]);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Ok(vec![stone / half, stone % half])
    } else {
        stone
            .checked_mul(STONE_FACTOR)
            .map(|next| vec![next])
            .ok_or(CountingError::Overflow(stone))
    }
}

/// Number of stones a single stone becomes, keyed by `(stone, blinks_remaining)`
///
/// An overflowing stone has no dependencies; its failure is reported by
/// `compute` and carried upwards through every ancestor.
pub struct StoneProblem;

impl DpProblem<(u64, usize), Result<u64, CountingError>> for StoneProblem {
    fn deps(&self, &(stone, remaining): &(u64, usize)) -> Vec<(u64, usize)> {
        if remaining == 0 {
            return vec![];
        }
        blink(stone)
            .unwrap_or_default()
            .into_iter()
            .map(|child| (child, remaining - 1))
            .collect()
    }

    fn compute(
        &self,
        &(stone, remaining): &(u64, usize),
        deps: Vec<Result<u64, CountingError>>,
    ) -> Result<u64, CountingError> {
        if remaining == 0 {
            return Ok(1);
        }
        blink(stone)?;
        deps.into_iter().try_fold(0u64, |total, count| {
            total
                .checked_add(count?)
                .ok_or(CountingError::Overflow(stone))
        })
    }
}

/// Total stones after `blinks` blinks, summed over every initial stone
pub fn stones_after(stones: &[u64], blinks: usize) -> Result<u64, CountingError> {
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(StoneProblem)
        .build();

    let mut total = 0u64;
    for &stone in stones {
        let count = cache.get(&(stone, blinks))??;
        total = total
            .checked_add(count)
            .ok_or(CountingError::Overflow(stone))?;
    }
    debug!("{} stones after {blinks} blinks, {} states cached", total, cache.len());
    Ok(total)
}

/// Ways to build the remaining suffix of a design from towel patterns
pub struct TowelProblem<'p> {
    patterns: &'p [&'p str],
}

impl<'p> TowelProblem<'p> {
    pub fn new(patterns: &'p [&'p str]) -> Self {
        Self { patterns }
    }
}

impl<'a> DpProblem<&'a str, u64> for TowelProblem<'_> {
    fn deps(&self, rest: &&'a str) -> Vec<&'a str> {
        self.patterns
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .filter_map(|pattern| rest.strip_prefix(*pattern))
            .collect()
    }

    fn compute(&self, rest: &&'a str, deps: Vec<u64>) -> u64 {
        if rest.is_empty() { 1 } else { deps.iter().sum() }
    }
}

/// Arrangement counts for each design, in order
///
/// One cache is shared across the designs since suffixes recur between them.
pub fn count_arrangements<'a>(
    patterns: &[&str],
    designs: &[&'a str],
) -> Result<Vec<u64>, DpCacheError> {
    let cache = DpCache::builder()
        .backend(HashMapBackend::new())
        .problem(TowelProblem::new(patterns))
        .build();

    designs.iter().map(|design| cache.get(design)).collect()
}
