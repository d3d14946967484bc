//! Dijkstra search with tie-aware predecessor tracking.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use log::debug;

/// A pending expansion: reach `state` from `parent` at total `cost`
struct WorkItem<S> {
    cost: u64,
    state: S,
    parent: Option<S>,
}

// Ordered by cost only, reversed so the std max-heap pops the cheapest item.
impl<S> Ord for WorkItem<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl<S> PartialOrd for WorkItem<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for WorkItem<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for WorkItem<S> {}

/// Settled costs and optimal predecessors of every state reachable from a start
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    lowest: HashMap<S, u64>,
    parents: HashMap<S, Vec<S>>,
}

/// Settle every state reachable from `start`
///
/// `successors` yields `(next_state, edge_cost)` pairs; edge costs must be
/// positive. A state's cost is fixed the first time it is popped. Popping it
/// again at the same cost records another optimal predecessor without
/// re-expanding; popping it at a higher cost is discarded.
pub fn dijkstra<S, F, I>(start: S, mut successors: F) -> SearchTree<S>
where
    S: Clone + Eq + Hash,
    F: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, u64)>,
{
    let mut heap = BinaryHeap::new();
    heap.push(WorkItem {
        cost: 0,
        state: start,
        parent: None,
    });

    let mut lowest: HashMap<S, u64> = HashMap::new();
    let mut parents: HashMap<S, Vec<S>> = HashMap::new();

    while let Some(WorkItem {
        cost,
        state,
        parent,
    }) = heap.pop()
    {
        match lowest.entry(state.clone()) {
            Entry::Occupied(best) if *best.get() < cost => continue,
            Entry::Occupied(_) => {
                if let Some(parent) = parent {
                    parents.entry(state).or_default().push(parent);
                }
                continue;
            }
            Entry::Vacant(slot) => {
                slot.insert(cost);
            }
        }
        parents.insert(state.clone(), parent.into_iter().collect());

        for (next, step) in successors(&state) {
            heap.push(WorkItem {
                cost: cost + step,
                state: next,
                parent: Some(state.clone()),
            });
        }
    }

    debug!("dijkstra settled {} states", lowest.len());
    SearchTree { lowest, parents }
}

impl<S: Clone + Eq + Hash> SearchTree<S> {
    /// Minimal cost to reach `state`, if it was reached at all
    pub fn cost(&self, state: &S) -> Option<u64> {
        self.lowest.get(state).copied()
    }

    /// Number of settled states
    pub fn len(&self) -> usize {
        self.lowest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowest.is_empty()
    }

    /// Optimal predecessors recorded for `state` (empty for the start)
    pub fn parents(&self, state: &S) -> &[S] {
        self.parents.get(state).map_or(&[], Vec::as_slice)
    }

    /// The cheapest of `goals` together with every goal tied at that cost
    pub fn cheapest(&self, goals: impl IntoIterator<Item = S>) -> Option<(u64, Vec<S>)> {
        let mut best: Option<(u64, Vec<S>)> = None;
        for goal in goals {
            let Some(cost) = self.cost(&goal) else {
                continue;
            };
            match best.as_ref().map(|(best_cost, _)| *best_cost) {
                Some(best_cost) if cost > best_cost => {}
                Some(best_cost) if cost == best_cost => {
                    if let Some((_, tied)) = best.as_mut() {
                        tied.push(goal);
                    }
                }
                _ => best = Some((cost, vec![goal])),
            }
        }
        best
    }

    /// Every state lying on at least one optimal path to any of `ends`
    pub fn states_on_best_paths(&self, ends: impl IntoIterator<Item = S>) -> HashSet<S> {
        let mut seen = HashSet::new();
        let mut stack: Vec<S> = ends.into_iter().collect();

        while let Some(state) = stack.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            stack.extend(self.parents(&state).iter().cloned());
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Diamond graph with two equally cheap routes from 0 to 3
    fn diamond(node: &u8) -> Vec<(u8, u64)> {
        match node {
            0 => vec![(1, 1), (2, 1), (4, 5)],
            1 => vec![(3, 2)],
            2 => vec![(3, 2)],
            4 => vec![(3, 1)],
            _ => vec![],
        }
    }

    #[test]
    fn test_costs_are_minimal() {
        let tree = dijkstra(0u8, diamond);
        assert_eq!(tree.cost(&0), Some(0));
        assert_eq!(tree.cost(&1), Some(1));
        assert_eq!(tree.cost(&3), Some(3));
        assert_eq!(tree.cost(&4), Some(5));
        assert_eq!(tree.cost(&9), None);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_records_all_tied_parents() {
        let tree = dijkstra(0u8, diamond);
        let mut parents = tree.parents(&3).to_vec();
        parents.sort();
        assert_eq!(parents, vec![1, 2]);
        assert!(tree.parents(&0).is_empty());
    }

    #[test]
    fn test_best_path_union_excludes_costlier_route() {
        let tree = dijkstra(0u8, diamond);
        let states = tree.states_on_best_paths([3]);
        assert_eq!(states, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_cheapest_keeps_ties() {
        let tree = dijkstra(0u8, diamond);
        let (cost, mut tied) = tree.cheapest([1, 2, 4, 7]).unwrap();
        tied.sort();
        assert_eq!(cost, 1);
        assert_eq!(tied, vec![1, 2]);
        assert!(tree.cheapest([7]).is_none());
    }
}
