//! Unweighted grid traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::utils::grid::{Bounds, Location};

/// One shortest 4-connected path from `start` to `goal` avoiding blocked cells
///
/// The returned path includes both endpoints, so its step count is
/// `path.len() - 1`. Returns `None` when the goal is unreachable or either
/// endpoint is out of bounds.
pub fn shortest_path(
    bounds: Bounds,
    start: Location,
    goal: Location,
    blocked: impl Fn(Location) -> bool,
) -> Option<Vec<Location>> {
    if !bounds.contains(start) || !bounds.contains(goal) {
        return None;
    }

    let mut parents: HashMap<Location, Option<Location>> = HashMap::from([(start, None)]);
    let mut queue = VecDeque::from([start]);

    while let Some(loc) = queue.pop_front() {
        if loc == goal {
            break;
        }
        for next in bounds.neighbors(loc) {
            if blocked(next) || parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, Some(loc));
            queue.push_back(next);
        }
    }

    if !parents.contains_key(&goal) {
        return None;
    }

    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(&Some(parent)) = parents.get(&cursor) {
        path.push(parent);
        cursor = parent;
    }
    path.reverse();
    Some(path)
}

/// Every location reachable from `start` where each move satisfies `can_step`
///
/// Uses an explicit stack, so the traversal depth is not limited by the call
/// stack. `start` itself is always included.
pub fn reachable(
    bounds: Bounds,
    start: Location,
    mut can_step: impl FnMut(Location, Location) -> bool,
) -> HashSet<Location> {
    let mut seen = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(loc) = stack.pop() {
        for next in bounds.neighbors(loc) {
            if !seen.contains(&next) && can_step(loc, next) {
                seen.insert(next);
                stack.push(next);
            }
        }
    }
    seen
}
