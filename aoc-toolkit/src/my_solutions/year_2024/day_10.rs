use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::error::GridError;
use crate::utils::grid::{Grid, Location};
use crate::utils::search::bfs::reachable;

const SUMMIT: u8 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "traversal"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let chars = Grid::parse(input)?;
        if let Some((at, &cell)) = chars.iter().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(GridError::UnexpectedCell { cell, at }.into());
        }
        Ok(chars.map(|&c| c as u8 - b'0'))
    }
}

fn trailheads(heights: &Grid<u8>) -> impl Iterator<Item = Location> + '_ {
    heights
        .iter()
        .filter(|(_, height)| **height == 0)
        .map(|(loc, _)| loc)
}

fn is_uphill(heights: &Grid<u8>, from: Location, to: Location) -> bool {
    heights[to] == heights[from] + 1
}

/// Number of distinct uphill trails from a cell to any summit, keyed by the
/// cell's row-major offset
struct Trails<'g> {
    heights: &'g Grid<u8>,
}

impl DpProblem<usize, u64> for Trails<'_> {
    fn deps(&self, offset: &usize) -> Vec<usize> {
        let bounds = self.heights.bounds();
        let Some(loc) = bounds.location(*offset) else {
            return vec![];
        };
        self.heights
            .neighbors(loc)
            .filter(|next| is_uphill(self.heights, loc, *next))
            .filter_map(|next| bounds.offset(next))
            .collect()
    }

    fn compute(&self, offset: &usize, deps: Vec<u64>) -> u64 {
        let height = self
            .heights
            .bounds()
            .location(*offset)
            .and_then(|loc| self.heights.get(loc));
        match height {
            Some(&SUMMIT) => 1,
            Some(_) => deps.iter().sum(),
            None => 0,
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        let score: usize = trailheads(heights)
            .map(|start| {
                reachable(heights.bounds(), start, |from, to| is_uphill(heights, from, to))
                    .into_iter()
                    .filter(|loc| heights[*loc] == SUMMIT)
                    .count()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let heights = &*shared;
        let bounds = heights.bounds();
        let cache = DpCache::builder()
            .backend(VecBackend::with_capacity(heights.rows() * heights.cols()))
            .problem(Trails { heights })
            .build();

        let mut rating = 0;
        for offset in trailheads(heights).filter_map(|start| bounds.offset(start)) {
            rating += cache
                .get(&offset)
                .map_err(|e| SolveError::SolveFailed(e.into()))?;
        }
        Ok(rating.to_string())
    }
}
