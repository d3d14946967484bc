use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::counting::stones_after;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "counting"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|stone| {
                stone
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("stone {stone:?} is not a number")))
            })
            .collect()
    }
}

fn blink(stones: &[u64], times: usize) -> Result<String, SolveError> {
    stones_after(stones, times)
        .map(|count| count.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        blink(shared, 25)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        blink(shared, 75)
    }
}
