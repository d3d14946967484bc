use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::region::{FencePrices, fence_prices};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["2024", "regions"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    garden: Grid<char>,
    prices: Option<FencePrices>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            garden: Grid::parse(input)?,
            prices: None,
        })
    }
}

/// Both prices come from the same scan, so it runs once per input
fn prices(shared: &mut SharedData) -> Result<FencePrices, SolveError> {
    if let Some(prices) = shared.prices {
        return Ok(prices);
    }
    let prices = fence_prices(&shared.garden).map_err(|e| SolveError::SolveFailed(e.into()))?;
    Ok(*shared.prices.insert(prices))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(prices(shared)?.by_perimeter.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(prices(shared)?.by_sides.to_string())
    }
}
