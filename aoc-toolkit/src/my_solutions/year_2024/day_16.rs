use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::search::maze::{BestPaths, Costs, Maze};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["2024", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    maze: Maze,
    best: Option<BestPaths>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            maze: Maze::parse(input)?,
            best: None,
        })
    }
}

fn best_paths(shared: &mut SharedData) -> Result<BestPaths, SolveError> {
    if let Some(best) = shared.best {
        return Ok(best);
    }
    let best = shared
        .maze
        .find_best_paths(Costs::default())
        .map_err(|e| SolveError::SolveFailed(e.into()))?;
    Ok(*shared.best.insert(best))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_paths(shared)?.cost.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_paths(shared)?.tiles.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    #[test]
    fn test_example() {
        let input = indoc! {"
            #################
            #...#...#...#..E#
            #.#.#.#.#.#.#.#.#
            #.#.#.#...#...#.#
            #.#.#.#.###.#.#.#
            #...#.#.#.....#.#
            #.#.#.#.#.#####.#
            #.#...#.#.#.....#
            #.#.#####.#.###.#
            #.#.#.......#...#
            #.#.###.#####.###
            #.#.#...#.....#.#
            #.#.#.#####.###.#
            #.#.#.........#.#
            #.#.#.#########.#
            #S#.............#
            #################
        "};
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11048");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn test_walled_off_end_fails_to_solve() {
        let mut shared = Solver::parse("#####\n#S#E#\n#####\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_missing_end_is_parse_error() {
        assert!(matches!(
            Solver::parse("#####\n#S..#\n#####\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
