use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::counting::count_arrangements;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["2024", "counting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    patterns: Vec<&'a str>,
    designs: Vec<&'a str>,
    counts: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (patterns, designs) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between patterns and designs".into()))?;

        let patterns: Vec<&str> = patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if patterns.is_empty() {
            return Err(ParseError::MissingData("no towel patterns".into()));
        }

        Ok(SharedData {
            patterns,
            designs: designs.lines().map(str::trim).filter(|d| !d.is_empty()).collect(),
            counts: None,
        })
    }
}

/// Arrangement counts per design, computed once and reused by both parts
fn counts<'s>(shared: &'s mut SharedData<'_>) -> Result<&'s [u64], SolveError> {
    if shared.counts.is_none() {
        let counts = count_arrangements(&shared.patterns, &shared.designs)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        shared.counts = Some(counts);
    }
    Ok(shared.counts.as_deref().unwrap_or_default())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = counts(shared)?.iter().filter(|&&ways| ways > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = counts(shared)?.iter().sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        r, wr, b, g, bwu, rb, gb, br

        brwrr
        bggr
        gbbr
        rrbgbr
        ubwu
        bwurrg
        brgr
        bbrgwb
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.patterns.len(), 8);
        assert_eq!(shared.designs.len(), 8);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "16");
    }

    #[test]
    fn test_missing_sections() {
        assert!(matches!(
            Solver::parse("r, wr\n"),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            Solver::parse(" , \n\nrr\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
