use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::ordering::{Rule, RuleSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "ordering"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    rules: RuleSet,
    updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rules, updates) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between rules and updates".into()))?;

        let rules = rules
            .lines()
            .map(str::parse::<Rule>)
            .collect::<Result<RuleSet, _>>()?;

        let updates = updates
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.split(',')
                    .map(|page| page.trim().parse::<u32>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("(update {}) {line:?}", idx + 1))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        Ok(SharedData { rules, updates })
    }
}

fn middle(update: &[u32]) -> Result<u64, SolveError> {
    update
        .get(update.len() / 2)
        .map(|&page| u64::from(page))
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("empty update has no middle page").into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for update in &shared.updates {
            if shared.rules.follows_rules(update) {
                total += middle(update)?;
            }
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for update in &shared.updates {
            if shared.rules.follows_rules(update) {
                continue;
            }
            let fixed = shared
                .rules
                .fix_sequence(update)
                .map_err(|e| SolveError::SolveFailed(e.into()))?;
            total += middle(&fixed)?;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        47|53
        97|13
        97|61
        97|47
        75|29
        61|13
        75|53
        29|13
        97|29
        53|29
        61|53
        97|53
        61|29
        47|13
        75|47
        97|75
        47|61
        75|61
        47|29
        75|13
        53|13

        75,47,61,53,29
        97,61,53,29,13
        75,29,13
        75,97,47,61,53
        61,13,29
        97,13,75,29,47
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.rules.len(), 21);
        assert_eq!(shared.updates.len(), 6);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            Solver::parse("47|53\n"),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            Solver::parse("47-53\n\n47,53\n"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("47|53\n\n47,x\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
