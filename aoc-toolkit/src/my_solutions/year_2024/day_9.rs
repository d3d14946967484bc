use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::disk::{BlockList, DiskMap};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024", "compaction"])]
pub struct Solver;

impl AocParser for Solver {
    /// The validated disk map, decoded afresh by each part
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = input.trim();
        if map.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        DiskMap::parse(map)?;
        Ok(map)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut disk = DiskMap::parse(*shared).map_err(|e| SolveError::SolveFailed(e.into()))?;
        disk.compact();
        Ok(disk.checksum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks = BlockList::parse(*shared).map_err(|e| SolveError::SolveFailed(e.into()))?;
        blocks.defragment();
        Ok(blocks.checksum().to_string())
    }
}
