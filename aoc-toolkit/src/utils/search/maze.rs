//! Cheapest routes through a walled maze where turning costs extra
//!
//! The search state is a [`Pose`] (location plus facing). From any pose a walker
//! may step forward onto a non-wall cell or rotate 90 degrees in place. The
//! facing at the goal is irrelevant, so the goal cost is the minimum over all
//! four facings there.

use std::collections::HashSet;

use log::debug;

use super::dijkstra;
use crate::utils::error::{GridError, SearchError};
use crate::utils::grid::{Direction, Grid, Location};

/// A maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// A walker's location and facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    pub at: Location,
    pub facing: Direction,
}

/// Edge costs for the two kinds of move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Costs {
    pub step: u64,
    pub turn: u64,
}

impl Default for Costs {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

/// A parsed maze with exactly one start (`S`) and one end (`E`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Grid<Tile>,
    start: Location,
    end: Location,
}

/// Result of a maze search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestPaths {
    /// Minimal total cost from start to end
    pub cost: u64,
    /// Distinct cells lying on any minimal-cost route
    pub tiles: usize,
}

impl Maze {
    /// Parse `#` walls, `.` floor and the `S`/`E` markers
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let chars = Grid::parse(input)?;

        let mut start = None;
        let mut end = None;
        for (at, &cell) in chars.iter() {
            let marker = match cell {
                'S' => &mut start,
                'E' => &mut end,
                '#' | '.' => continue,
                other => return Err(GridError::UnexpectedCell { cell: other, at }),
            };
            if marker.replace(at).is_some() {
                return Err(GridError::DuplicateMarker(cell));
            }
        }

        let start = start.ok_or(GridError::MissingMarker('S'))?;
        let end = end.ok_or(GridError::MissingMarker('E'))?;
        let tiles = chars.map(|&c| if c == '#' { Tile::Wall } else { Tile::Open });

        Ok(Self { tiles, start, end })
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn end(&self) -> Location {
        self.end
    }

    fn is_open(&self, loc: Location) -> bool {
        matches!(self.tiles.get(loc), Some(Tile::Open))
    }

    /// Cheapest cost from start (facing east) to end, and the number of cells
    /// covered by all routes achieving it
    pub fn find_best_paths(&self, costs: Costs) -> Result<BestPaths, SearchError> {
        let start = Pose {
            at: self.start,
            facing: Direction::Right,
        };

        let tree = dijkstra(start, |pose: &Pose| {
            let ahead = pose.at.step(pose.facing);
            let forward = self.is_open(ahead).then_some((
                Pose {
                    at: ahead,
                    facing: pose.facing,
                },
                costs.step,
            ));
            let right = Pose {
                at: pose.at,
                facing: pose.facing.turn_right(),
            };
            let left = Pose {
                at: pose.at,
                facing: pose.facing.turn_left(),
            };
            forward
                .into_iter()
                .chain([(right, costs.turn), (left, costs.turn)])
        });

        let goals = Direction::ALL.map(|facing| Pose {
            at: self.end,
            facing,
        });
        let (cost, ends) = tree.cheapest(goals).ok_or(SearchError::NoPath {
            from: self.start,
            to: self.end,
        })?;

        let tiles: HashSet<Location> = tree
            .states_on_best_paths(ends)
            .into_iter()
            .map(|pose| pose.at)
            .collect();

        debug!("best maze cost {cost} covering {} tiles", tiles.len());
        Ok(BestPaths {
            cost,
            tiles: tiles.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SMALL: &str = indoc! {"
        ###############
        #.......#....E#
        #.#.###.#.###.#
        #.....#.#...#.#
        #.###.#####.#.#
        #.#.#.......#.#
        #.#.#####.###.#
        #...........#.#
        ###.#.#####.#.#
        #...#.....#.#.#
        #.#.#.###.#.#.#
        #.....#...#.#.#
        #.###.#.#.#.#.#
        #S..#.....#...#
        ###############
    "};

    const LARGE: &str = indoc! {"
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

    #[test]
    fn test_small_maze() {
        let maze = Maze::parse(SMALL).unwrap();
        assert_eq!(
            maze.find_best_paths(Costs::default()).unwrap(),
            BestPaths {
                cost: 7036,
                tiles: 45
            }
        );
    }

    #[test]
    fn test_large_maze() {
        let maze = Maze::parse(LARGE).unwrap();
        assert_eq!(
            maze.find_best_paths(Costs::default()).unwrap(),
            BestPaths {
                cost: 11048,
                tiles: 64
            }
        );
    }

    #[test]
    fn test_search_is_repeatable() {
        let maze = Maze::parse(SMALL).unwrap();
        let first = maze.find_best_paths(Costs::default()).unwrap();
        let second = maze.find_best_paths(Costs::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cheap_turns_follow_shortest_route() {
        let maze = Maze::parse("#####\n#S.E#\n#####\n").unwrap();
        let best = maze.find_best_paths(Costs { step: 1, turn: 1 }).unwrap();
        assert_eq!(best, BestPaths { cost: 2, tiles: 3 });
    }

    #[test]
    fn test_unreachable_end() {
        let maze = Maze::parse("#####\n#S#E#\n#####\n").unwrap();
        assert_eq!(
            maze.find_best_paths(Costs::default()),
            Err(SearchError::NoPath {
                from: Location::new(1, 1),
                to: Location::new(1, 3)
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Maze::parse("#S.#\n"),
            Err(GridError::MissingMarker('E'))
        );
        assert_eq!(
            Maze::parse("#SSE\n"),
            Err(GridError::DuplicateMarker('S'))
        );
        assert_eq!(
            Maze::parse("#S?E\n"),
            Err(GridError::UnexpectedCell {
                cell: '?',
                at: Location::new(0, 2)
            })
        );
    }
}
