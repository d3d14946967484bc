//! Flood-fill exploration of same-label regions
//!
//! A region is the maximal 4-connected set of cells sharing a label. Exploring
//! it yields its area, perimeter and corner count; the corner count equals the
//! number of straight sides of the region.

use std::collections::HashSet;
use std::ops::AddAssign;

use log::trace;

use super::error::GridError;
use super::grid::{Grid, Location};

/// Aggregate measurements of one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionStats {
    pub area: u64,
    pub perimeter: u64,
    pub corners: u64,
}

impl AddAssign for RegionStats {
    fn add_assign(&mut self, rhs: Self) {
        self.area += rhs.area;
        self.perimeter += rhs.perimeter;
        self.corners += rhs.corners;
    }
}

/// The eight surrounding offsets, clockwise from the upper-left diagonal
const RING: [Location; 8] = [
    Location::new(-1, -1),
    Location::new(-1, 0),
    Location::new(-1, 1),
    Location::new(0, 1),
    Location::new(1, 1),
    Location::new(1, 0),
    Location::new(1, -1),
    Location::new(0, -1),
];

/// `(cardinal, diagonal, cardinal)` indices into [`RING`] around each diagonal
const DIAGONALS: [(usize, usize, usize); 4] = [(7, 0, 1), (1, 2, 3), (3, 4, 5), (5, 6, 7)];

/// Explore the region containing `start`, marking every cell in `visited`
///
/// Returns zeroed stats when `start` was already visited, so scanning every
/// cell of a grid with one shared `visited` set counts each region exactly once.
pub fn explore_region<T: PartialEq>(
    grid: &Grid<T>,
    start: Location,
    visited: &mut HashSet<Location>,
) -> Result<RegionStats, GridError> {
    let label = grid.get(start).ok_or(GridError::OutOfBounds(start))?;
    if !visited.insert(start) {
        return Ok(RegionStats::default());
    }

    let mut stats = RegionStats::default();
    let mut stack = vec![start];

    while let Some(loc) = stack.pop() {
        stats.area += 1;
        stats.corners += corners_at(grid, loc, label);

        for next in [1, 3, 5, 7].map(|i| loc + RING[i]) {
            match grid.get(next) {
                Some(cell) if cell == label => {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
                _ => stats.perimeter += 1,
            }
        }
    }

    Ok(stats)
}

/// Corners of the region that touch the cell at `loc`
fn corners_at<T: PartialEq>(grid: &Grid<T>, loc: Location, label: &T) -> u64 {
    let differs = RING.map(|offset| grid.get(loc + offset) != Some(label));

    DIAGONALS
        .iter()
        .map(|&(a, diag, b)| {
            // Inner notch: both sides match but the diagonal does not
            let notch = !differs[a] && differs[diag] && !differs[b];
            // Outer corner: both sides differ
            let outer = differs[a] && differs[b];
            u64::from(notch) + u64::from(outer)
        })
        .sum()
}

/// Fence prices summed over every region of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FencePrices {
    /// Sum of `area * perimeter`
    pub by_perimeter: u64,
    /// Sum of `area * sides`
    pub by_sides: u64,
}

/// Scan every cell once and price each region it discovers
pub fn fence_prices<T: PartialEq>(grid: &Grid<T>) -> Result<FencePrices, GridError> {
    let mut visited = HashSet::with_capacity(grid.rows() * grid.cols());
    let mut prices = FencePrices::default();
    let mut regions = 0usize;

    for loc in grid.locations() {
        let stats = explore_region(grid, loc, &mut visited)?;
        if stats.area > 0 {
            regions += 1;
        }
        prices.by_perimeter += stats.area * stats.perimeter;
        prices.by_sides += stats.area * stats.corners;
    }

    trace!("priced {regions} regions over {} cells", visited.len());
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use proptest::prelude::*;

    fn grid(input: &str) -> Grid<char> {
        Grid::parse(input).unwrap()
    }

    const SMALL: &str = indoc! {"
        AAAA
        BBCD
        BBCC
        EEEC
    "};

    const XO: &str = indoc! {"
        OOOOO
        OXOXO
        OOOOO
        OXOXO
        OOOOO
    "};

    const LARGE: &str = indoc! {"
        RRRRIICCFF
        RRRRIICCCF
        VVRRRCCFFF
        VVRCCCJFFF
        VVVVCJJCFE
        VVIVCCJJEE
        VVIIICJJEE
        MIIIIIJJEE
        MIIISIJEEE
        MMMISSJEEE
    "};

    #[test]
    fn test_explore_each_region_once() {
        let board = grid(SMALL);
        let mut visited = HashSet::new();
        let cases = [
            ((0, 0), (4, 10, 4)),
            ((1, 0), (4, 8, 4)),
            ((1, 2), (4, 10, 8)),
            ((1, 3), (1, 4, 4)),
            ((3, 1), (3, 8, 4)),
        ];

        for ((row, col), (area, perimeter, corners)) in cases {
            let got = explore_region(&board, Location::new(row, col), &mut visited).unwrap();
            assert_eq!(
                got,
                RegionStats {
                    area,
                    perimeter,
                    corners
                },
                "region at ({row}, {col})"
            );
        }
    }

    #[test]
    fn test_visited_start_returns_zero() {
        let board = grid(SMALL);
        let mut visited = HashSet::new();
        explore_region(&board, Location::new(0, 0), &mut visited).unwrap();
        let again = explore_region(&board, Location::new(0, 3), &mut visited).unwrap();
        assert_eq!(again, RegionStats::default());
    }

    #[test]
    fn test_out_of_bounds_start() {
        let board = grid(SMALL);
        let mut visited = HashSet::new();
        let start = Location::new(4, 0);
        assert_eq!(
            explore_region(&board, start, &mut visited),
            Err(GridError::OutOfBounds(start))
        );
        assert!(visited.is_empty());
    }

    #[test]
    fn test_fence_prices() {
        assert_eq!(
            fence_prices(&grid(SMALL)).unwrap(),
            FencePrices {
                by_perimeter: 140,
                by_sides: 80
            }
        );
        assert_eq!(
            fence_prices(&grid(XO)).unwrap(),
            FencePrices {
                by_perimeter: 772,
                by_sides: 436
            }
        );
        assert_eq!(fence_prices(&grid(LARGE)).unwrap().by_perimeter, 1930);
        assert_eq!(fence_prices(&grid(LARGE)).unwrap().by_sides, 1206);
    }

    #[test]
    fn test_side_counts_with_enclosed_regions() {
        let e_shape = indoc! {"
            EEEEE
            EXXXX
            EEEEE
            EXXXX
            EEEEE
        "};
        assert_eq!(fence_prices(&grid(e_shape)).unwrap().by_sides, 236);

        let diagonal_touch = indoc! {"
            AAAAAA
            AAABBA
            AAABBA
            ABBAAA
            ABBAAA
            AAAAAA
        "};
        assert_eq!(fence_prices(&grid(diagonal_touch)).unwrap().by_sides, 368);
    }

    #[test]
    fn test_large_uniform_garden_on_worker_thread() {
        // Solvers run on spawned threads with the default stack size
        let handle = std::thread::spawn(|| {
            let row = "A".repeat(150);
            let board = grid(&vec![row; 150].join("\n"));
            fence_prices(&board).unwrap()
        });
        assert_eq!(
            handle.join().unwrap(),
            FencePrices {
                by_perimeter: 150 * 150 * 600,
                by_sides: 150 * 150 * 4
            }
        );
    }

    proptest! {
        #[test]
        fn prop_regions_cover_every_cell(
            rows in prop::collection::vec("[ABC]{6}", 1..6)
        ) {
            let board = grid(&rows.join("\n"));
            let mut visited = HashSet::new();
            let mut total_area = 0;
            for loc in board.locations() {
                total_area += explore_region(&board, loc, &mut visited).unwrap().area;
            }
            prop_assert_eq!(total_area as usize, board.rows() * board.cols());
            prop_assert_eq!(visited.len(), board.rows() * board.cols());
        }
    }
}
