//! 2D grid primitives
//!
//! [`Location`] is an unbounded `(row, col)` pair; boundedness is always checked
//! explicitly against a [`Bounds`] (or the [`Grid`] that owns one). Rows grow
//! downwards and columns grow to the right.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use super::error::GridError;

/// A `(row, col)` coordinate, possibly outside any grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Location {
    pub row: isize,
    pub col: isize,
}

impl Location {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The location one step away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The location `k` steps away in `dir`
    pub fn jump(self, dir: Direction, k: isize) -> Self {
        self + dir * k
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, rhs: Location) -> Location {
        Location::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Location {
    type Output = Location;

    fn sub(self, rhs: Location) -> Location {
        Location::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Add<Direction> for Location {
    type Output = Location;

    fn add(self, rhs: Direction) -> Location {
        self + rhs.delta()
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit offset for a single step in this direction
    pub const fn delta(self) -> Location {
        match self {
            Direction::Up => Location::new(-1, 0),
            Direction::Right => Location::new(0, 1),
            Direction::Down => Location::new(1, 0),
            Direction::Left => Location::new(0, -1),
        }
    }

    /// Rotate 90 degrees clockwise
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate 90 degrees counter-clockwise
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }
}

impl Mul<isize> for Direction {
    type Output = Location;

    fn mul(self, k: isize) -> Location {
        let d = self.delta();
        Location::new(d.row * k, d.col * k)
    }
}

/// Adjacency enumeration order used by [`Bounds::neighbors`]
const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

/// Row and column extent of a rectangular area anchored at `(0, 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `loc` lies in `[0, rows) x [0, cols)`
    pub fn contains(&self, loc: Location) -> bool {
        self.offset(loc).is_some()
    }

    /// In-bounds cardinal neighbours of `loc`, in a fixed order
    pub fn neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        NEIGHBOR_ORDER
            .iter()
            .map(move |&dir| loc.step(dir))
            .filter(|next| self.contains(*next))
    }

    /// Every location inside the bounds in row-major order
    pub fn locations(&self) -> impl Iterator<Item = Location> + use<> {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Location::new(row, col)))
    }

    /// Row-major offset of `loc`, or `None` when it is out of bounds
    pub fn offset(&self, loc: Location) -> Option<usize> {
        let row = usize::try_from(loc.row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(loc.col).ok().filter(|c| *c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Inverse of [`offset`](Self::offset) for offsets inside the bounds
    pub fn location(&self, offset: usize) -> Option<Location> {
        (offset < self.rows * self.cols).then(|| {
            Location::new((offset / self.cols) as isize, (offset % self.cols) as isize)
        })
    }
}

/// A rectangular grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Bounds,
}

impl<T> Grid<T> {
    /// Build a grid from rows, rejecting empty or ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let num_rows = rows.len();
        let mut cells = Vec::with_capacity(num_rows * cols);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(num_rows, cols),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.bounds.contains(loc)
    }

    pub fn get(&self, loc: Location) -> Option<&T> {
        self.bounds.offset(loc).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, loc: Location) -> Option<&mut T> {
        self.bounds.offset(loc).map(|i| &mut self.cells[i])
    }

    pub fn neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        self.bounds.neighbors(loc)
    }

    pub fn locations(&self) -> impl Iterator<Item = Location> + use<T> {
        self.bounds.locations()
    }

    /// Cells paired with their locations in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        self.bounds.locations().zip(self.cells.iter())
    }

    /// First location (row-major) whose cell satisfies `pred`
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Location> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(loc, _)| loc)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            bounds: self.bounds,
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// First location holding `value`
    pub fn find(&self, value: &T) -> Option<Location> {
        self.position(|cell| cell == value)
    }
}

impl Grid<char> {
    /// Parse one row per non-empty line
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        Self::from_rows(rows)
    }
}

impl<T> Index<Location> for Grid<T> {
    type Output = T;

    fn index(&self, loc: Location) -> &T {
        match self.get(loc) {
            Some(cell) => cell,
            None => panic!("location {loc} outside {}x{} grid", self.rows(), self.cols()),
        }
    }
}

impl<T> IndexMut<Location> for Grid<T> {
    fn index_mut(&mut self, loc: Location) -> &mut T {
        let (rows, cols) = (self.rows(), self.cols());
        match self.get_mut(loc) {
            Some(cell) => cell,
            None => panic!("location {loc} outside {rows}x{cols} grid"),
        }
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols()) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_row_major() {
        let bounds = Bounds::new(3, 4);
        assert_eq!(bounds.offset(Location::new(0, 0)), Some(0));
        assert_eq!(bounds.offset(Location::new(1, 2)), Some(6));
        assert_eq!(bounds.offset(Location::new(2, 4)), None);
        assert_eq!(bounds.offset(Location::new(-1, 0)), None);
        assert_eq!(bounds.location(6), Some(Location::new(1, 2)));
        assert_eq!(bounds.location(12), None);
        for loc in bounds.locations() {
            assert_eq!(bounds.offset(loc).and_then(|i| bounds.location(i)), Some(loc));
        }
    }

    #[test]
    fn test_location_arithmetic() {
        let loc = Location::new(2, 3);
        assert_eq!(loc + Location::new(1, -1), Location::new(3, 2));
        assert_eq!(loc - Location::new(2, 3), Location::default());
        assert_eq!(loc.step(Direction::Up), Location::new(1, 3));
        assert_eq!(loc.jump(Direction::Left, 3), Location::new(2, 0));
        assert_eq!(Direction::Down * 4, Location::new(4, 0));
    }

    #[test]
    fn test_turns_are_inverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.turn_right().turn_right().turn_right().turn_right(), dir);
            assert_ne!(dir.turn_right(), dir.turn_left());
        }
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(2, 3);
        assert!(bounds.contains(Location::new(0, 0)));
        assert!(bounds.contains(Location::new(1, 2)));
        assert!(!bounds.contains(Location::new(2, 0)));
        assert!(!bounds.contains(Location::new(0, 3)));
        assert!(!bounds.contains(Location::new(-1, 0)));
        assert!(!bounds.contains(Location::new(0, -1)));
    }

    #[test]
    fn test_neighbors_order_and_clipping() {
        let bounds = Bounds::new(3, 3);
        let center: Vec<_> = bounds.neighbors(Location::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Location::new(1, 2),
                Location::new(0, 1),
                Location::new(1, 0),
                Location::new(2, 1),
            ]
        );

        let corner: Vec<_> = bounds.neighbors(Location::new(0, 0)).collect();
        assert_eq!(corner, vec![Location::new(0, 1), Location::new(1, 0)]);
    }

    #[test]
    fn test_parse_and_index() {
        let grid = Grid::parse("ab\ncd\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid[Location::new(1, 0)], 'c');
        assert_eq!(grid.get(Location::new(2, 0)), None);
        assert_eq!(grid.find(&'d'), Some(Location::new(1, 1)));
        assert_eq!(grid.to_string(), "ab\ncd\n");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("abc\nde\n"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn test_map_and_iter() {
        let grid = Grid::parse("12\n34").unwrap();
        let digits = grid.map(|c| c.to_digit(10).unwrap_or(0));
        let total: u32 = digits.iter().map(|(_, d)| *d).sum();
        assert_eq!(total, 10);
        assert_eq!(digits.locations().count(), 4);
    }
}
