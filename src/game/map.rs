//! Grid and coordinate types.

use crate::game::Tile;

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// X coordinate (column).
    pub x: usize,
    /// Y coordinate (row).
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by a signed delta.
    ///
    /// Returns `None` if either component would become negative.
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Coord> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };
        Some(Coord::new(x, y))
    }

    /// The neighbouring coordinate in `direction`, if non-negative.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Column and row delta of a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The tile grid.
///
/// Rows are stored in order and may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid from its rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `y` (0 if the row does not exist).
    #[must_use]
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Vec::len)
    }

    /// Length of the longest row.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// Check if a coordinate lies within the row count and that row's length.
    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.row_len(coord.y)
    }

    /// Get the tile at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.rows.get(coord.y).and_then(|row| row.get(coord.x)).copied()
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        match self.rows.get_mut(coord.y).and_then(|row| row.get_mut(coord.x)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Tangibility of the tile at `coord`.
    ///
    /// Callers bounds-check first; an out-of-bounds cell reports tangible.
    #[must_use]
    pub fn is_tangible(&self, coord: Coord) -> bool {
        self.get(coord).is_none_or(|tile| tile.tangible)
    }

    /// Move the tile at `from` to `to`, restoring what it stood on.
    ///
    /// `from` receives the content of `last_occupied`, and `last_occupied`
    /// receives whatever `to` held before being overwritten. Returns `false`
    /// without touching anything if either coordinate is out of bounds.
    pub fn move_tile(&mut self, from: Coord, to: Coord, last_occupied: &mut Tile) -> bool {
        let (Some(moving), Some(displaced)) = (self.get(from), self.get(to)) else {
            return false;
        };
        self.set(from, *last_occupied);
        *last_occupied = displaced;
        self.set(to, moving);
        true
    }

    /// Iterate over all coordinates and tiles, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, tile)| (Coord::new(x, y), *tile))
        })
    }

    /// Count the cells holding a tile equal to `tile`.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.iter().filter(|(_, t)| *t == tile).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jagged() -> Grid {
        Grid::from_rows(vec![
            vec![Tile::WALL, Tile::EMPTY, Tile::EMPTY],
            vec![Tile::EMPTY],
            vec![Tile::EMPTY, Tile::VEGETATION, Tile::EMPTY, Tile::EMPTY],
        ])
    }

    #[test]
    fn test_coord_offset() {
        assert_eq!(Coord::new(1, 1).offset(-1, 0), Some(Coord::new(0, 1)));
        assert_eq!(Coord::new(0, 1).offset(-1, 0), None);
        assert_eq!(Coord::new(3, 0).step(Direction::Up), None);
        assert_eq!(Coord::new(3, 0).step(Direction::Down), Some(Coord::new(3, 1)));
    }

    #[test]
    fn test_direction_opposite() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_bounds_on_jagged_rows() {
        let grid = jagged();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.max_width(), 4);
        assert!(grid.in_bounds(Coord::new(2, 0)));
        assert!(!grid.in_bounds(Coord::new(1, 1)));
        assert!(grid.in_bounds(Coord::new(3, 2)));
        assert!(!grid.in_bounds(Coord::new(0, 3)));
    }

    #[test]
    fn test_tangibility() {
        let grid = jagged();
        assert!(grid.is_tangible(Coord::new(0, 0)));
        assert!(!grid.is_tangible(Coord::new(1, 2)));
        assert!(grid.is_tangible(Coord::new(5, 5)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = jagged();
        assert!(!grid.set(Coord::new(1, 1), Tile::WALL));
        assert!(grid.set(Coord::new(0, 1), Tile::WALL));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(Tile::WALL));
    }

    #[test]
    fn test_move_tile_restores_terrain() {
        let mut grid = jagged();
        let mut under = Tile::EMPTY;
        grid.set(Coord::new(0, 2), Tile::PLAYER);

        // Step onto vegetation
        assert!(grid.move_tile(Coord::new(0, 2), Coord::new(1, 2), &mut under));
        assert_eq!(grid.get(Coord::new(0, 2)), Some(Tile::EMPTY));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Tile::PLAYER));
        assert_eq!(under, Tile::VEGETATION);

        // Step off again, vegetation comes back
        assert!(grid.move_tile(Coord::new(1, 2), Coord::new(2, 2), &mut under));
        assert_eq!(grid.get(Coord::new(1, 2)), Some(Tile::VEGETATION));
        assert_eq!(grid.get(Coord::new(2, 2)), Some(Tile::PLAYER));
        assert_eq!(under, Tile::EMPTY);
    }

    #[test]
    fn test_move_tile_out_of_bounds_is_noop() {
        let mut grid = jagged();
        let before = grid.clone();
        let mut under = Tile::VEGETATION;
        assert!(!grid.move_tile(Coord::new(0, 1), Coord::new(1, 1), &mut under));
        assert_eq!(grid, before);
        assert_eq!(under, Tile::VEGETATION);
    }

    #[test]
    fn test_count() {
        let grid = Grid::from_rows(vec![vec![Tile::EMPTY; 3]; 2]);
        assert_eq!(grid.count(Tile::EMPTY), 6);
        assert_eq!(grid.count(Tile::WALL), 0);
    }
}
