//! Grid model and coordinate types.
//!
//! This module contains the [`Grid`] the maze is carved into, along with the [`Position`] and
//! [`Direction`] types used to address and walk its cells.

use color_eyre::eyre::{ensure, Result};

/// Smallest accepted maze dimension.
///
/// Three cells are the least that fit a border on both sides of a single junction cell.
pub(crate) const MIN_DIMENSION: u16 = 3;

/// Largest maze dimension a session accepts.
///
/// Anything past this no longer fits a terminal, and the grid and its visited flags grow with the
/// square of it.
pub(crate) const MAX_DIMENSION: u16 = 999;

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// Blocked cell, either part of the border or an uncarved cell between junctions.
    Wall,
    /// Passable cell the player can stand on.
    Open,
}

/// Cardinal direction of a single-cell move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// All four directions, in the order the generator inspects them.
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the column and row offsets of a single step in this direction.
    pub(crate) const fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Discrete cell coordinates within a grid.
///
/// The column is `x` and the row is `y`, both counted from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    /// Column index.
    pub(crate) x: u16,
    /// Row index.
    pub(crate) y: u16,
}

impl Position {
    /// Builds a position from its column and row.
    pub(crate) const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one cell away in the given direction.
    ///
    /// This yields `None` when the step would leave the range of the coordinate type. Whether the
    /// neighbour lies inside a particular grid is left for the grid to decide.
    pub(crate) const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self::new(x, y))
    }
}

/// Rectangular maze map of wall and open cells.
///
/// Cells are stored row-major. Dimensions are odd so that junction cells sit at odd coordinates on
/// both axes, starting from the entry at `(1, 1)`, with the cells between them deciding whether two
/// junctions are connected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Number of columns.
    width: u16,
    /// Number of rows.
    height: u16,
    /// Row-major cell storage of `width * height` entries.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell set to [`Cell::Wall`].
    ///
    /// # Errors
    ///
    /// This function returns an error if either dimension is even or smaller than
    /// [`MIN_DIMENSION`].
    pub(crate) fn new(width: u16, height: u16) -> Result<Self> {
        ensure!(
            width >= MIN_DIMENSION && width % 2 == 1,
            "maze width must be odd and at least {MIN_DIMENSION}, got {width}"
        );
        ensure!(
            height >= MIN_DIMENSION && height % 2 == 1,
            "maze height must be odd and at least {MIN_DIMENSION}, got {height}"
        );

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Wall; usize::from(width) * usize::from(height)],
        })
    }

    /// Returns the number of columns.
    pub(crate) const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the number of rows.
    pub(crate) const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the entry cell, where every walk starts.
    pub(crate) const fn entry() -> Position {
        Position::new(1, 1)
    }

    /// Returns the exit cell in the bottom-right junction.
    pub(crate) const fn exit(&self) -> Position {
        Position::new(self.width - 2, self.height - 2)
    }

    /// Maps a position to its storage index, if it lies inside the grid.
    fn index(&self, position: Position) -> Option<usize> {
        (position.x < self.width && position.y < self.height).then(|| {
            usize::from(position.y) * usize::from(self.width) + usize::from(position.x)
        })
    }

    /// Returns the cell at the given position, if it lies inside the grid.
    pub(crate) fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Checks whether the given position is passable.
    ///
    /// Positions outside the grid are never open.
    pub(crate) fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Open)
    }

    /// Checks whether the given position lies strictly inside the border.
    pub(crate) const fn is_interior(&self, position: Position) -> bool {
        position.x > 0
            && position.y > 0
            && position.x < self.width - 1
            && position.y < self.height - 1
    }

    /// Opens a single cell. Positions outside the grid are ignored.
    pub(crate) fn set_open(&mut self, position: Position) {
        if let Some(cell) = self
            .index(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = Cell::Open;
        }
    }

    /// Counts the open cells.
    pub(crate) fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Open).count()
    }

    /// Iterates over every cell along with its position, row by row.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
            .zip(self.cells.iter().copied())
    }
}
