//! Square board of stones.
//!
//! Cells are stored row-major: the cell at `(row, col)` has index
//! `row * width + col`, which is also its action index.

use std::fmt;
use zero_core::{Player, Result, ZeroError};

/// Content of one cell: empty or a player's stone.
pub type Cell = Option<Player>;

/// Line directions checked for N-in-a-row: horizontal, vertical,
/// diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Flat action index of `(row, col)` on a board of the given width.
pub fn encode_action(width: usize, row: usize, col: usize) -> usize {
    row * width + col
}

/// `(row, col)` of a flat action index on a board of the given width.
pub fn decode_action(width: usize, action: usize) -> (usize, usize) {
    (action / width, action % width)
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An empty board.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![None; width * width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells (equals the action space size).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Stone at a flat index; `None` when empty or out of range.
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    pub fn at(&self, row: usize, col: usize) -> Cell {
        if row >= self.width || col >= self.width {
            return None;
        }
        self.get(encode_action(self.width, row, col))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of all empty cells, increasing.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns a copy of the board with `player`'s stone at `index`.
    ///
    /// # Errors
    /// `ZeroError::InvalidAction` if the index is out of range or occupied.
    pub fn with_stone(&self, index: usize, player: Player) -> Result<Self> {
        match self.cells.get(index) {
            None => Err(ZeroError::InvalidAction(format!(
                "cell {index} outside {w}x{w} board",
                w = self.width
            ))),
            Some(Some(occupant)) => {
                let (row, col) = decode_action(self.width, index);
                Err(ZeroError::InvalidAction(format!(
                    "cell ({row}, {col}) already holds {occupant}"
                )))
            }
            Some(None) => {
                let mut next = self.clone();
                next.cells[index] = Some(player);
                Ok(next)
            }
        }
    }

    /// True if the stone at `index` is part of a run of at least `n`
    /// same-colored stones in any direction.
    pub fn completes_line(&self, index: usize, n: usize) -> bool {
        let Some(player) = self.get(index) else {
            return false;
        };
        let (row, col) = decode_action(self.width, index);

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.run_length(row, col, dr, dc, player)
                + self.run_length(row, col, -dr, -dc, player);
            run >= n
        })
    }

    /// Consecutive `player` stones starting one step away from `(row, col)`.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        let w = self.width as isize;
        while (0..w).contains(&r) && (0..w).contains(&c) {
            if self.cells[(r * w + c) as usize] != Some(player) {
                break;
            }
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Full scan for a winner. Used for boards not reached through `apply`.
    pub fn winner(&self, n: usize) -> Option<Player> {
        (0..self.cells.len())
            .find(|&index| self.completes_line(index, n))
            .and_then(|index| self.get(index))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for row in 0..self.width {
            write!(f, "{row} ")?;
            for col in 0..self.width {
                match self.at(row, col) {
                    Some(player) => write!(f, "{} ", player.symbol())?,
                    None => write!(f, "- ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
