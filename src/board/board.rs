//! Board structure with scoped placement for search

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::{Mark, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{Error, Result};

/// Game board: 9 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells without checking the turn-order invariant.
    /// Use [`Board::validate`] when the cells come from outside.
    pub const fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    pub fn cells(&self) -> &[Mark; TOTAL_CELLS] {
        &self.cells
    }

    /// Get mark at index. Panics if `index >= 9`.
    #[inline]
    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    /// Write a mark (without any rule checks)
    #[inline]
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    /// Place a mark for the lifetime of the returned guard.
    ///
    /// The cell is reset to `Empty` when the guard is dropped, on every
    /// return path of the caller. The guard derefs to the board so the
    /// child position can be searched through it.
    #[inline]
    pub fn place_scoped(&mut self, index: usize, mark: Mark) -> Placement<'_> {
        debug_assert!(self.is_empty(index), "scoped placement on occupied cell {index}");
        self.cells[index] = mark;
        Placement { board: self, index }
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(idx, _)| idx)
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.count(Mark::Empty)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }

    /// Mark whose turn it is, assuming X moved first and turns alternated
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Copy of the board with X and O swapped
    pub fn relabeled(&self) -> Self {
        let mut cells = self.cells;
        for cell in &mut cells {
            *cell = cell.opponent();
        }
        Self { cells }
    }

    /// Check the turn-order invariant: X count minus O count is 0 or 1
    pub fn validate(&self) -> Result<()> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count == o_count || x_count == o_count + 1 {
            Ok(())
        } else {
            Err(Error::InvalidMarkCounts { x_count, o_count })
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse 9 cell characters in row-major order. `/` and `|` are ignored so
    /// `"XX./OO./..."` and `"XX.OO...."` describe the same board.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Mark::Empty; TOTAL_CELLS];
        let mut len = 0;

        for (position, character) in s.chars().enumerate() {
            if character == '/' || character == '|' {
                continue;
            }
            let mark = Mark::from_symbol(character).ok_or_else(|| Error::InvalidCellCharacter {
                character,
                position,
                context: s.to_string(),
            })?;
            if len < TOTAL_CELLS {
                cells[len] = mark;
            }
            len += 1;
        }

        if len != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got: len,
                context: s.to_string(),
            });
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].symbol())?;
            }
        }
        Ok(())
    }
}

/// A hypothetical mark that is undone on drop.
///
/// Created by [`Board::place_scoped`]; holds the only mutable borrow of the
/// board until it goes out of scope.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Placement<'_> {
    /// Index of the placed mark
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.remove(self.index);
    }
}
