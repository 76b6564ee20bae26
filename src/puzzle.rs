use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// Label of the empty cell.
pub const BLANK: i8 = -1;

/// The fixed tile multiset every random board is drawn from.
pub const TILES: [i8; CELLS] = [1, 1, 2, 3, 3, 4, 5, 6, BLANK];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Up,
    Down,
    Right,
    Left,
}

impl Move {
    /// Expansion order. Successors are always generated in this sequence.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    /// Row/column delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn label(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Right => 'R',
            Move::Left => 'L',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 9 cells, found {0}")]
    CellCount(usize),
    #[error("expected exactly one blank (-1), found {0}")]
    BlankCount(usize),
    #[error("invalid cell {0:?}")]
    InvalidCell(String),
}

/// A 3x3 grid holding exactly one blank.
///
/// Boards are plain values: every transformation returns a fresh copy. The
/// derived ordering compares `board` first, so two boards order
/// lexicographically over their row-major cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    board: [[i8; SIZE]; SIZE],
    x_pos: usize,
    y_pos: usize,
}

impl Board {
    pub const GOAL: Board = Board {
        board: [[1, 1, 2], [3, 3, 4], [5, 6, BLANK]],
        x_pos: 2,
        y_pos: 2,
    };

    pub fn from_cells(cells: [i8; CELLS]) -> Result<Self, BoardError> {
        let blanks = cells.iter().filter(|&&c| c == BLANK).count();
        if blanks != 1 {
            return Err(BoardError::BlankCount(blanks));
        }

        let mut board = [[0; SIZE]; SIZE];
        let mut blank = (0, 0);
        for (index, &value) in cells.iter().enumerate() {
            let (i, j) = (index / SIZE, index % SIZE);
            board[i][j] = value;
            if value == BLANK {
                blank = (i, j);
            }
        }

        Ok(Self {
            board,
            x_pos: blank.0,
            y_pos: blank.1,
        })
    }

    /// Uniform shuffle of [`TILES`]. No parity filtering is applied.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells = TILES;
        cells.shuffle(rng);
        Self::from_cells(cells).unwrap_or_else(|_| unreachable!("TILES holds exactly one blank"))
    }

    pub fn blank(&self) -> (usize, usize) {
        (self.x_pos, self.y_pos)
    }

    pub fn cell(&self, row: usize, col: usize) -> i8 {
        self.board[row][col]
    }

    pub fn rows(&self) -> &[[i8; SIZE]; SIZE] {
        &self.board
    }

    /// Row-major copy of the grid.
    pub fn cells(&self) -> [i8; CELLS] {
        let mut cells = [0; CELLS];
        for (index, cell) in self.board.iter().flatten().enumerate() {
            cells[index] = *cell;
        }
        cells
    }

    /// Exchanges two cells in a copy of this board. Both coordinates must be
    /// inside the grid.
    pub fn swap(&self, a: (usize, usize), b: (usize, usize)) -> Self {
        let mut next = *self;
        next.board[a.0][a.1] = self.board[b.0][b.1];
        next.board[b.0][b.1] = self.board[a.0][a.1];
        if self.blank() == a {
            (next.x_pos, next.y_pos) = b;
        } else if self.blank() == b {
            (next.x_pos, next.y_pos) = a;
        }
        next
    }

    /// Slides the blank one cell, or `None` when it would leave the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let (dx, dy) = movement.as_offset();

        let new_x = self.x_pos as isize + dx;
        let new_y = self.y_pos as isize + dy;

        if new_x >= 0 && new_x < SIZE as isize && new_y >= 0 && new_y < SIZE as isize {
            Some(self.swap(self.blank(), (new_x as usize, new_y as usize)))
        } else {
            None
        }
    }

    /// Whether `goal` can be reached from this board by sliding the blank.
    ///
    /// Boards over different tile multisets never reach each other. A
    /// repeated label makes every arrangement reachable, since exchanging the
    /// two equal tiles flips permutation parity without changing the board.
    /// Otherwise the usual odd-width rule applies: inversion parities must
    /// match.
    pub fn is_solvable(&self, goal: &Board) -> bool {
        let mut ours = self.cells();
        let mut theirs = goal.cells();
        ours.sort_unstable();
        theirs.sort_unstable();
        if ours != theirs {
            return false;
        }
        if ours.windows(2).any(|pair| pair[0] == pair[1] && pair[0] != BLANK) {
            return true;
        }

        Self::count_inversions(&self.cells()) % 2 == Self::count_inversions(&goal.cells()) % 2
    }

    fn count_inversions(flattened: &[i8]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != BLANK)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < val)
                    .count()
            })
            .sum()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Accepts nine integers in row-major order, separated by commas and/or
    /// whitespace, e.g. `1,2,3,-1,1,3,4,5,6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i8>()
                    .map_err(|_| BoardError::InvalidCell(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [i8; CELLS] = values
            .as_slice()
            .try_into()
            .map_err(|_| BoardError::CellCount(values.len()))?;
        Self::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let line = row
                .iter()
                .map(|val| val.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
