//! Elementary rotations and successor generation

use crate::io::configuration::GRID_SIDE;
use crate::io::error::{SolverError, invalid_parameter};
use crate::puzzle::board::Board;
use std::fmt;
use std::str::FromStr;

/// Whether a move rotates a row or a column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal line of four cells
    Row,
    /// Vertical line of four cells
    Column,
}

/// Direction of a one-cell cyclic shift
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Shift towards lower indices (left for rows, up for columns)
    Backward,
    /// Shift towards higher indices (right for rows, down for columns)
    Forward,
}

impl Step {
    /// The shift that undoes this one
    pub const fn reversed(self) -> Self {
        match self {
            Self::Backward => Self::Forward,
            Self::Forward => Self::Backward,
        }
    }
}

// Successors are generated in this order, backward first
const STEPS: [Step; 2] = [Step::Backward, Step::Forward];

/// One rotation of a single row or column
///
/// Displayed as a direction letter followed by the 1-based line index:
/// `L`/`R` for rows, `U`/`D` for columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Axis,
    line: u8,
    step: Step,
}

impl Move {
    /// Rotation of the given row (index wraps modulo the grid side)
    pub const fn row(line: usize, step: Step) -> Self {
        Self {
            axis: Axis::Row,
            line: (line % GRID_SIDE) as u8,
            step,
        }
    }

    /// Rotation of the given column (index wraps modulo the grid side)
    pub const fn column(line: usize, step: Step) -> Self {
        Self {
            axis: Axis::Column,
            line: (line % GRID_SIDE) as u8,
            step,
        }
    }

    /// Row or column
    pub const fn axis(self) -> Axis {
        self.axis
    }

    /// Zero-based row or column index
    pub const fn line(self) -> usize {
        self.line as usize
    }

    /// Shift direction
    pub const fn step(self) -> Step {
        self.step
    }

    /// Direction letter used in move labels
    pub const fn letter(self) -> char {
        match (self.axis, self.step) {
            (Axis::Row, Step::Backward) => 'L',
            (Axis::Row, Step::Forward) => 'R',
            (Axis::Column, Step::Backward) => 'U',
            (Axis::Column, Step::Forward) => 'D',
        }
    }

    /// The move that undoes this one (`U3` <-> `D3`, `L1` <-> `R1`)
    pub const fn inverse(self) -> Self {
        Self {
            axis: self.axis,
            line: self.line,
            step: self.step.reversed(),
        }
    }

    /// Apply this move to a board
    pub fn apply(self, board: &Board) -> Board {
        match self.axis {
            Axis::Row => board.rotate_row(self.line(), self.step).0,
            Axis::Column => board.rotate_col(self.line(), self.step).0,
        }
    }

    /// Every move in successor order
    pub fn all() -> impl Iterator<Item = Self> {
        let rows = (0..GRID_SIDE)
            .flat_map(|line| STEPS.into_iter().map(move |step| Self::row(line, step)));
        let columns = (0..GRID_SIDE)
            .flat_map(|line| STEPS.into_iter().map(move |step| Self::column(line, step)));
        rows.chain(columns)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.line + 1)
    }
}

impl FromStr for Move {
    type Err = SolverError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid_parameter(
                "move",
                &label,
                &"expected a direction letter followed by a line number",
            ));
        };

        let line = match digit.to_digit(10) {
            Some(n) if (1..=GRID_SIDE as u32).contains(&n) => n as usize - 1,
            _ => {
                return Err(invalid_parameter(
                    "move",
                    &label,
                    &format!("line number must be between 1 and {GRID_SIDE}"),
                ));
            }
        };

        match letter.to_ascii_uppercase() {
            'L' => Ok(Self::row(line, Step::Backward)),
            'R' => Ok(Self::row(line, Step::Forward)),
            'U' => Ok(Self::column(line, Step::Backward)),
            'D' => Ok(Self::column(line, Step::Forward)),
            _ => Err(invalid_parameter(
                "move",
                &label,
                &"direction must be one of L, R, U, D",
            )),
        }
    }
}

/// Apply a sequence of moves in order
pub fn apply_all<'a>(board: &Board, moves: impl IntoIterator<Item = &'a Move>) -> Board {
    moves
        .into_iter()
        .fold(*board, |current, mv| mv.apply(&current))
}

/// The sixteen boards one rotation away, each tagged with its move
///
/// Rows come before columns, indices ascend, and within a line the backward
/// shift (left/up) comes before the forward one (right/down).
pub fn successors(board: &Board) -> impl Iterator<Item = (Board, Move)> + '_ {
    let rows = (0..GRID_SIDE)
        .flat_map(move |row| STEPS.into_iter().map(move |step| board.rotate_row(row, step)));
    let columns = (0..GRID_SIDE)
        .flat_map(move |col| STEPS.into_iter().map(move |step| board.rotate_col(col, step)));
    rows.chain(columns)
}
