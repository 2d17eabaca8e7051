//! Houses: the rows, columns, and 3×3 boxes of a board.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Sudoku validity is defined house-wise: a completed board is valid when
/// every one of the 27 houses contains each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// The three houses containing `pos`: its row, its column, and its box.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn cell(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
            Self::Box { index } => {
                Position::new((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3)
            }
        }
    }

    /// Returns the nine positions of this house in reading order.
    #[must_use]
    pub const fn cells(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            cells[i as usize] = self.cell(i);
            i += 1;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_cells() {
        let cells = House::Row { row: 3 }.cells();
        for (col, pos) in cells.into_iter().enumerate() {
            assert_eq!(pos, Position::new(3, u8::try_from(col).unwrap()));
        }
    }

    #[test]
    fn test_column_cells() {
        let cells = House::Column { col: 5 }.cells();
        for (row, pos) in cells.into_iter().enumerate() {
            assert_eq!(pos, Position::new(u8::try_from(row).unwrap(), 5));
        }
    }

    #[test]
    fn test_box_cells() {
        let cells = House::Box { index: 4 }.cells();
        let expected = [
            Position::new(3, 3),
            Position::new(3, 4),
            Position::new(3, 5),
            Position::new(4, 3),
            Position::new(4, 4),
            Position::new(4, 5),
            Position::new(5, 3),
            Position::new(5, 4),
            Position::new(5, 5),
        ];
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_of_matches_membership() {
        let pos = Position::new(7, 2);
        let [row, col, boxed] = House::of(pos);
        assert_eq!(row, House::Row { row: 7 });
        assert_eq!(col, House::Column { col: 2 });
        assert_eq!(boxed, House::Box { index: 6 });
        for house in House::of(pos) {
            assert!(house.cells().contains(&pos));
        }
    }

    #[test]
    fn test_all_houses_cover_every_cell_three_times() {
        let mut coverage = [0_u8; 81];
        for house in House::ALL {
            for pos in house.cells() {
                coverage[pos.index()] += 1;
            }
        }
        assert!(coverage.iter().all(|&n| n == 3));
    }
}
