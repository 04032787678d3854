//! Fixed card layout: the 25 trait labels and the 12 winning lines.
//!
//! Cells are numbered row-major, 0 in the top-left corner and 24 in the
//! bottom-right. Nothing in here changes at runtime.

/// Cells per side.
pub const GRID_SIZE: usize = 5;

/// Total number of cells on a card.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The middle cell. Styled differently but still needs a real name to count.
pub const CENTER_INDEX: usize = CELL_COUNT / 2;

/// Trait labels, one per cell, in row-major order.
pub const TRAITS: [&str; CELL_COUNT] = [
    "Wear glasses",
    "Is left-handed",
    "Has a tattoo",
    "Has dyed hair",
    "Speaks more than 3 languages",
    "Is the eldest child",
    "Is the youngest child",
    "Can whistle loudly",
    "Has completed a Triathlon",
    "Speaks Bahasa Melayu fluently",
    "Can name all Malaysian states",
    "Comes from East Malaysia",
    "Is a MAHK Member",
    "Is not from KL or Penang",
    "Took STPM",
    "Has eaten durian during this year",
    "Has climbed Mt. Kinabalu",
    "Has lived in HK for more than 2 years",
    "Can speak a bit of Cantonese",
    "Can cook at least 2 Malaysian dishes",
    "Has visited more than 10 countries",
    "Has tried Muay Thai or any martial arts",
    "Has worked in another country",
    "Is from Macao",
    "Has met Chow Yun Fat in HK before",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// One winning line: five cell indices plus where it sits on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    /// 0-based position among lines of the same kind.
    pub ordinal: usize,
    pub cells: [usize; GRID_SIZE],
}

impl Line {
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Short human label, e.g. "row 1" or "diagonal 2".
    pub fn label(&self) -> String {
        let kind = match self.kind {
            LineKind::Row => "row",
            LineKind::Column => "column",
            LineKind::Diagonal => "diagonal",
        };
        format!("{} {}", kind, self.ordinal + 1)
    }
}

const fn row(r: usize) -> Line {
    let s = r * GRID_SIZE;
    Line {
        kind: LineKind::Row,
        ordinal: r,
        cells: [s, s + 1, s + 2, s + 3, s + 4],
    }
}

const fn column(c: usize) -> Line {
    Line {
        kind: LineKind::Column,
        ordinal: c,
        cells: [c, c + 5, c + 10, c + 15, c + 20],
    }
}

/// All winning lines in check order: rows, then columns, then diagonals.
pub static LINES: [Line; 12] = [
    row(0),
    row(1),
    row(2),
    row(3),
    row(4),
    column(0),
    column(1),
    column(2),
    column(3),
    column(4),
    Line {
        kind: LineKind::Diagonal,
        ordinal: 0,
        cells: [0, 6, 12, 18, 24],
    },
    Line {
        kind: LineKind::Diagonal,
        ordinal: 1,
        cells: [4, 8, 12, 16, 20],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_twelve() {
        assert_eq!(CENTER_INDEX, 12);
        assert_eq!(TRAITS[CENTER_INDEX], "Is a MAHK Member");
    }

    #[test]
    fn lines_are_in_check_order() {
        assert_eq!(LINES[0].cells, [0, 1, 2, 3, 4]);
        assert_eq!(LINES[4].cells, [20, 21, 22, 23, 24]);
        assert_eq!(LINES[5].cells, [0, 5, 10, 15, 20]);
        assert_eq!(LINES[9].cells, [4, 9, 14, 19, 24]);
        assert_eq!(LINES[10].cells, [0, 6, 12, 18, 24]);
        assert_eq!(LINES[11].cells, [4, 8, 12, 16, 20]);
    }

    #[test]
    fn every_cell_is_on_a_row_and_a_column() {
        for idx in 0..CELL_COUNT {
            let rows = LINES
                .iter()
                .filter(|l| l.kind == LineKind::Row && l.contains(idx))
                .count();
            let cols = LINES
                .iter()
                .filter(|l| l.kind == LineKind::Column && l.contains(idx))
                .count();
            assert_eq!((rows, cols), (1, 1), "cell {}", idx);
        }
    }

    #[test]
    fn only_center_is_on_both_diagonals() {
        let on_both: Vec<usize> = (0..CELL_COUNT)
            .filter(|&i| LINES[10].contains(i) && LINES[11].contains(i))
            .collect();
        assert_eq!(on_both, vec![CENTER_INDEX]);
    }

    #[test]
    fn line_labels() {
        assert_eq!(LINES[0].label(), "row 1");
        assert_eq!(LINES[7].label(), "column 3");
        assert_eq!(LINES[11].label(), "diagonal 2");
    }
}
