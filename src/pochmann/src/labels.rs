//! Letter labels for the 24 edge stickers (`a`..`x`) and the 24 corner
//! stickers (`A`..`X`), and the tables that name whatever piece sits in a
//! buffer slot.

use crate::cube::{
    Color::{self, Blue, Green, Orange, Red, White, Yellow},
    Cube, Face,
};
use itertools::Itertools;
use std::fmt::{self, Display};
use thiserror::Error;

/// Where the four edge labels of a face sit, in label order.
pub const EDGE_OFFSETS: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 1), (1, 0)];

/// Where the four corner labels of a face sit, in label order.
pub const CORNER_OFFSETS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 2), (2, 0)];

/// The edge stickers read at the buffer, (Top, Right), and the label of the
/// slot the Top sticker belongs in.
const EDGE_STICKERS: [((Color, Color), char); 24] = [
    ((White, Green), 'a'),
    ((White, Orange), 'b'),
    ((White, Blue), 'c'),
    ((White, Red), 'd'),
    ((Red, White), 'e'),
    ((Red, Blue), 'f'),
    ((Red, Yellow), 'g'),
    ((Red, Green), 'h'),
    ((Blue, White), 'i'),
    ((Blue, Orange), 'j'),
    ((Blue, Yellow), 'k'),
    ((Blue, Red), 'l'),
    ((Orange, White), 'm'),
    ((Orange, Green), 'n'),
    ((Orange, Yellow), 'o'),
    ((Orange, Blue), 'p'),
    ((Green, White), 'q'),
    ((Green, Orange), 'r'),
    ((Green, Yellow), 's'),
    ((Green, Red), 't'),
    ((Yellow, Blue), 'u'),
    ((Yellow, Orange), 'v'),
    ((Yellow, Green), 'w'),
    ((Yellow, Red), 'x'),
];

/// The corner stickers read at the buffer, (Top, Left, Back), and the label of
/// the slot the Top sticker belongs in.
const CORNER_STICKERS: [((Color, Color, Color), char); 24] = [
    ((White, Red, Green), 'A'),
    ((White, Green, Orange), 'B'),
    ((White, Orange, Blue), 'C'),
    ((White, Blue, Red), 'D'),
    ((Red, Green, White), 'E'),
    ((Red, White, Blue), 'F'),
    ((Red, Blue, Yellow), 'G'),
    ((Red, Yellow, Green), 'H'),
    ((Blue, Red, White), 'I'),
    ((Blue, White, Orange), 'J'),
    ((Blue, Orange, Yellow), 'K'),
    ((Blue, Yellow, Red), 'L'),
    ((Orange, Blue, White), 'M'),
    ((Orange, White, Green), 'N'),
    ((Orange, Green, Yellow), 'O'),
    ((Orange, Yellow, Blue), 'P'),
    ((Green, White, Red), 'Q'),
    ((Green, Orange, White), 'R'),
    ((Green, Yellow, Orange), 'S'),
    ((Green, Red, Yellow), 'T'),
    ((Yellow, Red, Blue), 'U'),
    ((Yellow, Blue, Orange), 'V'),
    ((Yellow, Orange, Green), 'W'),
    ((Yellow, Green, Red), 'X'),
];

const EDGE_BUFFER: [(Face, usize, usize); 2] = [(Face::Top, 1, 2), (Face::Right, 0, 1)];

const CORNER_BUFFER: [(Face, usize, usize); 3] =
    [(Face::Top, 0, 0), (Face::Left, 0, 0), (Face::Back, 0, 0)];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Edge,
    Corner,
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Edge => write!(f, "edge"),
            PieceKind::Corner => write!(f, "corner"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LabelError {
    /// The cube no longer holds a permutation of the solved stickers.
    #[error("Stickers {stickers:?} at the {kind} buffer do not form a known piece")]
    Inconsistent { kind: PieceKind, stickers: String },
}

impl PieceKind {
    pub const ALL: [Self; 2] = [PieceKind::Edge, PieceKind::Corner];

    fn first_label(self) -> u8 {
        match self {
            PieceKind::Edge => b'a',
            PieceKind::Corner => b'A',
        }
    }

    /// Every label of this kind in scan order.
    pub fn labels(self) -> impl Iterator<Item = char> {
        let first = self.first_label();
        (first..first + 24).map(char::from)
    }

    pub fn of_label(label: char) -> Option<Self> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.labels().contains(&label))
    }

    /// Labels meaning the buffer already holds its own piece.
    pub fn home_labels(self) -> &'static [char] {
        match self {
            PieceKind::Edge => &['b', 'm'],
            PieceKind::Corner => &['A', 'E', 'Q'],
        }
    }

    pub fn is_home(self, label: char) -> bool {
        self.home_labels().contains(&label)
    }

    /// The `(face, row, col)` a label is attached to.
    pub fn slot(self, label: char) -> Option<(Face, usize, usize)> {
        let index = usize::from(u8::try_from(label).ok()?.checked_sub(self.first_label())?);
        let face = *Face::ALL.get(index / 4)?;
        let (row, col) = match self {
            PieceKind::Edge => EDGE_OFFSETS[index % 4],
            PieceKind::Corner => CORNER_OFFSETS[index % 4],
        };
        Some((face, row, col))
    }

    /// Name the piece sitting in this kind's buffer.
    ///
    /// # Errors
    ///
    /// `LabelError::Inconsistent` if the stickers there match no piece, which
    /// only happens when the board was replaced with something that is not a
    /// permutation of the solved cube.
    pub fn buffer_label(self, cube: &Cube) -> Result<char, LabelError> {
        let slots: &[(Face, usize, usize)] = match self {
            PieceKind::Edge => &EDGE_BUFFER,
            PieceKind::Corner => &CORNER_BUFFER,
        };
        let stickers = slots
            .iter()
            .map(|&(face, row, col)| cube.sticker(face, row, col))
            .collect_vec();
        let inconsistent = || LabelError::Inconsistent {
            kind: self,
            stickers: stickers.iter().collect(),
        };
        let colors = stickers
            .iter()
            .map(|&sticker| Color::from_symbol(sticker))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(inconsistent)?;

        let found = match (self, colors.as_slice()) {
            (PieceKind::Edge, &[a, b]) => EDGE_STICKERS
                .iter()
                .find(|(tuple, _)| *tuple == (a, b))
                .map(|&(_, label)| label),
            (PieceKind::Corner, &[a, b, c]) => CORNER_STICKERS
                .iter()
                .find(|(tuple, _)| *tuple == (a, b, c))
                .map(|&(_, label)| label),
            _ => None,
        };
        found.ok_or_else(inconsistent)
    }

    /// The first label, in alphabetical order and skipping the buffer's own
    /// labels, whose sticker differs from the centre of its face.
    pub fn first_unsolved(self, cube: &Cube) -> Option<char> {
        self.labels().filter(|&label| !self.is_home(label)).find(|&label| {
            self.slot(label)
                .is_some_and(|(face, row, col)| cube.sticker(face, row, col) != cube.center(face))
        })
    }
}

/// The lowercase label of the piece in the edge buffer.
///
/// # Errors
///
/// See `PieceKind::buffer_label`.
pub fn label_at_edge_buffer(cube: &Cube) -> Result<char, LabelError> {
    PieceKind::Edge.buffer_label(cube)
}

/// The uppercase label of the piece in the corner buffer.
///
/// # Errors
///
/// See `PieceKind::buffer_label`.
pub fn label_at_corner_buffer(cube: &Cube) -> Result<char, LabelError> {
    PieceKind::Corner.buffer_label(cube)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Skin;

    #[test]
    fn test_slots_match_letter_skin() {
        let letters = Cube::new(3, Skin::Letter).unwrap();
        for kind in PieceKind::ALL {
            assert_eq!(kind.labels().count(), 24);
            for label in kind.labels() {
                let (face, row, col) = kind.slot(label).unwrap();
                assert_eq!(letters.sticker(face, row, col), label);
                assert_eq!(PieceKind::of_label(label), Some(kind));
            }
        }
        assert_eq!(PieceKind::Edge.slot('y'), None);
        assert_eq!(PieceKind::Corner.slot('a'), None);
        assert_eq!(PieceKind::of_label('7'), None);
    }

    #[test]
    fn test_sticker_tables_match_solved_colors() {
        // The first sticker of every tuple is the colour of the face its label
        // sits on.
        let solved = Cube::solved();
        for &((first, _), label) in &EDGE_STICKERS {
            let (face, row, col) = PieceKind::Edge.slot(label).unwrap();
            assert_eq!(solved.sticker(face, row, col), first.symbol());
        }
        for &((first, _, _), label) in &CORNER_STICKERS {
            let (face, row, col) = PieceKind::Corner.slot(label).unwrap();
            assert_eq!(solved.sticker(face, row, col), first.symbol());
        }
        assert_eq!(EDGE_STICKERS.iter().map(|(tuple, _)| tuple).unique().count(), 24);
        assert_eq!(CORNER_STICKERS.iter().map(|(tuple, _)| tuple).unique().count(), 24);
    }

    #[test]
    fn test_solved_buffers_hold_home_labels() {
        let cube = Cube::solved();
        assert_eq!(label_at_edge_buffer(&cube), Ok('b'));
        assert_eq!(label_at_corner_buffer(&cube), Ok('A'));
        for kind in PieceKind::ALL {
            assert_eq!(kind.first_unsolved(&cube), None);
        }
    }

    #[test]
    fn test_buffer_after_moves() {
        let mut cube = Cube::solved();
        cube.translate("U").unwrap();
        // The piece from the back of the top face moved into the buffer.
        assert_eq!(label_at_edge_buffer(&cube), Ok('a'));
        assert_eq!(label_at_corner_buffer(&cube), Ok('D'));
        assert_eq!(PieceKind::Edge.first_unsolved(&cube), Some('e'));
        assert_eq!(PieceKind::Corner.first_unsolved(&cube), Some('F'));

        let mut cube = Cube::solved();
        cube.translate("R").unwrap();
        assert_eq!(label_at_edge_buffer(&cube), Ok('j'));
        assert_eq!(label_at_corner_buffer(&cube), Ok('A'));
        assert_eq!(PieceKind::Corner.first_unsolved(&cube), Some('B'));
    }

    #[test]
    fn test_home_labels() {
        assert!(PieceKind::Edge.is_home('m'));
        assert!(!PieceKind::Edge.is_home('a'));
        assert!(PieceKind::Corner.is_home('Q'));
        assert!(!PieceKind::Corner.is_home('B'));
    }

    #[test]
    fn test_inconsistent_buffer() {
        let mut cube = Cube::solved();
        let mut board = cube
            .board()
            .iter()
            .map(|face| face.iter().map(|row| row.to_vec()).collect_vec())
            .collect_vec();
        board[0][1][2] = 'o';
        cube.set_board(board).unwrap();
        assert_eq!(
            label_at_edge_buffer(&cube),
            Err(LabelError::Inconsistent {
                kind: PieceKind::Edge,
                stickers: "oo".to_owned()
            })
        );

        let letters = Cube::new(3, Skin::Letter).unwrap();
        assert!(label_at_corner_buffer(&letters).is_err());
    }
}
