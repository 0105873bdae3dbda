use crate::labels::{CORNER_OFFSETS, EDGE_OFFSETS};
use itertools::Itertools;
use std::fmt::{self, Display};
use thiserror::Error;

/// The only cube size with an implemented adjacency table.
pub const SUPPORTED_SIZE: usize = 3;

/// Three rows of three stickers for each of the six faces, in `Face` order.
pub type Board = [[[char; 3]; 3]; 6];

/// A face of the cube. The discriminant is the face's index into a `Board`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    /// Stored as seen through the cube from the front, so its columns run
    /// mirrored relative to a net.
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Top, Left, Front, Right, Back, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn index(self) -> usize {
        self as usize
    }
}

/// The colour scheme of the cube. Each face is one colour when solved.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Blue,
    Orange,
    Green,
    Yellow,
}

impl Color {
    /// The colour of `face` on a solved cube.
    pub fn of_face(face: Face) -> Self {
        match face {
            Face::Top => Color::White,
            Face::Left => Color::Red,
            Face::Front => Color::Blue,
            Face::Right => Color::Orange,
            Face::Back => Color::Green,
            Face::Bottom => Color::Yellow,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::Green => 'g',
            Color::Yellow => 'y',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Color::White),
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'o' => Some(Color::Orange),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

/// Which alphabet the stickers are drawn from. Only affects the initial
/// symbols; the rotation logic is identical.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Skin {
    /// One colour symbol per face.
    #[default]
    Color,
    /// A unique letter per sticker, matching the piece labels.
    Letter,
}

const LETTER_CENTERS: [char; 6] = ['𝗪', '𝗥', '𝗕', '𝗢', '𝗚', '𝗬'];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("Only 3x3x3 cubes are supported, got size {0}")]
    UnsupportedSize(usize),
    #[error("Invalid board shape, expected 6 faces of 3x3 stickers: {0}")]
    InvalidBoardShape(String),
}

/// The facelet state of a 3x3x3 cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    pub(crate) board: Board,
    skin: Skin,
}

impl Cube {
    /// Create a solved cube.
    ///
    /// # Errors
    ///
    /// If `size` is anything other than 3.
    pub fn new(size: usize, skin: Skin) -> Result<Self, CubeError> {
        if size != SUPPORTED_SIZE {
            return Err(CubeError::UnsupportedSize(size));
        }
        Ok(Self {
            board: solved_board(skin),
            skin,
        })
    }

    /// A solved colour cube.
    pub fn solved() -> Self {
        Self {
            board: solved_board(Skin::Color),
            skin: Skin::Color,
        }
    }

    /// Parse 54 facelet symbols in face order, each face row-major. Whitespace
    /// is ignored. The result uses the colour skin.
    ///
    /// # Errors
    ///
    /// If there are not exactly 54 symbols.
    pub fn from_facelets(facelets: &str) -> Result<Self, CubeError> {
        let symbols = facelets.chars().filter(|c| !c.is_whitespace()).collect_vec();
        if symbols.len() != 54 {
            return Err(CubeError::InvalidBoardShape(format!(
                "expected 54 facelets but got {}",
                symbols.len()
            )));
        }
        let mut board = [[[' '; 3]; 3]; 6];
        for (i, symbol) in symbols.into_iter().enumerate() {
            board[i / 9][i % 9 / 3][i % 3] = symbol;
        }
        Ok(Self {
            board,
            skin: Skin::Color,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    /// The number of faces, always 6.
    pub fn face_count(&self) -> usize {
        self.board.len()
    }

    pub fn sticker(&self, face: Face, row: usize, col: usize) -> char {
        self.board[face.index()][row][col]
    }

    /// The reference symbol of `face`. Centres never move.
    pub fn center(&self, face: Face) -> char {
        self.sticker(face, 1, 1)
    }

    /// Whether every sticker matches the centre of its face.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let center = self.center(face);
            self.board[face.index()].iter().flatten().all(|&s| s == center)
        })
    }

    /// Replace the whole board. The cube is left untouched if `board` is not
    /// six faces of three rows of three stickers.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidBoardShape` describing the first mismatch.
    pub fn set_board(&mut self, board: Vec<Vec<Vec<char>>>) -> Result<(), CubeError> {
        if board.len() != self.face_count() {
            return Err(CubeError::InvalidBoardShape(format!(
                "got {} faces",
                board.len()
            )));
        }
        let mut new_board = [[[' '; 3]; 3]; 6];
        for (face_index, face) in board.into_iter().enumerate() {
            if face.len() != 3 {
                return Err(CubeError::InvalidBoardShape(format!(
                    "face {face_index} has {} rows",
                    face.len()
                )));
            }
            for (row_index, row) in face.into_iter().enumerate() {
                new_board[face_index][row_index] = row.try_into().map_err(|row: Vec<char>| {
                    CubeError::InvalidBoardShape(format!(
                        "row {row_index} of face {face_index} has {} stickers",
                        row.len()
                    ))
                })?;
            }
        }
        self.board = new_board;
        Ok(())
    }

    /// Render one face's row for the net. Back is flipped back into net
    /// orientation.
    fn net_row(&self, face: Face, row: usize) -> [char; 3] {
        let mut stickers = self.board[face.index()][row];
        if face == Face::Back {
            stickers.reverse();
        }
        stickers
    }

    /// Write the unfolded net, passing every sticker through `paint`.
    ///
    /// # Errors
    ///
    /// If writing to `f` fails.
    pub fn write_net<W: fmt::Write>(
        &self,
        f: &mut W,
        mut paint: impl FnMut(char) -> String,
    ) -> fmt::Result {
        let pad = " ".repeat(6);
        for row in 0..3 {
            writeln!(
                f,
                "{pad}{}",
                self.net_row(Face::Top, row).map(&mut paint).join(" ")
            )?;
        }
        for row in 0..3 {
            let line = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| self.net_row(face, row).map(&mut paint).join(" "))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{pad}{}",
                self.net_row(Face::Bottom, row).map(&mut paint).join(" ")
            )?;
        }
        Ok(())
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_net(f, |sticker| sticker.to_string())
    }
}

fn solved_board(skin: Skin) -> Board {
    let mut board = [[[' '; 3]; 3]; 6];
    for face in Face::ALL {
        let stickers = &mut board[face.index()];
        match skin {
            Skin::Color => *stickers = [[Color::of_face(face).symbol(); 3]; 3],
            Skin::Letter => {
                let edges = (b'a'..=b'x').map(char::from).skip(4 * face.index());
                for (&(row, col), label) in EDGE_OFFSETS.iter().zip(edges) {
                    stickers[row][col] = label;
                }
                let corners = (b'A'..=b'X').map(char::from).skip(4 * face.index());
                for (&(row, col), label) in CORNER_OFFSETS.iter().zip(corners) {
                    stickers[row][col] = label;
                }
                stickers[1][1] = LETTER_CENTERS[face.index()];
            }
        }
    }
    board
}
