//! The six base quarter turns and the 18 moves derived from them.

use crate::cube::{Cube, Face};
use std::fmt::{self, Display};

/// A base face turn. Every other move is built out of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    F,
    B,
    U,
    D,
    L,
    R,
}

impl Turn {
    pub const ALL: [Self; 6] = [Turn::F, Turn::B, Turn::U, Turn::D, Turn::L, Turn::R];

    /// The face whose own block this turn rotates.
    pub fn face(self) -> Face {
        TURNS[self as usize].face
    }

    pub fn symbol(self) -> char {
        match self {
            Turn::F => 'F',
            Turn::B => 'B',
            Turn::U => 'U',
            Turn::D => 'D',
            Turn::L => 'L',
            Turn::R => 'R',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' => Some(Turn::F),
            'B' => Some(Turn::B),
            'U' => Some(Turn::U),
            'D' => Some(Turn::D),
            'L' => Some(Turn::L),
            'R' => Some(Turn::R),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    Quarter,
    Half,
    Prime,
}

impl Amount {
    pub const ALL: [Self; 3] = [Amount::Quarter, Amount::Half, Amount::Prime];

    /// How many clockwise quarter turns this amount expands to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Amount::Quarter => 1,
            Amount::Half => 2,
            Amount::Prime => 3,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Amount::Quarter => Amount::Prime,
            Amount::Half => Amount::Half,
            Amount::Prime => Amount::Quarter,
        }
    }
}

/// One of the 18 move tokens of Singmaster notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub turn: Turn,
    pub amount: Amount,
}

impl Move {
    pub const ALL: [Self; 18] = {
        let mut all = [Move {
            turn: Turn::F,
            amount: Amount::Quarter,
        }; 18];
        let mut i = 0;
        while i < all.len() {
            all[i] = Move {
                turn: Turn::ALL[i / 3],
                amount: Amount::ALL[i % 3],
            };
            i += 1;
        }
        all
    };

    pub fn new(turn: Turn, amount: Amount) -> Self {
        Self { turn, amount }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.turn, self.amount.inverse())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.amount {
            Amount::Quarter => "",
            Amount::Half => "2",
            Amount::Prime => "'",
        };
        write!(f, "{}{suffix}", self.turn.symbol())
    }
}

#[derive(Debug, Copy, Clone)]
enum Line {
    Row(usize),
    Col(usize),
}

/// A boundary line of three stickers on a neighbouring face.
#[derive(Debug, Copy, Clone)]
struct Strip {
    face: Face,
    line: Line,
    /// Whether the stickers arriving here are written in reverse order.
    reversed: bool,
}

struct TurnDef {
    face: Face,
    /// Whether the face block rotates clockwise in storage.
    clockwise: bool,
    /// Each strip receives the previous strip's stickers, the first receiving
    /// from the last.
    strips: [Strip; 4],
}

const fn strip(face: Face, line: Line, reversed: bool) -> Strip {
    Strip {
        face,
        line,
        reversed,
    }
}

use Face::{Back, Bottom, Front, Left, Right, Top};
use Line::{Col, Row};

/// Indexed by `Turn`.
const TURNS: [TurnDef; 6] = [
    // F
    TurnDef {
        face: Front,
        clockwise: true,
        strips: [
            strip(Top, Row(2), true),
            strip(Right, Col(0), false),
            strip(Bottom, Row(0), true),
            strip(Left, Col(2), false),
        ],
    },
    // B
    TurnDef {
        face: Back,
        clockwise: false,
        strips: [
            strip(Top, Row(0), false),
            strip(Left, Col(0), true),
            strip(Bottom, Row(2), false),
            strip(Right, Col(2), true),
        ],
    },
    // U
    TurnDef {
        face: Top,
        clockwise: true,
        strips: [
            strip(Front, Row(0), false),
            strip(Left, Row(0), false),
            strip(Back, Row(0), true),
            strip(Right, Row(0), true),
        ],
    },
    // D
    TurnDef {
        face: Bottom,
        clockwise: true,
        strips: [
            strip(Front, Row(2), false),
            strip(Right, Row(2), false),
            strip(Back, Row(2), true),
            strip(Left, Row(2), true),
        ],
    },
    // L
    TurnDef {
        face: Left,
        clockwise: true,
        strips: [
            strip(Top, Col(0), true),
            strip(Front, Col(0), false),
            strip(Bottom, Col(0), false),
            strip(Back, Col(0), true),
        ],
    },
    // R
    TurnDef {
        face: Right,
        clockwise: true,
        strips: [
            strip(Top, Col(2), false),
            strip(Back, Col(2), true),
            strip(Bottom, Col(2), true),
            strip(Front, Col(2), false),
        ],
    },
];

impl Cube {
    fn read_strip(&self, strip: Strip) -> [char; 3] {
        let face = &self.board[strip.face.index()];
        match strip.line {
            Row(row) => face[row],
            Col(col) => [face[0][col], face[1][col], face[2][col]],
        }
    }

    fn write_strip(&mut self, strip: Strip, mut stickers: [char; 3]) {
        if strip.reversed {
            stickers.reverse();
        }
        let face = &mut self.board[strip.face.index()];
        match strip.line {
            Row(row) => face[row] = stickers,
            Col(col) => {
                for (row, sticker) in stickers.into_iter().enumerate() {
                    face[row][col] = sticker;
                }
            }
        }
    }

    /// Turn one face a quarter turn clockwise, as seen looking at that face.
    pub fn apply_quarter_turn(&mut self, turn: Turn) {
        let def = &TURNS[turn as usize];

        let old = def.strips.map(|strip| self.read_strip(strip));
        for (i, &strip) in def.strips.iter().enumerate() {
            self.write_strip(strip, old[(i + 3) % 4]);
        }

        let face = turn.face().index();
        let old = self.board[face];
        let block = &mut self.board[face];
        for (row, stickers) in block.iter_mut().enumerate() {
            for (col, sticker) in stickers.iter_mut().enumerate() {
                *sticker = if def.clockwise {
                    old[2 - col][row]
                } else {
                    old[col][2 - row]
                };
            }
        }
    }

    /// Apply a move as its number of clockwise quarter turns.
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.amount.quarter_turns() {
            self.apply_quarter_turn(mv.turn);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// A cube whose stickers are all distinct, so every permutation of
    /// positions shows up as a change of state.
    fn distinct_cube() -> Cube {
        let mut cube = Cube::solved();
        let symbols = ('\u{100}'..).take(54).collect_vec();
        for (i, symbol) in symbols.into_iter().enumerate() {
            cube.board[i / 9][i % 9 / 3][i % 3] = symbol;
        }
        cube
    }

    fn scrambled_distinct_cube() -> Cube {
        let mut cube = distinct_cube();
        for mv in [Turn::R, Turn::U, Turn::F, Turn::L, Turn::D, Turn::B, Turn::R] {
            cube.apply_quarter_turn(mv);
        }
        cube
    }

    fn sorted_stickers(cube: &Cube) -> Vec<char> {
        cube.board().iter().flatten().flatten().copied().sorted().collect()
    }

    #[test]
    fn test_turn_faces() {
        assert_eq!(Turn::F.face(), Face::Front);
        assert_eq!(Turn::B.face(), Face::Back);
        assert_eq!(Turn::U.face(), Face::Top);
        assert_eq!(Turn::D.face(), Face::Bottom);
        assert_eq!(Turn::L.face(), Face::Left);
        assert_eq!(Turn::R.face(), Face::Right);
        for turn in Turn::ALL {
            assert_eq!(Turn::from_symbol(turn.symbol()), Some(turn));
        }
    }

    #[test]
    fn test_all_moves() {
        assert_eq!(Move::ALL.iter().unique().count(), 18);
        assert_eq!(
            Move::ALL.iter().take(3).map(ToString::to_string).collect_vec(),
            ["F", "F2", "F'"]
        );
        assert_eq!(Move::ALL[17].to_string(), "R'");
    }

    #[test]
    fn test_front_strips_from_solved() {
        let mut cube = Cube::solved();
        cube.apply_quarter_turn(Turn::F);
        assert_eq!(cube.board()[Face::Top.index()][2], ['r'; 3]);
        assert_eq!(cube.board()[Face::Bottom.index()][0], ['o'; 3]);
        for row in 0..3 {
            assert_eq!(cube.sticker(Face::Right, row, 0), 'w');
            assert_eq!(cube.sticker(Face::Left, row, 2), 'y');
        }
        assert_eq!(cube.board()[Face::Front.index()], [['b'; 3]; 3]);
    }

    #[test]
    fn test_strip_orientation() {
        // The letter skin makes the order of every copied strip visible.
        let letters = Cube::new(3, crate::Skin::Letter).unwrap();

        let mut cube = letters.clone();
        cube.apply_quarter_turn(Turn::F);
        // Front's top neighbour is copied in order, its bottom neighbour
        // reversed.
        assert_eq!(
            [0, 1, 2].map(|row| cube.sticker(Face::Right, row, 0)),
            ['D', 'c', 'C']
        );
        assert_eq!(cube.board()[Face::Bottom.index()][0], ['P', 'p', 'M']);
        assert_eq!(cube.board()[Face::Top.index()][2], ['G', 'f', 'F']);
        assert_eq!(
            cube.board()[Face::Front.index()],
            [['L', 'l', 'I'], ['k', '𝗕', 'i'], ['K', 'j', 'J']]
        );

        let mut cube = letters.clone();
        cube.apply_quarter_turn(Turn::U);
        assert_eq!(cube.board()[Face::Front.index()][0], ['M', 'm', 'N']);
        assert_eq!(cube.board()[Face::Left.index()][0], ['I', 'i', 'J']);
        assert_eq!(cube.board()[Face::Back.index()][0], ['F', 'e', 'E']);
        assert_eq!(cube.board()[Face::Right.index()][0], ['R', 'q', 'Q']);

        let mut cube = letters;
        cube.apply_quarter_turn(Turn::B);
        assert_eq!(cube.board()[Face::Top.index()][0], ['N', 'n', 'O']);
        assert_eq!(
            cube.board()[Face::Back.index()],
            [['R', 'r', 'S'], ['q', '𝗚', 's'], ['Q', 't', 'T']]
        );
    }

    #[test]
    fn test_centers_never_move() {
        let mut cube = distinct_cube();
        let centers = Face::ALL.map(|face| cube.center(face));
        for mv in Move::ALL {
            cube.apply_move(mv);
            assert_eq!(Face::ALL.map(|face| cube.center(face)), centers);
        }
    }

    #[test]
    fn test_closure() {
        let start = scrambled_distinct_cube();
        let expected = sorted_stickers(&start);
        for mv in Move::ALL {
            let mut cube = start.clone();
            cube.apply_move(mv);
            assert_ne!(cube, start);
            assert_eq!(sorted_stickers(&cube), expected);
        }

        let mut colors = Cube::solved();
        for mv in Move::ALL.into_iter().cycle().step_by(5).take(40) {
            colors.apply_move(mv);
            let counts = colors.board().iter().flatten().flatten().counts();
            assert_eq!(counts.len(), 6);
            assert!(counts.values().all(|&count| count == 9));
        }
    }

    #[test]
    fn test_order_four() {
        for start in [distinct_cube(), scrambled_distinct_cube()] {
            for turn in Turn::ALL {
                let mut cube = start.clone();
                for i in 1..=4 {
                    cube.apply_quarter_turn(turn);
                    assert_eq!(cube == start, i == 4);
                }
            }
        }
    }

    #[test]
    fn test_half_and_prime_composition() {
        let start = scrambled_distinct_cube();
        for turn in Turn::ALL {
            let mut twice = start.clone();
            twice.apply_quarter_turn(turn);
            twice.apply_quarter_turn(turn);
            let mut half = start.clone();
            half.apply_move(Move::new(turn, Amount::Half));
            assert_eq!(half, twice);

            let mut thrice = twice.clone();
            thrice.apply_quarter_turn(turn);
            let mut prime = start.clone();
            prime.apply_move(Move::new(turn, Amount::Prime));
            assert_eq!(prime, thrice);

            prime.apply_move(Move::new(turn, Amount::Quarter));
            assert_eq!(prime, start);

            let mut undone = start.clone();
            for amount in Amount::ALL {
                undone.apply_move(Move::new(turn, amount));
                undone.apply_move(Move::new(turn, amount).inverse());
            }
            assert_eq!(undone, start);
        }
    }

    #[test]
    fn test_opposite_faces_commute() {
        let start = scrambled_distinct_cube();
        for (a, b) in [(Turn::F, Turn::B), (Turn::U, Turn::D), (Turn::L, Turn::R)] {
            let mut ab = start.clone();
            ab.apply_quarter_turn(a);
            ab.apply_quarter_turn(b);
            let mut ba = start.clone();
            ba.apply_quarter_turn(b);
            ba.apply_quarter_turn(a);
            assert_eq!(ab, ba);
        }
        let mut fr = start.clone();
        fr.apply_quarter_turn(Turn::F);
        fr.apply_quarter_turn(Turn::R);
        let mut rf = start.clone();
        rf.apply_quarter_turn(Turn::R);
        rf.apply_quarter_turn(Turn::F);
        assert_ne!(fr, rf);
    }
}
