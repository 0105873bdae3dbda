//! Singmaster notation. Parsing is tolerant of case, apostrophe variants, and
//! parentheses used for grouping.

use crate::{
    cube::Cube,
    moves::{Amount, Move, Turn},
};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationError {
    #[error("Unknown move `{token}`, expected one of F B U D L R optionally followed by 2 or '")]
    UnknownMove { token: String },
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The algorithm that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.moves.iter().rev().map(|mv| mv.inverse()).collect())
    }

    /// The number of base quarter turns the algorithm expands to.
    pub fn quarter_turn_count(&self) -> usize {
        self.moves.iter().map(|mv| mv.amount.quarter_turns()).sum()
    }
}

fn parse_token(token: &str) -> Option<Move> {
    let mut chars = token.chars();
    let turn = Turn::from_symbol(chars.next()?)?;
    let amount = match chars.as_str() {
        "" => Amount::Quarter,
        "2" => Amount::Half,
        "'" => Amount::Prime,
        _ => return None,
    };
    Some(Move::new(turn, amount))
}

impl FromStr for Algorithm {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .to_uppercase()
            .replace(['’', '′'], "'")
            .replace(['(', ')'], "");

        normalized
            .split_whitespace()
            .map(|token| {
                parse_token(token).ok_or_else(|| NotationError::UnknownMove {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

impl Cube {
    pub fn apply_algorithm(&mut self, algorithm: &Algorithm) {
        for &mv in algorithm.moves() {
            self.apply_move(mv);
        }
    }

    /// Parse `notation` and apply it. Nothing is applied unless every token is
    /// valid.
    ///
    /// # Errors
    ///
    /// `NotationError::UnknownMove` naming the first unrecognised token.
    pub fn translate(&mut self, notation: &str) -> Result<(), NotationError> {
        let algorithm = notation.parse::<Algorithm>()?;
        self.apply_algorithm(&algorithm);
        Ok(())
    }
}
