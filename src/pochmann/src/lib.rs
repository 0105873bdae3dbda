//! A 3x3x3 facelet model and an Old Pochmann blindfolded solver.
//!
//! The cube is stored as 54 stickers, mutated only by the six base quarter
//! turns. The solver walks the permutation cycles of the edge and corner
//! pieces through a fixed buffer slot, one swap algorithm per target.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::too_many_lines)]

pub mod algorithms;
pub mod cube;
pub mod labels;
pub mod moves;
pub mod notation;
pub mod solver;

pub use cube::{Board, Color, Cube, CubeError, Face, Skin};
pub use labels::{LabelError, PieceKind};
pub use moves::{Amount, Move, Turn};
pub use notation::{Algorithm, NotationError};
pub use solver::{MAX_TARGETS_PER_PHASE, SolveError, Solution, Step, solve_old_pochmann};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
