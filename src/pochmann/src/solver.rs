use crate::{
    algorithms::{PARITY_ALGORITHM, algorithm_for},
    cube::{Cube, Skin},
    labels::{LabelError, PieceKind},
    notation::NotationError,
    start, success, working,
};
use itertools::Itertools;
use log::{debug, info, trace};
use std::fmt::{self, Display};
use thiserror::Error;

/// A solvable cube never needs more targets than this in one phase, so
/// reaching it means the phase is cycling.
pub const MAX_TARGETS_PER_PHASE: usize = 24;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolveError {
    #[error("Cubes with the letter skin have no colours to solve from")]
    UnsupportedSkin,
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error("The {kind} phase placed 24 targets without finishing")]
    CycleLimitExceeded { kind: PieceKind },
    #[error("No swap algorithm for label `{label}`")]
    MissingAlgorithm { label: char },
    #[error("Swap algorithm failed to parse: {0}")]
    Notation(#[from] NotationError),
    #[error("The cube is not solved after both phases, the state is not reachable with legal moves")]
    Unsolvable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Swap the buffer piece into the slot with this label.
    Target(char),
    /// The parity fix applied between the edge and corner phases.
    Parity,
}

impl Step {
    /// The move sequence this step applies.
    pub fn algorithm(self) -> Option<&'static str> {
        match self {
            Step::Target(label) => algorithm_for(label),
            Step::Parity => Some(PARITY_ALGORITHM),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Target(label) => write!(f, "{label}"),
            Step::Parity => write!(f, "Parity"),
        }
    }
}

/// The ordered record of a solve: edge targets, an optional parity marker, then
/// corner targets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn has_parity(&self) -> bool {
        self.steps.contains(&Step::Parity)
    }

    /// The target labels of one phase, in the order they were placed.
    pub fn targets(&self, kind: PieceKind) -> Vec<char> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Target(label) if PieceKind::of_label(*label) == Some(kind) => Some(*label),
                _ => None,
            })
            .collect()
    }

    /// Every move the solve applied, one algorithm per step.
    pub fn moves(&self) -> String {
        self.steps
            .iter()
            .filter_map(|step| step.algorithm())
            .join(" ")
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" "))
    }
}

/// Follow one kind of piece through the buffer until every slot of that kind is
/// solved, returning the number of targets placed.
fn solve_phase(
    cube: &mut Cube,
    kind: PieceKind,
    solution: &mut Solution,
) -> Result<usize, SolveError> {
    for placed in 0..=MAX_TARGETS_PER_PHASE {
        let mut target = kind.buffer_label(cube)?;
        if kind.is_home(target) {
            // The cycle closed; start a new one from the first unsolved slot.
            match kind.first_unsolved(cube) {
                Some(label) => target = label,
                None => return Ok(placed),
            }
        }
        if placed == MAX_TARGETS_PER_PHASE {
            break;
        }

        let algorithm =
            algorithm_for(target).ok_or(SolveError::MissingAlgorithm { label: target })?;
        debug!(working!("{} target {}"), kind, target);
        trace!("Applying {algorithm}");
        cube.translate(algorithm)?;
        solution.steps.push(Step::Target(target));
    }

    Err(SolveError::CycleLimitExceeded { kind })
}

/// Solve `cube` in place with the Old Pochmann method and return the targets
/// in the order they were visited.
///
/// Edges are solved first through the buffer at the right of the top face. If
/// that took an odd number of targets the parity algorithm is applied and a
/// `Step::Parity` recorded. Corners are then solved through the buffer at the
/// back left of the top face.
///
/// # Errors
///
/// Any error stops the solve immediately, leaving the cube part way through.
/// `SolveError::Unsolvable` means both phases finished without solving the
/// cube, which happens for states that cannot be reached by turning.
pub fn solve_old_pochmann(cube: &mut Cube) -> Result<Solution, SolveError> {
    if cube.skin() == Skin::Letter {
        return Err(SolveError::UnsupportedSkin);
    }
    info!(start!("Solving with Old Pochmann"));

    let mut solution = Solution::default();

    let edges = solve_phase(cube, PieceKind::Edge, &mut solution)?;
    debug!(working!("Placed {} edge targets"), edges);

    if edges % 2 == 1 {
        debug!(working!("Odd edge count, fixing parity"));
        trace!("Applying {PARITY_ALGORITHM}");
        cube.translate(PARITY_ALGORITHM)?;
        solution.steps.push(Step::Parity);
    }

    let corners = solve_phase(cube, PieceKind::Corner, &mut solution)?;
    debug!(working!("Placed {} corner targets"), corners);

    if !cube.is_solved() {
        return Err(SolveError::Unsolvable);
    }

    info!(
        success!("Solved with {} edge targets and {} corner targets"),
        edges, corners
    );
    Ok(solution)
}
