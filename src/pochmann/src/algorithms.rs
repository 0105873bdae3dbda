//! Swap algorithms. Each entry sets a target slot up into the position the
//! perm swaps with the buffer, runs the perm, and undoes the setup.
//!
//! Every edge algorithm also exchanges the two top right corners, and every
//! corner algorithm also exchanges two pairs of top layer edges. Those side
//! effects cancel in pairs, which is why an odd number of edge targets needs
//! the parity algorithm before the corners are touched.

macro_rules! y_perm {
    () => {
        "F R U' R' U' R U R' F' R U R' U' R' F R F'"
    };
}

macro_rules! r_perm {
    () => {
        "R U' R' U' R U R D R' U' R D' R' U2 R' U'"
    };
}

macro_rules! t_perm {
    () => {
        "R U R' U' R' F R2 U' R' U' R U R' F'"
    };
}

macro_rules! j_down_perm {
    () => {
        "R U R' F' R U R' U' R' F R2 U' R' U'"
    };
}

macro_rules! j_up_perm {
    () => {
        "U' R' U L' U2 R U' R' U2 L R"
    };
}

/// Swaps the corner buffer with the top back right corner.
pub const Y_PERM: &str = y_perm!();
/// Fixes parity after an odd edge phase.
pub const R_PERM: &str = r_perm!();
pub const T_PERM: &str = t_perm!();
pub const J_DOWN_PERM: &str = j_down_perm!();
pub const J_UP_PERM: &str = j_up_perm!();

pub const PARITY_ALGORITHM: &str = R_PERM;

/// The algorithm that swaps the buffer piece with the slot named `label`.
///
/// Returns `None` for the buffer's own labels and for anything that is not a
/// label.
pub fn algorithm_for(label: char) -> Option<&'static str> {
    let algorithm = match label {
        // Edges, buffer at b/m.
        'a' => j_up_perm!(),
        'c' => j_down_perm!(),
        'd' => t_perm!(),
        'e' => concat!("R L F R' ", j_down_perm!(), " R F' L' R'"),
        'f' => concat!("R F R' ", j_down_perm!(), " R F' R'"),
        'g' => concat!("L' R F R' ", j_down_perm!(), " R F' R' L"),
        'h' => concat!("U B' U' ", t_perm!(), " U B U'"),
        'i' => concat!("R2 U' R' F' R' ", j_down_perm!(), " R F R U R2"),
        'j' => concat!("U2 R U2 ", t_perm!(), " U2 R' U2"),
        'k' => concat!("R F R' L' ", t_perm!(), " L R F' R'"),
        'l' => concat!("L' ", t_perm!(), " L"),
        'n' => concat!("U B U' ", t_perm!(), " U B' U'"),
        'o' => concat!("D' R F R' L' ", t_perm!(), " L R F' R' D"),
        'p' => concat!("U' F' U ", t_perm!(), " U' F U"),
        'q' => concat!("R2 U R' F' R' ", j_down_perm!(), " R F R U' R2"),
        'r' => concat!("U2 R' U2 ", t_perm!(), " U2 R U2"),
        's' => concat!("D L R' B' R ", j_up_perm!(), " R' B L' R D'"),
        't' => concat!("L ", t_perm!(), " L'"),
        'u' => concat!("R F2 R' ", j_down_perm!(), " R F2 R'"),
        'v' => concat!("D' R F2 R' ", j_down_perm!(), " R F2 R' D"),
        'w' => concat!("R' B2 R ", j_up_perm!(), " R' B2 R"),
        'x' => concat!("D R F2 R' ", j_down_perm!(), " R F2 R' D'"),

        // Corners, buffer at A/E/Q.
        'B' => concat!("U ", j_up_perm!(), " U'"),
        'C' => y_perm!(),
        'D' => concat!("U2 ", j_down_perm!(), " U2"),
        'F' => concat!("F ", y_perm!(), " F'"),
        'G' => concat!("D R ", y_perm!(), " R' D'"),
        'H' => concat!("D2 F' ", y_perm!(), " F D2"),
        'I' => concat!("F R U ", j_up_perm!(), " U' R' F'"),
        'J' => concat!("R U ", j_up_perm!(), " U' R'"),
        'K' => concat!("R ", y_perm!(), " R'"),
        'L' => concat!("D F' ", y_perm!(), " F D'"),
        'M' => concat!("F' U2 ", j_down_perm!(), " U2 F"),
        'N' => concat!("R' F' U2 ", j_down_perm!(), " U2 F R"),
        'O' => concat!("D' R ", y_perm!(), " R' D"),
        'P' => concat!("F' ", y_perm!(), " F"),
        'R' => concat!("R' ", y_perm!(), " R"),
        'S' => concat!("D' F' ", y_perm!(), " F D"),
        'T' => concat!("D2 R ", y_perm!(), " R' D2"),
        'U' => concat!("F2 ", y_perm!(), " F2"),
        'V' => concat!("D' F2 ", y_perm!(), " F2 D"),
        'W' => concat!("R2 ", y_perm!(), " R2"),
        'X' => concat!("D F2 ", y_perm!(), " F2 D'"),

        _ => return None,
    };
    Some(algorithm)
}
