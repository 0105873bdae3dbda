#![warn(clippy::pedantic)]

mod config;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use config::{Config, SkinChoice};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use pochmann::{Algorithm, Color, Cube, PieceKind, Skin, solve_old_pochmann};
use std::{fmt, path::PathBuf};

/// Solves the 3x3x3 cube blindfolded style with the Old Pochmann method
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Display configuration file, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print stickers without ANSI colours
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scramble a cube, then print the Old Pochmann targets that solve it.
    Solve {
        /// The scramble, e.g. "R U R' U'". Leave out to solve --state as given.
        #[arg(default_value = "")]
        scramble: String,
        /// Start from 54 facelet symbols (Top, Left, Front, Right, Back, Bottom) instead of a solved cube.
        #[arg(long)]
        state: Option<String>,
        /// Also print every move of the solve.
        #[arg(long)]
        moves: bool,
    },
    /// Apply a move sequence and print the resulting net.
    Apply {
        /// The move sequence, e.g. "R U' F2".
        sequence: String,
        /// Apply the inverse of the sequence instead.
        #[arg(long)]
        inverse: bool,
        /// Start from 54 facelet symbols instead of a solved cube.
        #[arg(long, conflicts_with = "skin")]
        state: Option<String>,
        /// Which sticker symbols to use, overriding the configuration file.
        #[arg(long, value_enum)]
        skin: Option<SkinChoice>,
    },
    /// Print a solved cube.
    Show {
        /// Which sticker symbols to use, overriding the configuration file.
        #[arg(long, value_enum)]
        skin: Option<SkinChoice>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    debug!("Loaded configuration {config:?}");
    let colored = config.display.colored && !cli.no_color;

    match cli.command {
        Commands::Solve {
            scramble,
            state,
            moves,
        } => {
            let mut cube = starting_cube(state.as_deref(), Skin::Color)?;
            cube.translate(&scramble)?;
            println!("{}", render(&cube, colored)?);

            let solution = solve_old_pochmann(&mut cube)?;
            info!("Solution {solution}");

            let edges = solution.targets(PieceKind::Edge);
            let corners = solution.targets(PieceKind::Corner);
            print_targets("Edges", &edges, colored);
            if solution.has_parity() {
                println!("{}", paint_heading("Parity", colored));
            }
            print_targets("Corners", &corners, colored);
            if moves {
                println!("{}", moves_summary(&solution.moves())?);
            }
        }
        Commands::Apply {
            sequence,
            inverse,
            state,
            skin,
        } => {
            let skin = skin.unwrap_or(config.display.skin);
            let mut cube = starting_cube(state.as_deref(), skin.into())?;
            let algorithm = sequence_algorithm(&sequence, inverse)?;
            debug!("Applying {algorithm}");
            cube.apply_algorithm(&algorithm);
            print!("{}", render(&cube, colored)?);
            if cube.is_solved() {
                println!("{}", paint_heading("Solved", colored));
            }
        }
        Commands::Show { skin } => {
            let cube = Cube::new(3, skin.unwrap_or(config.display.skin).into())?;
            print!("{}", render(&cube, colored)?);
        }
    }

    Ok(())
}

fn starting_cube(state: Option<&str>, skin: Skin) -> color_eyre::Result<Cube> {
    let Some(state) = state else {
        return Ok(Cube::new(3, skin)?);
    };
    let cube = Cube::from_facelets(state).wrap_err("Invalid --state")?;
    if let Some(unknown) = cube
        .board()
        .iter()
        .flatten()
        .flatten()
        .find(|&&sticker| Color::from_symbol(sticker).is_none())
    {
        return Err(eyre!(
            "Unknown sticker `{unknown}` in --state, expected one of w r b o g y"
        ));
    }
    Ok(cube)
}

fn sequence_algorithm(sequence: &str, inverse: bool) -> color_eyre::Result<Algorithm> {
    let algorithm = sequence.parse::<Algorithm>()?;
    Ok(if inverse {
        algorithm.inverse()
    } else {
        algorithm
    })
}

/// The full move sequence of a solve, followed by its length in moves and in
/// quarter turns.
fn moves_summary(moves: &str) -> color_eyre::Result<String> {
    let algorithm = moves.parse::<Algorithm>()?;
    Ok(format!(
        "{algorithm}\n({} moves, {} quarter turns)",
        algorithm.len(),
        algorithm.quarter_turn_count()
    ))
}

fn render(cube: &Cube, colored: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if colored {
        cube.write_net(&mut out, paint_sticker)?;
    } else {
        cube.write_net(&mut out, |sticker| sticker.to_string())?;
    }
    Ok(out)
}

fn paint_sticker(sticker: char) -> String {
    match Color::from_symbol(sticker) {
        Some(Color::White) => sticker.white().bold().to_string(),
        Some(Color::Red) => sticker.red().bold().to_string(),
        Some(Color::Blue) => sticker.blue().bold().to_string(),
        Some(Color::Orange) => sticker.truecolor(255, 140, 0).bold().to_string(),
        Some(Color::Green) => sticker.green().bold().to_string(),
        Some(Color::Yellow) => sticker.yellow().bold().to_string(),
        None => sticker.to_string(),
    }
}

fn paint_heading(heading: &str, colored: bool) -> String {
    if colored {
        heading.bold().to_string()
    } else {
        heading.to_owned()
    }
}

fn print_targets(heading: &str, targets: &[char], colored: bool) {
    let targets = if targets.is_empty() {
        "(none)".to_owned()
    } else {
        targets.iter().join(" ")
    };
    println!("{}: {targets}", paint_heading(heading, colored));
}
