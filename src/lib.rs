// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod data;
pub mod level;
pub mod map;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;
use std::path::Path;

use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr>;
}

/// Solves a map and renders the outcome per the output contract:
/// the move string over {U,D,L,R}, `"No solution!"` for unsolvable or
/// malformed input, `""` for a puzzle with nothing to move.
///
/// Capacity violations (too many boxes or cells for the state encoding)
/// are real errors, not unsolvable puzzles.
pub fn solve_map(map: &str, print_status: bool) -> Result<String, SolverErr> {
    let level: Level = match map.parse() {
        // the caller can't tell malformed from unsolvable - intentional
        Ok(level) => level,
        Err(_) => return Ok("No solution!".to_string()),
    };
    let solution = level.solve(print_status)?;
    match solution.moves {
        Some(moves) => Ok(moves.to_string()),
        None => Ok("No solution!".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_push_level_from_file() {
        let level = "levels/01-single-push.txt".load_level().unwrap();
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.to_string(), "D");
        assert_eq!(moves.push_cnt(), 1);
    }

    #[test]
    fn two_box_level_from_file() {
        let level = "levels/02-two-boxes.txt".load_level().unwrap();
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.move_cnt(), 5);
        assert_eq!(moves.push_cnt(), 2);
    }

    #[test]
    fn corridor_push() {
        let map = "
######
#S...#
#.B.T#
######
";
        assert_eq!(solve_map(map, false).unwrap(), "DRR");
    }

    #[test]
    fn zero_boxes_is_the_empty_string() {
        let map = "
####
#S.#
#..#
####
";
        assert_eq!(solve_map(map, false).unwrap(), "");
    }

    #[test]
    fn corner_trap_is_no_solution() {
        let map = "
#####
#S.B#
#..T#
#####
";
        assert_eq!(solve_map(map, false).unwrap(), "No solution!");
    }

    #[test]
    fn more_boxes_than_targets_is_no_solution() {
        let map = "
######
#S.B.#
#.B.T#
######
";
        assert_eq!(solve_map(map, false).unwrap(), "No solution!");
    }

    #[test]
    fn malformed_input_is_no_solution() {
        assert_eq!(solve_map("not a map", false).unwrap(), "No solution!");
        assert_eq!(solve_map("", false).unwrap(), "No solution!");
        assert_eq!(solve_map("#####\n#S.S#\n#####", false).unwrap(), "No solution!");
    }

    #[test]
    fn capacity_violation_is_an_error() {
        let map = "
############
#S.BBBBBBBB#
#..TTTTTTTT#
############
";
        assert!(solve_map(map, false).is_err());
    }
}
