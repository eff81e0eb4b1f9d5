use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::Pos;
use crate::level::Level;
use crate::map::{Board, MapCell};
use crate::vec2d::Vec2d;

// positions are u8 so anything larger can't even be addressed
const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    Pos(usize, usize),
    TooLarge,
    MultipleMovers,
    NoMover,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty map"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than 255 rows/columns"),
            ParserErr::MultipleMovers => write!(f, "More than one mover"),
            ParserErr::NoMover => write!(f, "No mover"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a map using the symbols `S` (mover), `B` (box), `T` (target),
/// `R` (box on target), `#` (wall) and `.` (floor).
///
/// Note there is no mover-on-target symbol - `S` always means mover on
/// floor. Rows of uneven length are padded with wall.
pub fn parse(map: &str) -> Result<Level, ParserErr> {
    // trim so levels are easy to write as raw strings in tests
    let map = map.trim_matches('\n').trim_end();
    if map.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid = Vec::new();
    let mut targets = Vec::new();
    let mut boxes = Vec::new();
    let mut mover = None;

    for (r, line) in map.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut line_cells = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r as u8, c as u8);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                '.' => MapCell::Floor,
                'S' => {
                    if mover.is_some() {
                        return Err(ParserErr::MultipleMovers);
                    }
                    mover = Some(pos);
                    MapCell::Floor
                }
                'B' => {
                    boxes.push(pos);
                    MapCell::Floor
                }
                'T' => {
                    targets.push(pos);
                    MapCell::Target
                }
                'R' => {
                    boxes.push(pos);
                    targets.push(pos);
                    MapCell::Target
                }
                _ => return Err(ParserErr::Pos(r, c)),
            };
            line_cells.push(cell);
        }
        grid.push(line_cells);
    }

    let mover = mover.ok_or(ParserErr::NoMover)?;
    let grid = Vec2d::new(&grid);
    Ok(Level::new(Board::new(grid, targets), mover, boxes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::Empty);
        assert_failure("\n\n", ParserErr::Empty);
    }

    #[test]
    fn fail_no_mover() {
        let map = r"
####
#..#
####
";
        assert_failure(map, ParserErr::NoMover);
    }

    #[test]
    fn fail_multiple_movers() {
        let map = r"
#####
#S.S#
#####
";
        assert_failure(map, ParserErr::MultipleMovers);
    }

    #[test]
    fn fail_invalid_char() {
        let map = r"
#####
#S X#
#####
";
        assert_failure(map, ParserErr::Pos(1, 2));
    }

    #[test]
    fn box_on_target() {
        let map = r"
#####
#SBT#
#.R.#
#####
";
        let level: Level = map.parse().unwrap();
        assert_eq!(level.boxes.len(), 2);
        assert_eq!(level.map.target_cnt(), 2);
        assert_eq!(level.mover, Pos::new(1, 1));
        // parsing then printing round-trips
        assert_eq!(level.to_string(), map.trim_start_matches('\n'));
    }

    #[test]
    fn ragged_rows_padded_with_wall() {
        let map = "####\n#S.#\n#..\n####";
        let level: Level = map.parse().unwrap();
        assert_eq!(level.map.rows(), 4);
        assert_eq!(level.map.cols(), 4);
    }

    fn assert_failure(map: &str, expected_err: ParserErr) {
        assert_eq!(map.parse::<Level>().unwrap_err(), expected_err);
    }
}
