use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Wall,
    Floor,
    Target,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Wall => write!(f, "#"),
            MapCell::Floor => write!(f, "."),
            MapCell::Target => write!(f, "T"),
        }
    }
}

/// The static layout of a puzzle - walls, floor and targets.
///
/// Immutable once constructed. Mutable search-time annotations
/// (the deadzone) live in the solver, not here.
#[derive(Clone)]
pub struct Board {
    grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<MapCell>, targets: Vec<Pos>) -> Self {
        Board { grid, targets }
    }

    pub fn rows(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u8 {
        self.grid.cols()
    }

    pub fn cell(&self, pos: Pos) -> MapCell {
        self.grid[pos]
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.grid[pos] == MapCell::Target
    }

    pub fn target_cnt(&self) -> usize {
        self.targets.len()
    }

    pub(crate) fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    /// Projects a position to its linear index (`row * cols + col`).
    ///
    /// Only valid after capacity validation - at most 256 cells,
    /// so every index fits in 8 bits.
    pub(crate) fn index(&self, pos: Pos) -> u8 {
        (usize::from(pos.r) * usize::from(self.cols()) + usize::from(pos.c)) as u8
    }

    /// Recovers (row, col) from a linear index.
    pub(crate) fn pos(&self, index: u8) -> Pos {
        Pos::new(index / self.cols(), index % self.cols())
    }

    pub(crate) fn write_with_state(
        &self,
        mover: Pos,
        boxes: &[Pos],
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let pos = Pos::new(r, c);
                if pos == mover {
                    // the input alphabet has no mover-on-target symbol
                    write!(f, "S")?;
                } else if boxes.contains(&pos) {
                    if self.is_target(pos) {
                        write!(f, "R")?;
                    } else {
                        write!(f, "B")?;
                    }
                } else {
                    write!(f, "{}", self.grid[pos])?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn index_projection() {
        let level = "
####
#S.#
#.T#
####
";
        let level: Level = level.parse().unwrap();
        let map = &level.map;
        for r in 0..map.rows() {
            for c in 0..map.cols() {
                let pos = crate::data::Pos::new(r, c);
                assert_eq!(map.pos(map.index(pos)), pos);
            }
        }
        assert_eq!(map.index(crate::data::Pos::new(2, 2)), 10);
    }

    #[test]
    fn formatting_map() {
        let level = "
#####
#S.B#
#.TR#
#####
";
        let level: Level = level.parse().unwrap();
        let map_only = "
#####
#...#
#.TT#
#####
"
        .trim_start_matches('\n');
        assert_eq!(level.map.to_string(), map_only);
        assert_eq!(format!("{:?}", level.map), map_only);
    }
}
