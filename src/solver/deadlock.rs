use crate::data::{Dir, Pos};
use crate::map::{Board, MapCell};
use crate::vec2d::Vec2d;

/// Detects box configurations that are provably unsolvable.
///
/// Owns the deadzone grid - the memo of positions proven to never host a
/// box in any solution. Marking is monotonic (a dead cell never comes back
/// to life) so repeated checks are idempotent. The memo is an optimization
/// only - recomputing from the rules gives the same answer.
#[derive(Debug, Clone)]
pub(crate) struct Deadlocks {
    dead: Vec2d<bool>,
}

impl Deadlocks {
    pub(crate) fn new(map: &Board) -> Self {
        Deadlocks {
            dead: map.grid().create_scratchpad(false),
        }
    }

    /// The known-dead positions, consulted by the move validator to refuse
    /// pushes (never plain walking).
    pub(crate) fn dead(&self) -> &Vec2d<bool> {
        &self.dead
    }

    /// Whether some box in the configuration is irrecoverably stuck.
    ///
    /// Two rules, either one triggers a positive:
    /// - corner rule: two perpendicular wall neighbors and the cell is not
    ///   a target - the box can't be pushed out along either axis
    /// - edge-line rule: the box sits on the row or column hugging the
    ///   border wall and that whole line has no target - the box can never
    ///   leave the line nor be delivered on it
    pub(crate) fn is_dead(&mut self, map: &Board, boxes: &[Pos]) -> bool {
        for &box_pos in boxes {
            if self.dead[box_pos] {
                return true;
            }

            if corner_trapped(map, box_pos) && !map.is_target(box_pos) {
                self.dead[box_pos] = true;
                return true;
            }

            if (box_pos.r == 1 || box_pos.r == map.rows() - 2) && !row_has_target(map, box_pos.r) {
                self.dead[box_pos] = true;
                return true;
            }
            if (box_pos.c == 1 || box_pos.c == map.cols() - 2) && !col_has_target(map, box_pos.c) {
                self.dead[box_pos] = true;
                return true;
            }
        }

        false
    }
}

/// Whether the cell has two perpendicular wall neighbors.
///
/// Also used at load time to reject puzzles born with a trapped box.
/// Callers must exempt boxes already sitting on a target.
pub(crate) fn corner_trapped(map: &Board, pos: Pos) -> bool {
    let wall = |dir| map.cell(pos + dir) == MapCell::Wall;

    (wall(Dir::Up) || wall(Dir::Down)) && (wall(Dir::Left) || wall(Dir::Right))
}

fn row_has_target(map: &Board, r: u8) -> bool {
    (0..map.cols()).any(|c| map.is_target(Pos::new(r, c)))
}

fn col_has_target(map: &Board, c: u8) -> bool {
    (0..map.rows()).any(|r| map.is_target(Pos::new(r, c)))
}
