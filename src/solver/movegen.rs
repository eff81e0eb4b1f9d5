use crate::data::{Dir, Pos};
use crate::map::{Board, MapCell};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone)]
pub(crate) struct MoveOutcome {
    pub(crate) mover: Pos,
    pub(crate) boxes: Vec<Pos>,
    pub(crate) is_push: bool,
}

/// Whether the mover can execute a move in `dir` and what comes out of it.
///
/// The mover walks onto any non-wall cell freely. A box-occupied cell can
/// only be entered by pushing the box one cell further: that fails if the
/// push target is a wall, holds another box or is a known-dead position.
/// Dead positions never block plain walking.
pub(crate) fn try_move(
    map: &Board,
    dead: &Vec2d<bool>,
    mover: Pos,
    boxes: &[Pos],
    dir: Dir,
) -> Option<MoveOutcome> {
    let dest = mover + dir;

    if let Some(box_index) = boxes.iter().position(|&b| b == dest) {
        let push_dest = dest + dir;
        if map.cell(push_dest) == MapCell::Wall {
            return None;
        }
        if boxes.contains(&push_dest) {
            return None;
        }
        if dead[push_dest] {
            return None;
        }

        let mut new_boxes = boxes.to_vec();
        new_boxes[box_index] = push_dest;
        Some(MoveOutcome {
            mover: dest,
            boxes: new_boxes,
            is_push: true,
        })
    } else if map.cell(dest) == MapCell::Wall {
        None
    } else {
        Some(MoveOutcome {
            mover: dest,
            boxes: boxes.to_vec(),
            is_push: false,
        })
    }
}
