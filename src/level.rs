use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Pos;
use crate::map::Board;

/// A parsed puzzle - the static board plus the initial mover and box
/// positions. Everything downstream of the parser works with this.
#[derive(Clone)]
pub struct Level {
    pub map: Board,
    pub mover: Pos,
    pub boxes: Vec<Pos>,
}

impl Level {
    pub(crate) fn new(map: Board, mover: Pos, boxes: Vec<Pos>) -> Self {
        Level { map, mover, boxes }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.write_with_state(self.mover, &self.boxes, f)
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
