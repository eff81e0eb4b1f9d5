use crate::map::Board;
use crate::solver::deadlock::Deadlocks;
use crate::state::State;

/// A validated level ready for search - capacity limits hold, the border
/// is closed and the initial state is already encoded.
#[derive(Debug, Clone)]
pub(crate) struct SolverLevel {
    pub(crate) map: Board,
    pub(crate) initial: State,
    pub(crate) deadlocks: Deadlocks,
}

impl SolverLevel {
    pub(crate) fn new(map: Board, initial: State) -> Self {
        let deadlocks = Deadlocks::new(&map);
        SolverLevel {
            map,
            initial,
            deadlocks,
        }
    }
}
