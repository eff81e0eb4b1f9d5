pub(crate) mod deadlock;
mod level;
mod movegen;
mod stats;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::data::{Pos, DIRECTIONS, MAX_BOXES, MAX_CELLS};
use crate::level::Level;
use crate::map::{Board, MapCell};
use crate::moves::{Move, Moves};
use crate::state::{EncodeErr, State};
use crate::Solve;

use self::level::SolverLevel;
pub use self::stats::Stats;

/// Capacity violations - hard failures, unlike unsolvable levels which are
/// a normal outcome. Truncating instead would corrupt the encode/decode
/// round-trip the search depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    TooManyBoxes(usize),
    TooManyCells(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::TooManyBoxes(cnt) => {
                write!(f, "{} boxes - the state encoding fits at most {}", cnt, MAX_BOXES)
            }
            SolverErr::TooManyCells(cnt) => write!(
                f,
                "{} cells - positions fit 8 bits so the map can have at most {}",
                cnt, MAX_CELLS
            ),
        }
    }
}

impl Error for SolverErr {}

impl From<EncodeErr> for SolverErr {
    fn from(err: EncodeErr) -> Self {
        match err {
            EncodeErr::TooManyBoxes(cnt) => SolverErr::TooManyBoxes(cnt),
        }
    }
}

pub struct SolverOk {
    /// `None` means proven unsolvable - either rejected before search or
    /// the whole reachable state space was exhausted.
    pub moves: Option<Moves>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(moves: Option<Moves>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "Moves: {}", moves.move_cnt())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, print_status)
    }
}

fn solve(level: &Level, print_status: bool) -> Result<SolverOk, SolverErr> {
    debug!("Validating level...");
    let solver_level = match process_level(level)? {
        Some(solver_level) => solver_level,
        None => {
            debug!("Level is provably unsolvable, skipping search");
            return Ok(SolverOk::new(None, Stats::new()));
        }
    };
    debug!("Level is valid");
    Ok(search(solver_level, print_status))
}

/// Checks everything the search assumes so it can omit the checks later.
///
/// `Err` is a capacity violation. `Ok(None)` means the level is provably
/// unsolvable without searching: broken border, more boxes than targets or
/// a box already stuck in a corner off-target.
fn process_level(level: &Level) -> Result<Option<SolverLevel>, SolverErr> {
    let map = &level.map;

    let cells = usize::from(map.rows()) * usize::from(map.cols());
    if cells > MAX_CELLS {
        return Err(SolverErr::TooManyCells(cells));
    }
    if level.boxes.len() > MAX_BOXES {
        return Err(SolverErr::TooManyBoxes(level.boxes.len()));
    }

    // the whole border must be wall - everything else only needs bounds
    // checks because of this, and it makes linear position 0 a wall which
    // the zero-means-empty-slot encoding relies on
    for r in 0..map.rows() {
        for c in 0..map.cols() {
            let on_border = r == 0 || r == map.rows() - 1 || c == 0 || c == map.cols() - 1;
            if on_border && map.cell(Pos::new(r, c)) != MapCell::Wall {
                return Ok(None);
            }
        }
    }

    if level.boxes.len() > map.target_cnt() {
        return Ok(None);
    }

    // a box born into a corner off-target can never be pushed again
    for &box_pos in &level.boxes {
        if deadlock::corner_trapped(map, box_pos) && !map.is_target(box_pos) {
            return Ok(None);
        }
    }

    let box_indices: Vec<u8> = level.boxes.iter().map(|&b| map.index(b)).collect();
    let initial = State::encode(map.index(level.mover), &box_indices)?;
    Ok(Some(SolverLevel::new(map.clone(), initial)))
}

/// Plain breadth-first search - every move costs 1 so the first time the
/// goal is dequeued the path to it is shortest in move count.
fn search(mut level: SolverLevel, print_status: bool) -> SolverOk {
    debug!("Search called");

    let mut stats = Stats::new();
    let mut prevs: FnvHashMap<State, Option<(State, Move)>> = FnvHashMap::default();
    let mut to_visit = VecDeque::new();

    stats.add_created(0);
    prevs.insert(level.initial, None);
    to_visit.push_back((level.initial, 0u16));

    while let Some((cur, depth)) = to_visit.pop_front() {
        if stats.add_unique_visited(depth) && print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", stats);
        }

        if solved(&level.map, cur) {
            debug!("Solved, backtracking moves");
            return SolverOk::new(Some(backtrack_moves(&prevs, cur)), stats);
        }

        let mover = level.map.pos(cur.mover());
        let boxes: Vec<Pos> = cur.boxes().iter().map(|&b| level.map.pos(b)).collect();

        for &dir in &DIRECTIONS {
            let outcome =
                match movegen::try_move(&level.map, level.deadlocks.dead(), mover, &boxes, dir) {
                    Some(outcome) => outcome,
                    None => continue,
                };
            if level.deadlocks.is_dead(&level.map, &outcome.boxes) {
                continue;
            }

            let box_indices: Vec<u8> =
                outcome.boxes.iter().map(|&b| level.map.index(b)).collect();
            let new_state = State::encode(level.map.index(outcome.mover), &box_indices)
                .expect("box count was validated before search");

            stats.add_created(depth + 1);
            if prevs.contains_key(&new_state) {
                // re-arrival means an equal or longer path - first writer wins
                stats.add_reached_duplicate(depth + 1);
                continue;
            }

            prevs.insert(new_state, Some((cur, Move::new(dir, outcome.is_push))));
            to_visit.push_back((new_state, depth + 1));
        }
    }

    debug!("Frontier exhausted");
    SolverOk::new(None, stats)
}

/// Every box sits on a target. Zero boxes is trivially solved.
fn solved(map: &Board, state: State) -> bool {
    let boxes = state.boxes();
    let on_target = boxes.iter().filter(|&&b| map.is_target(map.pos(b))).count();
    on_target == boxes.len()
}

fn backtrack_moves(prevs: &FnvHashMap<State, Option<(State, Move)>>, final_state: State) -> Moves {
    let mut moves = Vec::new();
    let mut cur = final_state;
    while let Some((prev, mov)) = prevs[&cur] {
        moves.push(mov);
        cur = prev;
    }
    moves.reverse();
    Moves::new(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(map: &str) -> Level {
        map.parse().unwrap()
    }

    /// Replays a solution move by move and checks it ends on the goal.
    fn assert_replays_to_goal(level: &Level, moves: &Moves) {
        let deadlocks = deadlock::Deadlocks::new(&level.map);
        let mut mover = level.mover;
        let mut boxes = level.boxes.clone();
        for mov in moves {
            let outcome =
                movegen::try_move(&level.map, deadlocks.dead(), mover, &boxes, mov.dir)
                    .expect("solution contains an illegal move");
            mover = outcome.mover;
            boxes = outcome.boxes;
        }
        assert!(boxes.iter().all(|&b| level.map.is_target(b)));
    }

    #[test]
    fn goal_predicate() {
        let level = parse(
            "
######
#S...#
#.RR.#
#.TT.#
######
",
        );
        let map = &level.map;
        let to_indices =
            |positions: &[Pos]| positions.iter().map(|&p| map.index(p)).collect::<Vec<_>>();

        let all_on = State::encode(map.index(level.mover), &to_indices(&level.boxes)).unwrap();
        assert!(solved(map, all_on));

        // moving any one box off its target breaks the goal
        let partly_off = State::encode(
            map.index(level.mover),
            &to_indices(&[Pos::new(2, 2), Pos::new(1, 3)]),
        )
        .unwrap();
        assert!(!solved(map, partly_off));

        let no_boxes = State::encode(map.index(level.mover), &[]).unwrap();
        assert!(solved(map, no_boxes));
    }

    #[test]
    fn single_push() {
        let level = parse(
            "
#####
#S..#
#B..#
#T..#
#####
",
        );
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.to_string(), "D");
        assert_eq!(moves.push_cnt(), 1);
        assert_replays_to_goal(&level, &moves);
    }

    #[test]
    fn two_boxes_shortest() {
        // hand-verified minimum: push the left box down, walk over,
        // push the right box down - 5 moves, no shorter ordering exists
        let level = parse(
            "
######
#S...#
#B.B.#
#T.T.#
######
",
        );
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.move_cnt(), 5);
        assert_eq!(moves.push_cnt(), 2);
        assert_replays_to_goal(&level, &moves);
    }

    #[test]
    fn walk_around_to_push() {
        let level = parse(
            "
#####
#S..#
#.B.#
#T..#
#####
",
        );
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.move_cnt(), 5);
        assert_replays_to_goal(&level, &moves);
    }

    #[test]
    fn more_boxes_than_targets() {
        let level = parse(
            "
######
#S.B.#
#.B.T#
######
",
        );
        let solution = level.solve(false).unwrap();
        assert!(solution.moves.is_none());
        // rejected before any state was created
        assert_eq!(solution.stats.total_created(), 0);
    }

    #[test]
    fn incomplete_border() {
        let level = parse(
            "
##.##
#S.B#
#..T#
#####
",
        );
        let solution = level.solve(false).unwrap();
        assert!(solution.moves.is_none());
        assert_eq!(solution.stats.total_created(), 0);
    }

    #[test]
    fn box_born_in_corner() {
        let level = parse(
            "
#####
#S.B#
#..T#
#####
",
        );
        let solution = level.solve(false).unwrap();
        assert!(solution.moves.is_none());
        assert_eq!(solution.stats.total_created(), 0);
    }

    #[test]
    fn box_born_in_corner_on_target_is_searched() {
        let level = parse(
            "
#####
#S.R#
#...#
#####
",
        );
        let solution = level.solve(false).unwrap();
        // already solved - empty move sequence, not a rejection
        assert_eq!(solution.moves.unwrap().move_cnt(), 0);
    }

    #[test]
    fn edge_row_without_target_is_unsolvable() {
        // the box can only ever slide along the top row which has no
        // target - deadlock pruning cuts the search off immediately
        let level = parse(
            "
#######
#S.B..#
#.....#
#....T#
#######
",
        );
        let solution = level.solve(false).unwrap();
        assert!(solution.moves.is_none());
        assert!(solution.stats.total_created() > 0);
    }

    #[test]
    fn too_many_boxes() {
        let level = parse(
            "
############
#S.BBBBBBBB#
#..TTTTTTTT#
############
",
        );
        assert_eq!(level.solve(false).unwrap_err(), SolverErr::TooManyBoxes(8));
    }

    #[test]
    fn too_many_cells() {
        let mut map = String::new();
        for r in 0..17 {
            for _ in 0..17 {
                map.push('#');
            }
            if r == 0 {
                map.push('\n');
                map.push_str("#S..............#");
            }
            map.push('\n');
        }
        let level = parse(&map);
        assert_eq!(
            level.solve(false).unwrap_err(),
            SolverErr::TooManyCells(18 * 17)
        );
    }

    #[test]
    fn direction_tie_break() {
        // mirror-symmetric level: LDR and RDL are both shortest solutions.
        // Left is generated before right so LDR must win.
        let level = parse(
            "
#####
#.S.#
#TBT#
#####
",
        );
        let solution = level.solve(false).unwrap();
        let moves = solution.moves.unwrap();
        assert_eq!(moves.to_string(), "LDR");
        assert_replays_to_goal(&level, &moves);
    }
}
