use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counts states per search depth. Mostly useful to see where a level's
/// state space blows up.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created(&mut self, depth: u16) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u16) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u16) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true the first time a depth is seen.
    fn add(counts: &mut Vec<i32>, depth: u16) -> bool {
        let mut ret = false;

        while usize::from(depth) >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[usize::from(depth)] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique states visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f)?;

        writeln!(f, "Depth          Created        Unique         Duplicates")?;
        for i in 0..self.created_states.len() {
            let depth = format!("{}:", i);
            let visited = if i < self.visited_states.len() {
                self.visited_states[i]
            } else {
                0
            };
            let duplicates = if i < self.duplicate_states.len() {
                self.duplicate_states[i]
            } else {
                0
            };
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}",
                depth,
                self.created_states[i].separated_string(),
                visited.separated_string(),
                duplicates.separated_string()
            )?;
        }
        Ok(())
    }
}
