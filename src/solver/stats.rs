use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

/// Counters of one search run, most of them broken down by depth.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    max_fringe: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// Boards popped after another board with the same state was already expanded.
    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub fn max_fringe_size(&self) -> usize {
        self.max_fringe
    }

    /// Deepest depth at which a board was expanded.
    pub fn deepest_expanded(&self) -> Option<usize> {
        self.expanded_states.len().checked_sub(1)
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn update_fringe(&mut self, len: usize) {
        if len > self.max_fringe {
            self.max_fringe = len;
        }
    }

    /// Returns true if this is the first board at `depth`.
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because depths can be skipped when there are no duplicates at some of them
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "max fringe size: {}", self.max_fringe.separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let created = self.total_created();
        let expanded = self.total_expanded();
        let duplicates = self.total_reached_duplicates();
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States expanded total: {}", expanded.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(
            f,
            "Created but not reached total: {}",
            (created - expanded - duplicates).separated_string()
        )?;
        writeln!(f, "Max fringe size: {}", self.max_fringe.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates", "Unknown (not reached)"
        )?;
        // created_states is the longest - nothing is expanded or reached deeper than it's created
        for (depth, &created) in self.created_states.iter().enumerate() {
            let expanded = self.expanded_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
                (created - expanded - duplicates).separated_string()
            )?;
        }
        Ok(())
    }
}
