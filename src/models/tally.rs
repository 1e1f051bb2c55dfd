//! Assignment tally.
//!
//! Maps agent ids to the number of customers they received during one
//! computation. Entries are kept in encounter order because owner
//! resolution is order-sensitive: which of two equal counts is seen first
//! decides whether a tie is flagged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::AgentId;

/// One tally row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// Agent that received customers.
    pub agent_id: AgentId,
    /// Number of customers assigned (always ≥ 1).
    pub count: usize,
}

/// Ordered agent → count mapping.
///
/// Only agents with at least one customer have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TallyEntry>", into = "Vec<TallyEntry>")]
pub struct Tally {
    entries: Vec<TallyEntry>,
    index: HashMap<AgentId, usize>,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one customer to `agent_id`, creating the entry at 1 if absent.
    pub fn increment(&mut self, agent_id: AgentId) {
        match self.index.get(&agent_id) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(agent_id, self.entries.len());
                self.entries.push(TallyEntry { agent_id, count: 1 });
            }
        }
    }

    /// Customers assigned to `agent_id` (0 if it has no entry).
    pub fn count(&self, agent_id: AgentId) -> usize {
        self.index
            .get(&agent_id)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Iterates entries in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.entries.iter()
    }

    /// Number of agents with at least one customer.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no customer was assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total assigned customers across all agents.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Largest single count (0 when empty).
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }
}

impl From<Vec<TallyEntry>> for Tally {
    fn from(rows: Vec<TallyEntry>) -> Self {
        let mut tally = Tally::new();
        for row in rows.into_iter().filter(|r| r.count > 0) {
            match tally.index.get(&row.agent_id) {
                Some(&pos) => tally.entries[pos].count += row.count,
                None => {
                    tally.index.insert(row.agent_id, tally.entries.len());
                    tally.entries.push(row);
                }
            }
        }
        tally
    }
}

impl From<Tally> for Vec<TallyEntry> {
    fn from(tally: Tally) -> Self {
        tally.entries
    }
}
