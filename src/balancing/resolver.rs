//! Majority owner resolution.
//!
//! Scans the tally once, in encounter order:
//!
//! | State | count > max | count == max | count < max |
//! |-------|-------------|--------------|-------------|
//! | Scanning | Unique | - | - |
//! | Unique | Unique (new owner) | Tie | stay |
//! | Tie | Unique (new owner) | Tie | stay |
//!
//! A strictly greater count replaces the owner and clears the tie.
//! Only the final state matters: `Unique` yields its owner, anything
//! else yields no owner.

use crate::models::{AgentId, Tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Scanning,
    Unique { owner: AgentId, max: usize },
    Tie { max: usize },
}

impl Resolution {
    fn max(self) -> usize {
        match self {
            Resolution::Scanning => 0,
            Resolution::Unique { max, .. } | Resolution::Tie { max } => max,
        }
    }

    fn step(self, agent_id: AgentId, count: usize) -> Self {
        let max = self.max();
        if count > max {
            Resolution::Unique {
                owner: agent_id,
                max: count,
            }
        } else if count == max && max > 0 {
            Resolution::Tie { max }
        } else {
            self
        }
    }
}

/// Returns the agent holding a strict maximum count, or `None` on a tie
/// or an empty tally.
pub fn resolve_owner(tally: &Tally) -> Option<AgentId> {
    let end = tally
        .iter()
        .fold(Resolution::Scanning, |state, e| state.step(e.agent_id, e.count));

    match end {
        Resolution::Unique { owner, .. } => Some(owner),
        Resolution::Scanning | Resolution::Tie { .. } => None,
    }
}
