//! Availability filter.

use std::collections::HashSet;

use crate::models::{Agent, AgentId};

/// Returns the agents whose id is not in `away`.
///
/// Input order is preserved and the input slice is left untouched.
/// Away ids that match no agent are ignored.
pub fn filter_available(agents: &[Agent], away: &[AgentId]) -> Vec<Agent> {
    let away: HashSet<AgentId> = away.iter().copied().collect();
    agents
        .iter()
        .filter(|a| !away.contains(&a.id))
        .copied()
        .collect()
}
