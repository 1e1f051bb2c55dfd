//! Agent model.
//!
//! Agents are the entities that receive customers. Each agent has an
//! identifier and a score; an agent can serve any customer whose score
//! does not exceed its own.

use serde::{Deserialize, Serialize};

/// Agent identifier. Valid ids are positive; `0` is reserved as the
/// "no owner" sentinel of [`compute_balanced_owner`](crate::compute_balanced_owner).
pub type AgentId = u32;

/// A service agent eligible for customer assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier within one computation.
    pub id: AgentId,
    /// Service level. Higher scores can serve larger customers.
    pub score: u32,
}

impl Agent {
    /// Creates a new agent.
    pub fn new(id: AgentId, score: u32) -> Self {
        Self { id, score }
    }

    /// Whether this agent is able to serve a customer with the given score.
    #[inline]
    pub fn can_serve(&self, customer_score: u32) -> bool {
        self.score >= customer_score
    }
}
