//! Balancing summary metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Customers served by some available agent |
//! | Unassigned | Customers above every available agent's score |
//! | Loaded Agents | Agents with at least one customer |
//! | Max Load | Largest per-agent count |
//! | Assignment Rate | assigned / total customers |

use serde::{Deserialize, Serialize};

use super::Distribution;
use crate::models::AgentId;

/// Summary of one balancing computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Customers supplied.
    pub total_customers: usize,
    /// Customers that received an agent.
    pub assigned: usize,
    /// Customers no available agent could serve.
    pub unassigned: usize,
    /// Agents that were not away.
    pub available_agents: usize,
    /// Agents that received at least one customer.
    pub loaded_agents: usize,
    /// Largest number of customers given to one agent.
    pub max_load: usize,
    /// Agent holding the strict maximum, if any.
    pub owner: Option<AgentId>,
}

impl BalanceReport {
    /// Builds a report from a distribution and its resolved owner.
    pub fn calculate(
        distribution: &Distribution,
        available_agents: usize,
        owner: Option<AgentId>,
    ) -> Self {
        let assigned = distribution.assigned();
        Self {
            total_customers: assigned + distribution.unassigned,
            assigned,
            unassigned: distribution.unassigned,
            available_agents,
            loaded_agents: distribution.tally.len(),
            max_load: distribution.tally.max_count(),
            owner,
        }
    }

    /// Fraction of customers served (1.0 when there were none).
    pub fn assignment_rate(&self) -> f64 {
        if self.total_customers == 0 {
            1.0
        } else {
            self.assigned as f64 / self.total_customers as f64
        }
    }

    /// Whether the computation ended without an owner because of a tie.
    pub fn is_tie(&self) -> bool {
        self.owner.is_none() && self.max_load > 0
    }
}
