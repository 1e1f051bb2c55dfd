//! Monotonic cursor distribution.
//!
//! # Algorithm
//!
//! With agents and customers both sorted ascending by score, walk the
//! customers once while a cursor moves forward over the agents:
//!
//! 1. Advance the cursor past every agent whose score is below the
//!    customer's score.
//! 2. If the cursor still points at an agent, that agent (the
//!    lowest-scoring one able to serve) gets the customer.
//! 3. Once the cursor runs off the end, every remaining customer is
//!    unassignable, since their scores are no smaller.
//!
//! # Complexity
//! O(n + m): the cursor never moves backward, so it advances at most
//! n times over the whole sweep.

use serde::{Deserialize, Serialize};

use crate::models::{Agent, Customer, Tally};

/// Result of one distribution sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Customers per agent, in the order agents first received one.
    pub tally: Tally,
    /// Customers no available agent could serve.
    pub unassigned: usize,
    /// Total cursor advancements over the sweep (never exceeds agent count).
    pub cursor_steps: usize,
}

impl Distribution {
    /// Customers that received an agent.
    pub fn assigned(&self) -> usize {
        self.tally.total()
    }
}

/// Distributes sorted customers over sorted agents.
///
/// Both slices must already be ascending by score; see
/// [`sort_agents_by_score`](super::sort_agents_by_score) and
/// [`sort_customers_by_score`](super::sort_customers_by_score).
pub fn distribute(sorted_agents: &[Agent], sorted_customers: &[Customer]) -> Distribution {
    let mut dist = Distribution::default();
    let mut cursor = 0;

    for (served, customer) in sorted_customers.iter().enumerate() {
        while cursor < sorted_agents.len() && !sorted_agents[cursor].can_serve(customer.score) {
            cursor += 1;
            dist.cursor_steps += 1;
        }

        match sorted_agents.get(cursor) {
            Some(agent) => dist.tally.increment(agent.id),
            None => {
                // Pool exhausted: nobody serves this customer or any larger one.
                dist.unassigned = sorted_customers.len() - served;
                break;
            }
        }
    }

    dist
}
