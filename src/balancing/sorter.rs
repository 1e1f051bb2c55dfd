//! Score ordering for agents and customers.
//!
//! Both sorts are ascending by score and **unstable**: the relative order
//! of equal-score entries is implementation-defined. For agents this can
//! decide which of two equal-score agents receives a customer, so callers
//! must not rely on a particular tie order.

use crate::models::{Agent, Customer};

/// Sorts an owned agent list ascending by score.
pub fn sort_agents_by_score(mut agents: Vec<Agent>) -> Vec<Agent> {
    agents.sort_unstable_by_key(|a| a.score);
    agents
}

/// Returns a copy of `customers` sorted ascending by score.
///
/// The caller's slice is not reordered.
pub fn sort_customers_by_score(customers: &[Customer]) -> Vec<Customer> {
    let mut sorted = customers.to_vec();
    sorted.sort_unstable_by_key(|c| c.score);
    sorted
}
