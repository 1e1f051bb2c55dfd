//! Input validation for balancing problems.
//!
//! Checks the bounded-domain contract before any computation runs.
//! Checks run in a fixed order and the first failing one is reported:
//! 1. Every agent has an id and a score within bounds
//! 2. Every customer has a score within bounds
//! 3. Agent count within `1..=max_agents`
//! 4. Customer count within `1..=max_customers`
//! 5. Absence set no larger than ⌊agent count / 2⌋
//!
//! Structural checks ("is this a sequence", "does this entry have a
//! numeric score") only make sense for dynamic input and live in
//! [`crate::input`]; they report [`ValidationErrorKind::Shape`].
//!
//! Agent id uniqueness is assumed, not checked. Duplicate ids merge
//! into one tally entry.

use thiserror::Error;

use crate::config::BalanceLimits;
use crate::models::{Agent, AgentId, Customer};

/// Validation result.
pub type ValidationResult = Result<(), ValidationError>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A parameter is not a sequence, or an entry lacks a numeric field.
    Shape,
    /// A count, id, or score falls outside its bound.
    Range,
    /// The absence set is larger than half the agent pool.
    AwayCount,
    /// The configured [`BalanceLimits`] are themselves unusable.
    Limits,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::Shape, message)
    }

    pub(crate) fn range(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::Range, message)
    }

    pub(crate) fn limits(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::Limits, message)
    }
}

/// Validates the inputs of one balancing computation.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(error)` describing the first failure.
pub fn validate_input(
    agents: &[Agent],
    customers: &[Customer],
    away: &[AgentId],
    limits: &BalanceLimits,
) -> ValidationResult {
    if let Some(agent) = agents.iter().find(|a| !is_valid_agent(a, limits)) {
        return Err(ValidationError::range(format!(
            "Invalid data format. Agent {} with score {} is outside 1..={} / 1..={}",
            agent.id, agent.score, limits.max_agent_id, limits.max_agent_score
        )));
    }

    if let Some(customer) = customers.iter().find(|c| !is_valid_customer(c, limits)) {
        return Err(ValidationError::range(format!(
            "Invalid data format. Customer score {} is outside 1..={}",
            customer.score, limits.max_customer_score
        )));
    }

    let n = agents.len();
    let m = customers.len();
    let t = away.len();

    if n == 0 || n > limits.max_agents {
        return Err(ValidationError::range(format!(
            "Number of agents must be between 1 and {}. Found: {n}",
            limits.max_agents
        )));
    }
    if m == 0 || m > limits.max_customers {
        return Err(ValidationError::range(format!(
            "Number of customers must be between 1 and {}. Found: {m}",
            limits.max_customers
        )));
    }

    let max_away = BalanceLimits::max_away(n);
    if t > max_away {
        return Err(ValidationError::new(
            ValidationErrorKind::AwayCount,
            format!("Number of agents away cannot exceed {max_away}. Found: {t}"),
        ));
    }

    Ok(())
}

fn is_valid_agent(agent: &Agent, limits: &BalanceLimits) -> bool {
    (1..=limits.max_agent_id).contains(&agent.id)
        && (1..=limits.max_agent_score).contains(&agent.score)
}

fn is_valid_customer(customer: &Customer, limits: &BalanceLimits) -> bool {
    (1..=limits.max_customer_score).contains(&customer.score)
}
