//! Balancing pipeline.
//!
//! # Algorithm
//!
//! 1. Validate inputs against [`BalanceLimits`].
//! 2. Drop away agents.
//! 3. Sort available agents and a copy of the customers by score.
//! 4. Sweep customers over agents with a monotonic cursor.
//! 5. Resolve the agent with a strict maximum count.
//!
//! # Complexity
//! O(n log n + m log m) for sorting, O(n + m) for the sweep.

use tracing::{debug, error};

use super::{
    distribute, filter_available, resolve_owner, sort_agents_by_score, sort_customers_by_score,
    BalanceReport, Distribution,
};
use crate::config::BalanceLimits;
use crate::models::{Agent, AgentId, Customer};
use crate::validation::{validate_input, ValidationError};

/// Full result of one balancing computation.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    /// Agent with a strict majority of assignments, if any.
    pub owner: Option<AgentId>,
    /// Per-agent counts produced by the sweep.
    pub distribution: Distribution,
    /// Summary metrics.
    pub report: BalanceReport,
}

/// Score-based customer balancer.
///
/// Stateless apart from its limits: every call works on copies of its
/// inputs and can run concurrently with other calls.
///
/// # Example
///
/// ```
/// use u_balance::{Agent, Balancer, Customer};
///
/// let agents = vec![Agent::new(1, 60), Agent::new(2, 20), Agent::new(3, 95)];
/// let customers: Vec<Customer> = [90, 20, 70, 40, 60, 10]
///     .into_iter()
///     .map(Customer::new)
///     .collect();
///
/// let owner = Balancer::new().balance(&agents, &customers, &[2]).unwrap();
/// assert_eq!(owner, Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    limits: BalanceLimits,
}

impl Balancer {
    /// Creates a balancer with the default domain limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom limits.
    ///
    /// Limits are checked with [`BalanceLimits::validate`] on every run;
    /// unusable limits fail with [`ValidationErrorKind::Limits`] before any
    /// input is looked at.
    ///
    /// [`ValidationErrorKind::Limits`]: crate::validation::ValidationErrorKind::Limits
    pub fn with_limits(mut self, limits: BalanceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Limits in effect.
    pub fn limits(&self) -> &BalanceLimits {
        &self.limits
    }

    /// Computes the balanced owner.
    ///
    /// Returns `Ok(None)` when no agent received customers or the maximum
    /// is shared, and `Err` when the input violates the limits.
    pub fn balance(
        &self,
        agents: &[Agent],
        customers: &[Customer],
        away: &[AgentId],
    ) -> Result<Option<AgentId>, ValidationError> {
        Ok(self.run(agents, customers, away)?.owner)
    }

    /// Computes the owner together with the distribution and its report.
    pub fn run(
        &self,
        agents: &[Agent],
        customers: &[Customer],
        away: &[AgentId],
    ) -> Result<BalanceOutcome, ValidationError> {
        self.limits.validate().map_err(ValidationError::limits)?;
        validate_input(agents, customers, away, &self.limits)?;

        let available = filter_available(agents, away);
        let available_count = available.len();
        let sorted_agents = sort_agents_by_score(available);
        let sorted_customers = sort_customers_by_score(customers);

        let distribution = distribute(&sorted_agents, &sorted_customers);
        let owner = resolve_owner(&distribution.tally);

        debug!(
            agents = agents.len(),
            available = available_count,
            customers = customers.len(),
            unassigned = distribution.unassigned,
            owner = ?owner,
            "balanced customers"
        );

        let report = BalanceReport::calculate(&distribution, available_count, owner);
        Ok(BalanceOutcome {
            owner,
            distribution,
            report,
        })
    }
}

/// Sentinel-returning entry point: the owner's id, or `0` on a tie, an empty result,
/// or invalid input.
///
/// Never panics. Validation failures are logged at error level; use
/// [`Balancer::balance`] to receive the reason instead.
pub fn compute_balanced_owner(agents: &[Agent], customers: &[Customer], away: &[AgentId]) -> u32 {
    owner_or_zero(Balancer::new().balance(agents, customers, away))
}

pub(crate) fn owner_or_zero(result: Result<Option<AgentId>, ValidationError>) -> u32 {
    match result {
        Ok(owner) => owner.unwrap_or(0),
        Err(e) => {
            error!(kind = ?e.kind, "{}", e.message);
            0
        }
    }
}
