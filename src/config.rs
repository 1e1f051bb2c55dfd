//! Input bounds for balancing.
//!
//! The defaults reproduce the documented domain exactly. Custom limits
//! exist for callers that run the same algorithm over a wider domain;
//! the sentinel-returning entry points always use [`BalanceLimits::default`].

use serde::{Deserialize, Serialize};

/// Inclusive upper bounds enforced by [`validate_input`](crate::validation::validate_input).
///
/// All lower bounds are 1 (ids, scores, and counts must be positive).
///
/// # Examples
///
/// ```
/// use u_balance::BalanceLimits;
///
/// let limits = BalanceLimits::default()
///     .with_max_agents(50)
///     .with_max_customers(10_000);
/// assert!(limits.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceLimits {
    /// Largest valid agent id.
    pub max_agent_id: u32,
    /// Largest valid agent score.
    pub max_agent_score: u32,
    /// Largest valid customer score.
    pub max_customer_score: u32,
    /// Largest number of agents per computation.
    pub max_agents: usize,
    /// Largest number of customers per computation.
    pub max_customers: usize,
}

impl Default for BalanceLimits {
    fn default() -> Self {
        Self {
            max_agent_id: 999,
            max_agent_score: 9_999,
            max_customer_score: 99_999,
            max_agents: 999,
            max_customers: 999_999,
        }
    }
}

impl BalanceLimits {
    /// Sets the largest valid agent id.
    pub fn with_max_agent_id(mut self, id: u32) -> Self {
        self.max_agent_id = id;
        self
    }

    /// Sets the largest valid agent score.
    pub fn with_max_agent_score(mut self, score: u32) -> Self {
        self.max_agent_score = score;
        self
    }

    /// Sets the largest valid customer score.
    pub fn with_max_customer_score(mut self, score: u32) -> Self {
        self.max_customer_score = score;
        self
    }

    /// Sets the largest agent pool size.
    pub fn with_max_agents(mut self, n: usize) -> Self {
        self.max_agents = n;
        self
    }

    /// Sets the largest customer count.
    pub fn with_max_customers(mut self, n: usize) -> Self {
        self.max_customers = n;
        self
    }

    /// Largest absence set allowed for `agent_count` agents: ⌊n/2⌋.
    #[inline]
    pub fn max_away(agent_count: usize) -> usize {
        agent_count / 2
    }

    /// Validates the limits themselves.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_agent_id == 0 {
            return Err("max_agent_id must be at least 1".into());
        }
        if self.max_agent_score == 0 {
            return Err("max_agent_score must be at least 1".into());
        }
        if self.max_customer_score == 0 {
            return Err("max_customer_score must be at least 1".into());
        }
        if self.max_agents == 0 {
            return Err("max_agents must be at least 1".into());
        }
        if self.max_customers == 0 {
            return Err("max_customers must be at least 1".into());
        }
        Ok(())
    }
}
