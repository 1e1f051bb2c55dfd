//! Customer model.

use serde::{Deserialize, Serialize};

/// A customer to be assigned to at most one agent.
///
/// Only the score takes part in balancing. The optional id is carried
/// through for callers that want to correlate results with their records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-side identifier (unused by the algorithm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Customer size. Must not exceed the serving agent's score.
    pub score: u32,
}

impl Customer {
    /// Creates an anonymous customer.
    pub fn new(score: u32) -> Self {
        Self { id: None, score }
    }

    /// Sets the caller-side identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
