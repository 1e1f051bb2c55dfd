//! Balancing domain models.
//!
//! Provides the data types for a balancing problem and its result.
//! All entities are supplied fresh per computation; only the [`Tally`]
//! is built during the computation.
//!
//! # Domain Mappings
//!
//! | u-balance | Customer Success | Support Desk | Logistics |
//! |-----------|------------------|--------------|-----------|
//! | Agent | Account Manager | Support Engineer | Carrier |
//! | Customer | Account | Ticket | Shipment |
//! | Score | Seniority / Size | Tier / Severity | Capacity / Weight |

mod agent;
mod customer;
mod tally;

pub use agent::{Agent, AgentId};
pub use customer::Customer;
pub use tally::{Tally, TallyEntry};
