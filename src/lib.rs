//! Score-based customer balancing for the U-Engine ecosystem.
//!
//! Distributes customers over a pool of agents and names the agent that
//! ends up with a strict majority of them. Each customer goes to the
//! lowest-scoring available agent whose score is at least the customer's
//! score; agents marked away take no customers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Agent`, `Customer`, `Tally`
//! - **`config`**: `BalanceLimits`, the bounded input domain
//! - **`validation`**: Input bound checks (ids, scores, counts, absences)
//! - **`balancing`**: Filter, sorter, cursor sweep, owner resolution,
//!   `Balancer` pipeline and `BalanceReport`
//! - **`input`**: JSON boundary with structural (shape) checks
//!
//! # Example
//!
//! ```
//! use u_balance::{compute_balanced_owner, Agent, Customer};
//!
//! let agents = vec![
//!     Agent::new(1, 60),
//!     Agent::new(2, 20),
//!     Agent::new(3, 95),
//!     Agent::new(4, 75),
//! ];
//! let customers: Vec<Customer> = [90, 20, 70, 40, 60, 10]
//!     .into_iter()
//!     .map(Customer::new)
//!     .collect();
//!
//! assert_eq!(compute_balanced_owner(&agents, &customers, &[2, 4]), 1);
//! ```
//!
//! # Error Handling
//!
//! [`Balancer::balance`] returns `Result<Option<AgentId>, ValidationError>`,
//! keeping "no owner" and "invalid input" apart. [`compute_balanced_owner`]
//! and [`input::balance_json`] collapse both into `0` and log the
//! validation message through `tracing`.

pub mod balancing;
pub mod config;
pub mod input;
pub mod models;
pub mod validation;

pub use balancing::{compute_balanced_owner, BalanceOutcome, BalanceReport, Balancer};
pub use config::BalanceLimits;
pub use models::{Agent, AgentId, Customer, Tally};
pub use validation::{ValidationError, ValidationErrorKind};

#[cfg(test)]
mod test_support;
