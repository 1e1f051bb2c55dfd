//! Score-based customer balancing.
//!
//! Each stage depends only on the previous one:
//!
//! | Stage | Function |
//! |-------|----------|
//! | Availability filter | [`filter_available`] |
//! | Sorter | [`sort_agents_by_score`], [`sort_customers_by_score`] |
//! | Distributor | [`distribute`] |
//! | Tie resolver | [`resolve_owner`] |
//!
//! [`Balancer`] runs validation plus all stages; [`compute_balanced_owner`]
//! is the sentinel-returning entry point.
//!
//! # Usage
//!
//! ```
//! use u_balance::balancing::{distribute, resolve_owner, sort_agents_by_score, sort_customers_by_score};
//! use u_balance::{Agent, Customer};
//!
//! let agents = sort_agents_by_score(vec![Agent::new(1, 60), Agent::new(3, 95)]);
//! let customers = sort_customers_by_score(&[Customer::new(90), Customer::new(10)]);
//!
//! let dist = distribute(&agents, &customers);
//! assert_eq!(resolve_owner(&dist.tally), None); // 1 each
//! ```

mod balancer;
mod distributor;
mod filter;
mod report;
mod resolver;
mod sorter;

pub use balancer::{compute_balanced_owner, BalanceOutcome, Balancer};
pub(crate) use balancer::owner_or_zero;
pub use distributor::{distribute, Distribution};
pub use filter::filter_available;
pub use report::BalanceReport;
pub use resolver::resolve_owner;
pub use sorter::{sort_agents_by_score, sort_customers_by_score};
