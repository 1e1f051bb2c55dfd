//! Property tests for the balancing pipeline.

use proptest::prelude::*;
use u_balance::balancing::{
    distribute, filter_available, sort_agents_by_score, sort_customers_by_score,
};
use u_balance::{compute_balanced_owner, Agent, AgentId, Balancer, Customer};

/// Agents with ids 1..=n and arbitrary in-domain scores.
fn agent_pool() -> impl Strategy<Value = Vec<Agent>> {
    prop::collection::vec(1u32..10_000, 1..60).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| Agent::new(i as u32 + 1, s))
            .collect()
    })
}

fn customer_list() -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec(1u32..12_000, 1..300)
        .prop_map(|scores| scores.into_iter().map(Customer::new).collect())
}

/// Pool plus a valid absence set (at most ⌊n/2⌋ of its ids).
fn pool_with_away() -> impl Strategy<Value = (Vec<Agent>, Vec<AgentId>)> {
    agent_pool().prop_flat_map(|agents| {
        let ids: Vec<AgentId> = agents.iter().map(|a| a.id).collect();
        let max_away = agents.len() / 2;
        (
            Just(agents),
            prop::sample::subsequence(ids, 0..=max_away),
        )
    })
}

/// Reference O(n·m) assignment; only unambiguous with distinct agent scores.
fn naive_count(agents: &[Agent], customers: &[Customer], agent_id: AgentId) -> usize {
    customers
        .iter()
        .filter(|c| {
            agents
                .iter()
                .filter(|a| a.score >= c.score)
                .min_by_key(|a| a.score)
                .is_some_and(|a| a.id == agent_id)
        })
        .count()
}

proptest! {
    #[test]
    fn owner_is_zero_or_known_agent(
        (agents, away) in pool_with_away(),
        customers in customer_list(),
    ) {
        let owner = compute_balanced_owner(&agents, &customers, &away);
        prop_assert!(owner == 0 || agents.iter().any(|a| a.id == owner));
    }

    #[test]
    fn away_agent_never_wins(
        (agents, away) in pool_with_away(),
        customers in customer_list(),
    ) {
        let owner = compute_balanced_owner(&agents, &customers, &away);
        prop_assert!(!away.contains(&owner));
    }

    #[test]
    fn repeated_calls_agree(
        (agents, away) in pool_with_away(),
        customers in customer_list(),
    ) {
        let first = compute_balanced_owner(&agents, &customers, &away);
        let second = compute_balanced_owner(&agents, &customers, &away);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn cursor_advances_at_most_once_per_agent(
        agents in agent_pool(),
        customers in customer_list(),
    ) {
        let dist = distribute(
            &sort_agents_by_score(agents.clone()),
            &sort_customers_by_score(&customers),
        );
        prop_assert!(dist.cursor_steps <= agents.len());
        prop_assert_eq!(dist.assigned() + dist.unassigned, customers.len());
    }

    #[test]
    fn sweep_matches_naive_scan(
        scores in prop::collection::hash_set(1u32..10_000, 1..40),
        customers in customer_list(),
    ) {
        let agents: Vec<Agent> = scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| Agent::new(i as u32 + 1, s))
            .collect();
        let dist = distribute(
            &sort_agents_by_score(agents.clone()),
            &sort_customers_by_score(&customers),
        );
        for agent in &agents {
            prop_assert_eq!(dist.tally.count(agent.id), naive_count(&agents, &customers, agent.id));
        }
    }

    #[test]
    fn absence_limit_is_half_the_pool(
        agents in agent_pool(),
        customers in customer_list(),
    ) {
        let ids: Vec<AgentId> = agents.iter().map(|a| a.id).collect();
        let limit = agents.len() / 2;
        let balancer = Balancer::new();

        prop_assert!(balancer.balance(&agents, &customers, &ids[..limit]).is_ok());
        if limit < ids.len() {
            prop_assert!(balancer.balance(&agents, &customers, &ids[..=limit]).is_err());
            prop_assert_eq!(compute_balanced_owner(&agents, &customers, &ids[..=limit]), 0);
        }
    }

    #[test]
    fn filter_keeps_order_and_drops_away(
        (agents, away) in pool_with_away(),
    ) {
        let available = filter_available(&agents, &away);
        prop_assert_eq!(available.len(), agents.len() - away.len());
        prop_assert!(available.iter().all(|a| !away.contains(&a.id)));
        let positions: Vec<usize> = available
            .iter()
            .filter_map(|a| agents.iter().position(|b| b.id == a.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
