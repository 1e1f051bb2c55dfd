//! Dynamic (JSON) input boundary.
//!
//! Typed slices cannot be malformed, so the structural checks live here:
//! a parameter that is not an array, or an entry without a numeric
//! `id`/`score`, is a [`ValidationErrorKind::Shape`] error. Numbers that
//! do not fit the typed fields (negative or oversized) are
//! [`ValidationErrorKind::Range`] errors.
//!
//! Away entries are never rejected here. An entry that cannot name an
//! agent (a string, a negative number) still counts toward the absence
//! limit but matches nobody.
//!
//! [`ValidationErrorKind::Shape`]: crate::validation::ValidationErrorKind::Shape
//! [`ValidationErrorKind::Range`]: crate::validation::ValidationErrorKind::Range

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::balancing::{owner_or_zero, Balancer};
use crate::models::{Agent, AgentId, Customer};
use crate::validation::ValidationError;

/// Placeholder for away entries that cannot name an agent. Never a valid id.
const UNMATCHED_AWAY_ID: AgentId = 0;

/// Typed input for one balancing computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Agent pool.
    pub agents: Vec<Agent>,
    /// Customers to distribute.
    pub customers: Vec<Customer>,
    /// Ids of agents excluded from this computation.
    #[serde(default)]
    pub away: Vec<AgentId>,
}

impl BalanceRequest {
    /// Creates a request.
    pub fn new(agents: Vec<Agent>, customers: Vec<Customer>) -> Self {
        Self {
            agents,
            customers,
            away: Vec::new(),
        }
    }

    /// Sets the away agent ids.
    pub fn with_away(mut self, away: Vec<AgentId>) -> Self {
        self.away = away;
        self
    }

    /// Runs the request through `balancer`.
    pub fn balance(&self, balancer: &Balancer) -> Result<Option<AgentId>, ValidationError> {
        balancer.balance(&self.agents, &self.customers, &self.away)
    }
}

/// Converts three loosely-typed JSON parameters into a [`BalanceRequest`].
///
/// Bounds are not checked here beyond what the typed fields can hold;
/// run the result through a [`Balancer`] for full validation.
pub fn parse_request(
    agents: &Value,
    customers: &Value,
    away: &Value,
) -> Result<BalanceRequest, ValidationError> {
    let (Some(agents), Some(customers), Some(away)) =
        (agents.as_array(), customers.as_array(), away.as_array())
    else {
        return Err(ValidationError::shape("All parameters must be arrays."));
    };

    let agents = agents
        .iter()
        .map(parse_agent)
        .collect::<Result<Vec<_>, _>>()?;
    let customers = customers
        .iter()
        .map(parse_customer)
        .collect::<Result<Vec<_>, _>>()?;
    let away = away
        .iter()
        .map(|v| {
            integer(v)
                .and_then(|i| u32::try_from(i).ok())
                .unwrap_or(UNMATCHED_AWAY_ID)
        })
        .collect();

    Ok(BalanceRequest {
        agents,
        customers,
        away,
    })
}

/// Sentinel-returning entry point over JSON values.
///
/// Returns the owner's id, or `0` on a tie, an empty result, or any
/// shape or validation failure (logged at error level).
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use u_balance::input::balance_json;
///
/// let agents = json!([{"id": 1, "score": 60}, {"id": 2, "score": 20}]);
/// let customers = json!([{"id": 1, "score": 50}, {"id": 2, "score": 10}]);
/// assert_eq!(balance_json(&agents, &customers, &json!([2])), 1);
/// assert_eq!(balance_json(&agents, &json!("nope"), &json!([])), 0);
/// ```
pub fn balance_json(agents: &Value, customers: &Value, away: &Value) -> u32 {
    let result = parse_request(agents, customers, away)
        .and_then(|request| request.balance(&Balancer::new()));
    owner_or_zero(result)
}

fn parse_agent(entry: &Value) -> Result<Agent, ValidationError> {
    let obj = entry.as_object().ok_or_else(invalid_format)?;
    Ok(Agent::new(field(obj, "id")?, field(obj, "score")?))
}

fn parse_customer(entry: &Value) -> Result<Customer, ValidationError> {
    let obj = entry.as_object().ok_or_else(invalid_format)?;
    let customer = Customer::new(field(obj, "score")?);
    // Customer ids are informational; keep them only when they are usable.
    Ok(match obj.get("id").and_then(Value::as_u64) {
        Some(id) => customer.with_id(id),
        None => customer,
    })
}

fn field(obj: &Map<String, Value>, key: &str) -> Result<u32, ValidationError> {
    let value = obj
        .get(key)
        .and_then(integer)
        .ok_or_else(invalid_format)?;
    u32::try_from(value).map_err(|_| {
        ValidationError::range(format!("Invalid data format. {key} {value} is out of range"))
    })
}

/// Integral JSON number, saturated to `i64`. `60.0` counts, `60.5` does not.
fn integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}

fn invalid_format() -> ValidationError {
    ValidationError::shape("Invalid data format.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;
    use crate::validation::ValidationErrorKind;
    use serde_json::json;

    fn scenario_agents() -> Value {
        json!([
            {"id": 1, "score": 60},
            {"id": 2, "score": 20},
            {"id": 3, "score": 95},
            {"id": 4, "score": 75}
        ])
    }

    fn scenario_customers() -> Value {
        json!([
            {"id": 1, "score": 90},
            {"id": 2, "score": 20},
            {"id": 3, "score": 70},
            {"id": 4, "score": 40},
            {"id": 5, "score": 60},
            {"id": 6, "score": 10}
        ])
    }

    #[test]
    fn test_balance_json_scenario() {
        assert_eq!(
            balance_json(&scenario_agents(), &scenario_customers(), &json!([2, 4])),
            1
        );
    }

    #[test]
    fn test_non_array_parameter() {
        for (a, c, w) in [
            (json!({}), scenario_customers(), json!([])),
            (scenario_agents(), json!(null), json!([])),
            (scenario_agents(), scenario_customers(), json!(2)),
        ] {
            let err = parse_request(&a, &c, &w).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::Shape);
            assert_eq!(err.message, "All parameters must be arrays.");
            assert_eq!(balance_json(&a, &c, &w), 0);
        }
    }

    #[test]
    fn test_shape_failure_logs_error() {
        let (owner, logs) = capture_logs(|| balance_json(&json!({}), &json!([]), &json!([])));

        assert_eq!(owner, 0);
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("All parameters must be arrays."));
        assert!(logs.contains("kind=Shape"));
    }

    #[test]
    fn test_missing_or_non_numeric_fields() {
        let cases = [
            json!([{"id": 1}]),
            json!([{"id": "1", "score": 10}]),
            json!([null]),
            json!([{"id": 1, "score": 1.5}]),
        ];
        for agents in cases {
            let err = parse_request(&agents, &scenario_customers(), &json!([])).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::Shape);
        }

        let err = parse_request(&scenario_agents(), &json!([{"id": 1}]), &json!([])).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Shape);
    }

    #[test]
    fn test_negative_number_is_range_error() {
        let err = parse_request(
            &json!([{"id": -1, "score": 10}]),
            &scenario_customers(),
            &json!([]),
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::Range);
    }

    #[test]
    fn test_integral_floats_accepted() {
        let req = parse_request(
            &json!([{"id": 1.0, "score": 60.0}]),
            &json!([{"score": 10}]),
            &json!([]),
        )
        .unwrap();
        assert_eq!(req.agents, vec![Agent::new(1, 60)]);
        assert_eq!(req.customers[0].id, None);
    }

    #[test]
    fn test_unusable_away_entries_count_but_match_nobody() {
        let req = parse_request(&scenario_agents(), &scenario_customers(), &json!(["2", -4]))
            .unwrap();
        assert_eq!(req.away, vec![UNMATCHED_AWAY_ID, UNMATCHED_AWAY_ID]);
        // Agent 2 stays available and takes the small customers.
        assert_eq!(req.balance(&Balancer::new()), Ok(None));

        let too_many = json!(["a", "b", "c"]);
        assert_eq!(
            balance_json(&scenario_agents(), &scenario_customers(), &too_many),
            0
        );
    }

    #[test]
    fn test_out_of_domain_is_zero() {
        let agents = json!([{"id": 1000, "score": 10}]);
        assert_eq!(balance_json(&agents, &scenario_customers(), &json!([])), 0);
    }

    #[test]
    fn test_request_deserialize() {
        let req: BalanceRequest = serde_json::from_value(json!({
            "agents": scenario_agents(),
            "customers": scenario_customers(),
        }))
        .unwrap();
        assert!(req.away.is_empty());
        assert_eq!(req.with_away(vec![2, 4]).balance(&Balancer::new()), Ok(Some(1)));
    }

    #[test]
    fn test_request_builder() {
        let req = BalanceRequest::new(vec![Agent::new(1, 10)], vec![Customer::new(5)]);
        assert_eq!(req.balance(&Balancer::new()), Ok(Some(1)));
    }
}
