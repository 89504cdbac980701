//! Order validation stages and the chains built from them

use super::model::{Order, bad_quantity, invalid_status, whole_quantity};
use super::status::OrderStatus;
use crate::core::error::ValidationError;
use crate::core::payload::has_truthy;
use crate::core::validation::validators::id_matches_route;
use crate::core::validation::{StageResult, Submission, ValidationChain};
use serde_json::Value;

/// Stage: `dishes` is a non-empty array whose every element has an integer
/// quantity of at least 1. Reports the first offending index only.
pub fn order_lines() -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    |submission: &Submission<'_>| {
        let Some(Value::Array(lines)) = submission.payload.get("dishes") else {
            return Err(ValidationError::rule("dishes must be of type array"));
        };

        if lines.is_empty() {
            return Err(ValidationError::rule("dishes must not be empty"));
        }

        match lines.iter().position(|line| !has_valid_quantity(line)) {
            Some(index) => Err(bad_quantity(index)),
            None => Ok(()),
        }
    }
}

fn has_valid_quantity(line: &Value) -> bool {
    line.get("quantity").and_then(whole_quantity).is_some()
}

/// Stage: `status` is present and names one of the four statuses
pub fn status_is_valid() -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    |submission: &Submission<'_>| {
        let valid = has_truthy(submission.payload, "status")
            && submission
                .payload
                .get("status")
                .and_then(Value::as_str)
                .is_some_and(|s| s.parse::<OrderStatus>().is_ok());

        if valid { Ok(()) } else { Err(invalid_status()) }
    }
}

/// Stage: the submitted status is not `delivered`
///
/// This looks at the incoming payload, not the stored order, so an update
/// that moves an order to `delivered` is itself refused.
pub fn status_not_delivered() -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    |submission: &Submission<'_>| {
        let delivered = submission
            .payload
            .get("status")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<OrderStatus>().ok())
            .is_some_and(|status| status.is_terminal());

        if delivered {
            Err(ValidationError::rule("A delivered order cannot be changed"))
        } else {
            Ok(())
        }
    }
}

/// Deletion guard; inspects the stored order
pub fn ensure_deletable(order: &Order) -> StageResult {
    if order.status.is_deletable() {
        Ok(())
    } else {
        Err(ValidationError::rule(
            "An order cannot be deleted unless it is pending",
        ))
    }
}

/// Chain run before an order is created
pub fn create_chain() -> ValidationChain {
    ValidationChain::new("order:create")
        .require("deliverTo")
        .require("mobileNumber")
        .require("dishes")
        .stage("dishes", order_lines())
}

/// Chain run before an existing order is overwritten
pub fn update_chain() -> ValidationChain {
    ValidationChain::new("order:update")
        .require("deliverTo")
        .require("mobileNumber")
        .require("dishes")
        .require("status")
        .stage("dishes", order_lines())
        .stage("id", id_matches_route("Order"))
        .stage("status", status_is_valid())
        .stage("status:terminal", status_not_delivered())
}
