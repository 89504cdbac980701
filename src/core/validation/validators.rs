//! Reusable validation stages
//!
//! These are shared by the dish and order chains. Each factory returns a
//! stage closure ready to be pushed onto a [`ValidationChain`].
//!
//! [`ValidationChain`]: super::ValidationChain

use crate::core::error::ValidationError;
use crate::core::payload::{display_value, has_truthy, is_truthy};
use crate::core::validation::chain::{StageResult, Submission};

/// Stage: `field` is present with a truthy value
pub fn require(
    field: &'static str,
) -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    move |submission: &Submission<'_>| {
        if has_truthy(submission.payload, field) {
            Ok(())
        } else {
            Err(ValidationError::missing(field))
        }
    }
}

/// Stage: a payload `id`, when given, names the routed record
///
/// A falsy or absent id passes. Any other id must be the route id as a
/// string; `label` prefixes the message ("Order", "Dish").
pub fn id_matches_route(
    label: &'static str,
) -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    move |submission: &Submission<'_>| {
        let Some(id) = submission.payload.get("id").filter(|v| is_truthy(v)) else {
            return Ok(());
        };
        let route_id = submission.route_id.unwrap_or_default();

        if id.as_str() == Some(route_id) {
            Ok(())
        } else {
            Err(ValidationError::rule(format!(
                "{} id {} does not match route id {}",
                label,
                display_value(id),
                route_id
            )))
        }
    }
}
