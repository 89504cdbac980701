//! Ordered validation chains
//!
//! A chain is a list of independent stages run in declared order. The first
//! stage that fails ends the run and its error is the only one reported;
//! later stages never see the submission.

use crate::core::error::ValidationError;
use crate::core::payload::Payload;
use crate::core::validation::validators;

/// What a stage gets to look at: the request payload and, for routes that
/// carry one, the target identifier.
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub payload: &'a Payload,
    pub route_id: Option<&'a str>,
}

impl<'a> Submission<'a> {
    /// A submission on a collection route (create)
    pub fn new(payload: &'a Payload) -> Self {
        Self {
            payload,
            route_id: None,
        }
    }

    /// A submission on an item route (update)
    pub fn for_route(payload: &'a Payload, route_id: &'a str) -> Self {
        Self {
            payload,
            route_id: Some(route_id),
        }
    }
}

/// Outcome of a single stage
pub type StageResult = Result<(), ValidationError>;

type StageFn = dyn Fn(&Submission<'_>) -> StageResult + Send + Sync;

struct Stage {
    label: String,
    check: Box<StageFn>,
}

/// An ordered list of validation stages
///
/// # Example
///
/// ```rust,ignore
/// let chain = ValidationChain::new("order:create")
///     .require("deliverTo")
///     .require("mobileNumber")
///     .require("dishes")
///     .stage("dishes", order_lines());
///
/// chain.run(&Submission::new(&payload))?;
/// ```
pub struct ValidationChain {
    name: &'static str,
    stages: Vec<Stage>,
}

impl ValidationChain {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stages: Vec::new(),
        }
    }

    /// Append a stage
    pub fn stage<F>(mut self, label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Submission<'_>) -> StageResult + Send + Sync + 'static,
    {
        self.stages.push(Stage {
            label: label.into(),
            check: Box::new(check),
        });
        self
    }

    /// Append a field-presence stage for `field`
    pub fn require(self, field: &'static str) -> Self {
        self.stage(format!("require:{}", field), validators::require(field))
    }

    /// Run every stage in order, stopping at the first failure
    pub fn run(&self, submission: &Submission<'_>) -> StageResult {
        for stage in &self.stages {
            if let Err(error) = (stage.check)(submission) {
                tracing::debug!(
                    chain = self.name,
                    stage = %stage.label,
                    error = %error,
                    "validation failed"
                );
                return Err(error);
            }
        }
        Ok(())
    }

    /// Stage labels in execution order
    pub fn labels(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Debug for ValidationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationChain")
            .field("name", &self.name)
            .field("stages", &self.labels())
            .finish()
    }
}
