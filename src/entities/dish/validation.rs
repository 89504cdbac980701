//! Dish validation stages and chains

use crate::core::error::ValidationError;
use crate::core::payload::loose_number;
use crate::core::validation::validators::id_matches_route;
use crate::core::validation::{StageResult, Submission, ValidationChain};

/// Stage: price compares greater than zero (numeric strings count)
pub fn price_greater_than_zero() -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    |submission: &Submission<'_>| {
        let positive = submission
            .payload
            .get("price")
            .and_then(loose_number)
            .is_some_and(|price| price > 0.0);

        if positive {
            Ok(())
        } else {
            Err(ValidationError::rule("Must have a price greater than 0"))
        }
    }
}

/// Stage: price is a JSON number
pub fn price_is_number() -> impl Fn(&Submission<'_>) -> StageResult + Send + Sync + Clone {
    |submission: &Submission<'_>| {
        if submission.payload.get("price").is_some_and(|p| p.is_number()) {
            Ok(())
        } else {
            Err(ValidationError::rule("price must be of type number"))
        }
    }
}

pub fn create_chain() -> ValidationChain {
    ValidationChain::new("dish:create")
        .require("name")
        .require("description")
        .require("image_url")
        .require("price")
        .stage("price", price_greater_than_zero())
}

pub fn update_chain() -> ValidationChain {
    ValidationChain::new("dish:update")
        .require("name")
        .require("description")
        .require("image_url")
        .require("price")
        .stage("price", price_greater_than_zero())
        .stage("price:number", price_is_number())
        .stage("id", id_matches_route("Dish"))
}
