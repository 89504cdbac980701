//! Dish entity model

use crate::core::Entity;
use crate::core::error::ValidationError;
use crate::core::payload::{Payload, loose_number, text_field};
use serde::{Deserialize, Serialize};

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Mutable fields of a dish
#[derive(Debug, Clone, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl DishFields {
    /// Read the fields out of a payload that has passed its validation chain
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let price = payload
            .get("price")
            .and_then(loose_number)
            .filter(|p| *p > 0.0)
            .ok_or_else(|| ValidationError::rule("Must have a price greater than 0"))?;

        Ok(Self {
            name: text_field(payload, "name")?,
            description: text_field(payload, "description")?,
            price,
            image_url: text_field(payload, "image_url")?,
        })
    }
}

impl Entity for Dish {
    type Fields = DishFields;

    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "dish"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn from_fields(id: String, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    fn replace_fields(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
