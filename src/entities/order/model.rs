//! Order entity model

use super::status::OrderStatus;
use crate::core::Entity;
use crate::core::error::ValidationError;
use crate::core::payload::{Payload, has_truthy, text_field};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of an order's `dishes`: a quantity plus whatever dish details
/// the client sent along with it, kept as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    pub fn new(quantity: u64) -> Self {
        Self {
            quantity,
            details: Map::new(),
        }
    }

    /// Attach a pass-through detail such as `name` or `price`
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// Mutable fields of an order, as accepted by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

impl OrderFields {
    /// Read the fields out of a payload that has passed its validation chain.
    ///
    /// A falsy or absent `status` defaults to `pending`. Text fields must be
    /// strings; anything else that slipped through presence checks is refused.
    pub fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let status = if has_truthy(payload, "status") {
            payload
                .get("status")
                .and_then(Value::as_str)
                .and_then(|s| s.parse::<OrderStatus>().ok())
                .ok_or_else(invalid_status)?
        } else {
            OrderStatus::default()
        };

        Ok(Self {
            deliver_to: text_field(payload, "deliverTo")?,
            mobile_number: text_field(payload, "mobileNumber")?,
            status,
            dishes: order_lines(payload)?,
        })
    }
}

impl Entity for Order {
    type Fields = OrderFields;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn from_fields(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status,
            dishes: fields.dishes,
        }
    }

    fn replace_fields(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = fields.status;
        self.dishes = fields.dishes;
    }
}

/// The message used whenever a submitted status is not one of the four
pub(crate) fn invalid_status() -> ValidationError {
    ValidationError::rule(format!(
        "Order must have a status of {}",
        OrderStatus::enumeration()
    ))
}

fn order_lines(payload: &Payload) -> Result<Vec<OrderLine>, ValidationError> {
    let Some(Value::Array(lines)) = payload.get("dishes") else {
        return Err(ValidationError::rule("dishes must be of type array"));
    };

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let mut details = line
                .as_object()
                .cloned()
                .ok_or_else(|| bad_quantity(index))?;
            let quantity = details
                .remove("quantity")
                .as_ref()
                .and_then(whole_quantity)
                .ok_or_else(|| bad_quantity(index))?;
            Ok(OrderLine { quantity, details })
        })
        .collect()
}

/// The quantity rule shared by the order-line stage and `from_payload`:
/// a JSON number with no fractional part, at least 1, that fits in a `u64`.
/// `2` and `2.0` pass, `"2"` does not.
pub(crate) fn whole_quantity(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        })
        .filter(|q| *q > 0)
}

pub(crate) fn bad_quantity(index: usize) -> ValidationError {
    ValidationError::rule(format!(
        "dish {} must have a quantity that is an integer greater than 0",
        index
    ))
}
