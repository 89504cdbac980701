//! Order status state machine
//!
//! `pending` → `preparing` → `out-for-delivery` → `delivered`.
//!
//! Updates may move an order to any status value; adjacency is not enforced.
//! What is enforced lives in the order validation stages: the submitted value
//! must be one of the four, an update submitting `delivered` is refused, and
//! only a stored `pending` order can be deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// No update is accepted once here
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Only orders nobody has started on may be removed
    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// "pending, preparing, out-for-delivery, delivered"
    pub fn enumeration() -> String {
        Self::ALL
            .iter()
            .map(OrderStatus::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
