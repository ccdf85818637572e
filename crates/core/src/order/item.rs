use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::order::OrderDescription;

/// Entry of the order items catalog: a kind of cake that has been ordered before.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderItem(String);

impl OrderItem {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Order items should not be blank and should not exceed 150 characters";

    /// # Errors
    ///
    /// Returns [`ValidationError::OrderItem`] for blank or overlong text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::OrderItem)
        }
    }

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        OrderDescription::is_valid(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&OrderDescription> for OrderItem {
    fn from(description: &OrderDescription) -> Self {
        // A trimmed slice of a valid description is itself a valid item.
        Self(description.item_name().to_string())
    }
}

impl Display for OrderItem {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderItem {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderItem> for String {
    fn from(value: OrderItem) -> Self {
        value.0
    }
}
