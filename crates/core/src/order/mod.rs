//! The order record and its field types.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

mod delivery;
mod fields;
mod item;

pub use delivery::{DeliveryDate, DeliveryStatus};
pub use fields::{Address, Email, Name, OrderDescription, Phone, Request, Tag};
pub use item::OrderItem;

/// One customer cake order.
///
/// Two orders are the same order exactly when every field is equal; there is
/// no separate identifier. Edits build a new value with struct update syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub order_descriptions: BTreeSet<OrderDescription>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    pub delivery_date: DeliveryDate,
    #[serde(default)]
    pub request: Request,
    #[serde(default)]
    pub delivery_status: DeliveryStatus,
}

impl Order {
    #[must_use]
    pub fn with_delivery_status(&self, delivery_status: DeliveryStatus) -> Self {
        Self {
            delivery_status,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_request(&self, request: Request) -> Self {
        Self {
            request,
            ..self.clone()
        }
    }

    /// Catalog entries for every line item of this order.
    pub fn order_items(&self) -> impl Iterator<Item = OrderItem> + '_ {
        self.order_descriptions.iter().map(OrderItem::from)
    }
}

impl Display for Order {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}; Phone: {}; Email: {}; Address: {}; Order Descriptions: [{}]; Tags: [{}]; Delivery Date: {}; Delivery Status: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.order_descriptions.iter().join(", "),
            self.tags.iter().join(", "),
            self.delivery_date,
            self.delivery_status,
        )?;

        if !self.request.is_empty() {
            write!(formatter, "; Request: {}", self.request)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{amy, bob};

    #[test]
    fn test_orders_compare_by_value() {
        assert_eq!(amy(), amy());
        assert_ne!(amy(), bob());

        let renamed = Order {
            name: Name::new("Amy Bea").unwrap(),
            ..amy()
        };
        assert_ne!(renamed, amy());

        let delivered = amy().with_delivery_status(DeliveryStatus::Delivered);
        assert_ne!(delivered, amy());
    }

    #[test]
    fn test_display() {
        let order = amy().with_request(Request::new("No nuts").unwrap());
        let displayed = order.to_string();
        assert!(displayed.starts_with("Amy Bee; Phone: 11111111"));
        assert!(displayed.contains("Order Descriptions: [2 x Chocolate Cake]"));
        assert!(displayed.contains("Delivery Status: undelivered"));
        assert!(displayed.ends_with("; Request: No nuts"));
        assert!(!amy().to_string().contains("Request"));
    }

    #[test]
    fn test_order_items() {
        let items: Vec<String> = bob().order_items().map(String::from).collect();
        assert_eq!(items, vec!["Black Forest Cake", "Strawberry Cake"]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(amy()).unwrap();
        assert_eq!(json["name"], "Amy Bee");
        assert_eq!(json["orderDescriptions"][0], "2 x Chocolate Cake");
        assert_eq!(json["deliveryDate"], "01/01/2100");
        assert_eq!(json["deliveryStatus"], "UNDELIVERED");

        let restored: Order = serde_json::from_value(json).unwrap();
        assert_eq!(restored, amy());
    }

    #[test]
    fn test_json_with_invalid_field_is_rejected() {
        let mut json = serde_json::to_value(amy()).unwrap();
        json["email"] = serde_json::Value::String("not an email".to_string());
        assert!(serde_json::from_value::<Order>(json).is_err());
    }
}
