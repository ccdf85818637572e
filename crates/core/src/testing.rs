//! Typical orders shared by the unit tests.

use std::collections::BTreeSet;

use crate::model::{Model, OrderBook, OrderItems};
use crate::order::{
    Address, DeliveryDate, DeliveryStatus, Email, Name, Order, OrderDescription, Phone, Request,
    Tag,
};

pub fn order(name: &str, phone: &str, descriptions: &[&str], tags: &[&str], date: &str) -> Order {
    let slug: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();

    Order {
        name: Name::new(name).unwrap(),
        phone: Phone::new(phone).unwrap(),
        email: Email::new(format!("{slug}@example.com")).unwrap(),
        address: Address::new(format!("Block 123, {name} Street")).unwrap(),
        order_descriptions: descriptions
            .iter()
            .map(|d| OrderDescription::new(*d).unwrap())
            .collect::<BTreeSet<_>>(),
        tags: tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        delivery_date: DeliveryDate::new(date).unwrap(),
        request: Request::default(),
        delivery_status: DeliveryStatus::Undelivered,
    }
}

pub fn amy() -> Order {
    order("Amy Bee", "11111111", &["2 x Chocolate Cake"], &[], "01/01/2100")
}

pub fn bob() -> Order {
    order(
        "Bob Choo",
        "22222222",
        &["1 x Black Forest Cake", "2 x Strawberry Cake"],
        &["friends"],
        "02/01/2100",
    )
}

pub fn carl() -> Order {
    order("Carl Kurz", "95352563", &["Vanilla Cake"], &["colleagues"], "03/01/2100")
}

pub fn daniel() -> Order {
    order("Daniel Meier", "87652533", &["3 x Chocolate Cake"], &["friends"], "04/01/2100")
}

/// Model holding carl and daniel, with their items in the catalog.
pub fn typical_model() -> Model {
    let mut order_book = OrderBook::default();
    let mut order_items = OrderItems::default();

    for order in [carl(), daniel()] {
        for item in order.order_items() {
            if !order_items.contains(&item) {
                order_items.add(item).unwrap();
            }
        }
        order_book.add(order).unwrap();
    }

    Model::new(order_book, order_items)
}
