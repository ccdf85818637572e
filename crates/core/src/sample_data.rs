//! Orders a first-time user starts with.

use chrono::{Days, NaiveDate};

use crate::error::{ParseError, ValidationError};
use crate::model::Model;
use crate::order::{
    Address, DeliveryDate, DeliveryStatus, Email, Name, Order, OrderDescription, Phone, Request,
    Tag,
};

struct SampleOrder {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    descriptions: &'static [&'static str],
    tags: &'static [&'static str],
    days_from_today: u64,
}

const SAMPLE_ORDERS: [SampleOrder; 6] = [
    SampleOrder {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        descriptions: &["2 x Chocolate Cake"],
        tags: &["friends"],
        days_from_today: 3,
    },
    SampleOrder {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        descriptions: &["2 x Vanilla Cake"],
        tags: &["colleagues", "friends"],
        days_from_today: 4,
    },
    SampleOrder {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        descriptions: &["2 x Chocolate Cake", "3 x Kiwi Cake"],
        tags: &["neighbours"],
        days_from_today: 5,
    },
    SampleOrder {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        descriptions: &["2 x Chocolate Cake"],
        tags: &["family"],
        days_from_today: 6,
    },
    SampleOrder {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        descriptions: &[
            "1 x Strawberry Cake",
            "1 x Chocolate Vanilla Cake",
            "1 x Berries Cake",
        ],
        tags: &["classmates"],
        days_from_today: 7,
    },
    SampleOrder {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        descriptions: &["1 x Black Forest Cake"],
        tags: &["colleagues"],
        days_from_today: 8,
    },
];

impl SampleOrder {
    fn build(&self, today: NaiveDate) -> Result<Order, ValidationError> {
        let delivery_date = today
            .checked_add_days(Days::new(self.days_from_today))
            .ok_or(ValidationError::DeliveryDate)
            .and_then(DeliveryDate::from_date)?;

        Ok(Order {
            name: Name::new(self.name)?,
            phone: Phone::new(self.phone)?,
            email: Email::new(self.email)?,
            address: Address::new(self.address)?,
            order_descriptions: self
                .descriptions
                .iter()
                .map(|description| OrderDescription::new(*description))
                .collect::<Result<_, _>>()?,
            tags: self
                .tags
                .iter()
                .map(|tag| Tag::new(*tag))
                .collect::<Result<_, _>>()?,
            delivery_date,
            request: Request::default(),
            delivery_status: DeliveryStatus::Undelivered,
        })
    }
}

/// Six sample orders due 3 to 8 days after `today`, with their items in the catalog.
///
/// # Errors
///
/// Returns a [`ParseError`] if a due date falls outside the supported years,
/// or a [`crate::error::CommandError`] if two sample orders are the same.
pub fn sample_model(today: NaiveDate) -> crate::error::Result<Model> {
    let mut model = Model::default();

    for sample in &SAMPLE_ORDERS {
        let order = sample.build(today).map_err(ParseError::from)?;
        model.record_order_items(&order);
        model.add_order(order)?;
    }

    Ok(model)
}
