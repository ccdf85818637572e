//! In-memory state the commands operate on.
//!
//! [`Model`] bundles the [`OrderBook`], the [`OrderItems`] catalog and the
//! filter that decides which orders are currently displayed. Display indices
//! typed by the user always refer to [`Model::filtered_orders`].

use chrono::{Days, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::order::{DeliveryStatus, Order, OrderItem};

/// Orders in insertion order, no two of them equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedOrderBook", into = "SerializedOrderBook")]
pub struct OrderBook {
    orders: Vec<Order>,
}

#[derive(Serialize, Deserialize)]
struct SerializedOrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn contains(&self, order: &Order) -> bool {
        self.orders.contains(order)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrder`] if an equal order is already present.
    pub fn add(&mut self, order: Order) -> Result<(), CommandError> {
        if self.contains(&order) {
            return Err(CommandError::DuplicateOrder);
        }
        self.orders.push(order);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderIndex`] if `target` is not present and
    /// [`CommandError::DuplicateOrder`] if `edited` equals a different order.
    pub fn set(&mut self, target: &Order, edited: Order) -> Result<(), CommandError> {
        let position = self
            .orders
            .iter()
            .position(|order| order == target)
            .ok_or(CommandError::InvalidOrderIndex)?;

        if *target != edited && self.contains(&edited) {
            return Err(CommandError::DuplicateOrder);
        }

        self.orders[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Order) -> bool {
        let before = self.orders.len();
        self.orders.retain(|order| order != target);
        before != self.orders.len()
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

impl TryFrom<SerializedOrderBook> for OrderBook {
    type Error = String;

    fn try_from(serialized: SerializedOrderBook) -> Result<Self, Self::Error> {
        let mut order_book = OrderBook::default();
        for order in serialized.orders {
            order_book
                .add(order)
                .map_err(|_| "Orders list contains duplicate order(s).".to_string())?;
        }
        Ok(order_book)
    }
}

impl From<OrderBook> for SerializedOrderBook {
    fn from(order_book: OrderBook) -> Self {
        Self {
            orders: order_book.orders,
        }
    }
}

/// Catalog of distinct order items, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedOrderItems", into = "SerializedOrderItems")]
pub struct OrderItems {
    items: Vec<OrderItem>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerializedOrderItems {
    order_items: Vec<OrderItem>,
}

impl OrderItems {
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, item: &OrderItem) -> bool {
        self.items.contains(item)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrderItem`] if the item is already in the catalog.
    pub fn add(&mut self, item: OrderItem) -> Result<(), CommandError> {
        if self.contains(&item) {
            return Err(CommandError::DuplicateOrderItem);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, target: &OrderItem) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != target);
        before != self.items.len()
    }
}

impl TryFrom<SerializedOrderItems> for OrderItems {
    type Error = String;

    fn try_from(serialized: SerializedOrderItems) -> Result<Self, Self::Error> {
        let mut order_items = OrderItems::default();
        for item in serialized.order_items {
            order_items
                .add(item)
                .map_err(|_| "Order items list contains duplicate item(s).".to_string())?;
        }
        Ok(order_items)
    }
}

impl From<OrderItems> for SerializedOrderItems {
    fn from(order_items: OrderItems) -> Self {
        Self {
            order_items: order_items.items,
        }
    }
}

/// Which orders are currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OrderFilter {
    #[default]
    All,
    /// Orders with a word in their name, address, tags or descriptions equal to
    /// one of the keywords, ignoring case.
    Keywords(Vec<String>),
    /// Undelivered orders due between `from` and `days` days after it, inclusive.
    DueWithin { from: NaiveDate, days: u32 },
}

impl OrderFilter {
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Keywords(keywords) => {
                let words = searchable_words(order);
                keywords.iter().any(|keyword| {
                    let keyword = keyword.to_lowercase();
                    words.iter().any(|word| *word == keyword)
                })
            }
            OrderFilter::DueWithin { from, days } => {
                let date = order.delivery_date.date();
                let until = from.checked_add_days(Days::new(u64::from(*days)));

                order.delivery_status == DeliveryStatus::Undelivered
                    && date >= *from
                    && until.map_or(true, |until| date <= until)
            }
        }
    }
}

fn searchable_words(order: &Order) -> Vec<String> {
    let texts = [order.name.as_str(), order.address.as_str()]
        .into_iter()
        .chain(order.tags.iter().map(|tag| tag.as_str()))
        .chain(order.order_descriptions.iter().map(|d| d.as_str()));

    texts
        .flat_map(|text| text.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Everything a command can read or change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    order_book: OrderBook,
    order_items: OrderItems,
    filter: OrderFilter,
}

impl Model {
    #[must_use]
    pub fn new(order_book: OrderBook, order_items: OrderItems) -> Self {
        Self {
            order_book,
            order_items,
            filter: OrderFilter::All,
        }
    }

    #[must_use]
    pub fn order_book(&self) -> &OrderBook {
        &self.order_book
    }

    #[must_use]
    pub fn order_items(&self) -> &OrderItems {
        &self.order_items
    }

    #[must_use]
    pub fn filter(&self) -> &OrderFilter {
        &self.filter
    }

    /// Read-only view of the orders the user currently sees, in display order.
    #[must_use]
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.order_book
            .orders()
            .iter()
            .filter(|order| self.filter.matches(order))
            .collect()
    }

    pub fn update_filter(&mut self, filter: OrderFilter) {
        debug!("Updating order filter to {filter:?}");
        self.filter = filter;
    }

    #[must_use]
    pub fn has_order(&self, order: &Order) -> bool {
        self.order_book.contains(order)
    }

    /// Adds the order and shows every order again so the new one is visible.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrder`] if an equal order exists.
    pub fn add_order(&mut self, order: Order) -> Result<(), CommandError> {
        self.order_book.add(order)?;
        self.filter = OrderFilter::All;
        Ok(())
    }

    pub fn delete_order(&mut self, target: &Order) -> bool {
        self.order_book.remove(target)
    }

    /// # Errors
    ///
    /// See [`OrderBook::set`].
    pub fn set_order(&mut self, target: &Order, edited: Order) -> Result<(), CommandError> {
        self.order_book.set(target, edited)
    }

    /// Applies every replacement or none of them.
    ///
    /// # Errors
    ///
    /// Fails like [`OrderBook::set`] on the first replacement that cannot be
    /// applied, leaving the order book untouched.
    pub fn set_orders(&mut self, replacements: Vec<(Order, Order)>) -> Result<(), CommandError> {
        let mut order_book = self.order_book.clone();
        for (target, edited) in replacements {
            order_book.set(&target, edited)?;
        }
        self.order_book = order_book;
        Ok(())
    }

    /// Sets the delivery status of every target order, all or nothing.
    ///
    /// # Errors
    ///
    /// See [`Model::set_orders`].
    pub fn set_delivery_status(
        &mut self,
        targets: &[Order],
        status: DeliveryStatus,
    ) -> Result<(), CommandError> {
        let replacements = targets
            .iter()
            .map(|target| (target.clone(), target.with_delivery_status(status)))
            .collect();
        self.set_orders(replacements)
    }

    pub fn clear_orders(&mut self) {
        self.order_book.clear();
    }

    #[must_use]
    pub fn has_order_item(&self, item: &OrderItem) -> bool {
        self.order_items.contains(item)
    }

    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrderItem`] if the item is already listed.
    pub fn add_order_item(&mut self, item: OrderItem) -> Result<(), CommandError> {
        self.order_items.add(item)
    }

    pub fn delete_order_item(&mut self, target: &OrderItem) -> bool {
        self.order_items.remove(target)
    }

    /// Adds the items of `order` that the catalog does not know yet.
    pub fn record_order_items(&mut self, order: &Order) {
        for item in order.order_items() {
            if !self.order_items.contains(&item) {
                debug!("Adding `{item}` to the order items catalog");
                self.order_items.items.push(item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{amy, bob, carl, daniel, typical_model};

    #[test]
    fn test_order_book_rejects_duplicates() {
        let mut order_book = OrderBook::default();
        order_book.add(amy()).unwrap();
        assert!(matches!(
            order_book.add(amy()),
            Err(CommandError::DuplicateOrder)
        ));
        assert_eq!(order_book.len(), 1);
    }

    #[test]
    fn test_order_book_set() {
        let mut order_book = OrderBook::default();
        order_book.add(amy()).unwrap();
        order_book.add(bob()).unwrap();

        assert!(matches!(
            order_book.set(&amy(), bob()),
            Err(CommandError::DuplicateOrder)
        ));
        assert!(matches!(
            order_book.set(&carl(), daniel()),
            Err(CommandError::InvalidOrderIndex)
        ));

        order_book.set(&amy(), carl()).unwrap();
        assert_eq!(order_book.orders(), &[carl(), bob()]);

        // Replacing an order with itself is fine.
        order_book.set(&bob(), bob()).unwrap();
    }

    #[test]
    fn test_order_book_json_rejects_duplicates() {
        let json = serde_json::json!({ "orders": [amy(), amy()] });
        let error = serde_json::from_value::<OrderBook>(json).unwrap_err();
        assert!(error.to_string().contains("duplicate"));
    }

    #[test]
    fn test_order_items_json_shape() {
        let model = typical_model();
        let json = serde_json::to_value(model.order_items()).unwrap();
        assert_eq!(json["orderItems"][0], "Vanilla Cake");

        let restored: OrderItems = serde_json::from_value(json).unwrap();
        assert_eq!(&restored, model.order_items());
    }

    #[test]
    fn test_keyword_filter() {
        let mut model = typical_model();
        model.add_order(amy()).unwrap();

        model.update_filter(OrderFilter::Keywords(vec!["CHOCOLATE".to_string()]));
        assert_eq!(model.filtered_orders(), vec![&daniel(), &amy()]);

        model.update_filter(OrderFilter::Keywords(vec!["colleagues".to_string(), "amy".to_string()]));
        assert_eq!(model.filtered_orders(), vec![&carl(), &amy()]);

        model.update_filter(OrderFilter::Keywords(vec!["choco".to_string()]));
        assert!(model.filtered_orders().is_empty());
    }

    #[test]
    fn test_due_within_filter() {
        let from = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
        let filter = OrderFilter::DueWithin { from, days: 1 };

        assert!(filter.matches(&amy()));
        assert!(filter.matches(&bob()));
        assert!(!filter.matches(&carl()));
        assert!(!filter.matches(&amy().with_delivery_status(DeliveryStatus::Delivered)));

        let later = OrderFilter::DueWithin {
            from: NaiveDate::from_ymd_opt(2100, 1, 2).unwrap(),
            days: 0,
        };
        assert!(!later.matches(&amy()));
        assert!(later.matches(&bob()));
    }

    #[test]
    fn test_add_order_resets_filter() {
        let mut model = typical_model();
        model.update_filter(OrderFilter::Keywords(vec!["nobody".to_string()]));
        model.add_order(amy()).unwrap();
        assert_eq!(model.filter(), &OrderFilter::All);
        assert_eq!(model.filtered_orders().len(), 3);
    }

    #[test]
    fn test_set_delivery_status_is_all_or_nothing() {
        let mut model = typical_model();
        let delivered_carl = carl().with_delivery_status(DeliveryStatus::Delivered);
        model.add_order(delivered_carl).unwrap();
        let before = model.clone();

        // Marking both carls delivered would leave two equal orders.
        let result = model.set_delivery_status(&[daniel(), carl()], DeliveryStatus::Delivered);
        assert!(matches!(result, Err(CommandError::DuplicateOrder)));
        assert_eq!(model, before);

        model
            .set_delivery_status(&[daniel()], DeliveryStatus::Cancelled)
            .unwrap();
        assert_eq!(
            model.order_book().orders()[1].delivery_status,
            DeliveryStatus::Cancelled
        );
    }

    #[test]
    fn test_record_order_items_skips_known() {
        let mut model = typical_model();
        model.record_order_items(&bob());
        model.record_order_items(&amy());

        let items: Vec<&str> = model.order_items().items().iter().map(OrderItem::as_str).collect();
        assert_eq!(
            items,
            vec!["Vanilla Cake", "Chocolate Cake", "Black Forest Cake", "Strawberry Cake"]
        );
    }
}
