use std::collections::BTreeSet;

use crate::command::{resolve_order, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::{Model, OrderFilter};
use crate::order::{Address, DeliveryDate, Email, Name, Order, OrderDescription, Phone, Tag};

/// Fields to replace on an order. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOrderDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub order_descriptions: Option<BTreeSet<OrderDescription>>,
    /// `Some` of an empty set clears the tags.
    pub tags: Option<BTreeSet<Tag>>,
    pub delivery_date: Option<DeliveryDate>,
}

impl EditOrderDescriptor {
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.order_descriptions.is_some()
            || self.tags.is_some()
            || self.delivery_date.is_some()
    }

    /// Copy of `order` with the edited fields replaced. Request and delivery
    /// status carry over unchanged.
    #[must_use]
    pub fn apply(&self, order: &Order) -> Order {
        Order {
            name: self.name.clone().unwrap_or_else(|| order.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| order.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| order.email.clone()),
            address: self.address.clone().unwrap_or_else(|| order.address.clone()),
            order_descriptions: self
                .order_descriptions
                .clone()
                .unwrap_or_else(|| order.order_descriptions.clone()),
            tags: self.tags.clone().unwrap_or_else(|| order.tags.clone()),
            delivery_date: self.delivery_date.unwrap_or(order.delivery_date),
            ..order.clone()
        }
    }
}

/// Replaces the order at a displayed index with an edited copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditOrderDescriptor,
}

impl EditCommand {
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the order identified by the index number used in the displayed order list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [o/ORDER_DESCRIPTION]... [t/TAG]... [d/DELIVERY_DATE]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

    #[must_use]
    pub fn new(index: Index, descriptor: EditOrderDescriptor) -> Self {
        Self { index, descriptor }
    }

    #[must_use]
    pub fn descriptor(&self) -> &EditOrderDescriptor {
        &self.descriptor
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderIndex`] for an index past the
    /// displayed list, [`CommandError::DuplicateOrder`] if the edited order
    /// equals another one.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve_order(model, self.index)?;
        let edited = self.descriptor.apply(&target);

        model.set_order(&target, edited.clone())?;
        model.record_order_items(&edited);
        model.update_filter(OrderFilter::All);

        Ok(CommandResult::new(format!("Edited Order: {edited}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{DeliveryStatus, OrderItem};
    use crate::testing::{carl, daniel, typical_model};

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_apply_keeps_unedited_fields() {
        let delivered = carl().with_delivery_status(DeliveryStatus::Delivered);
        let descriptor = EditOrderDescriptor {
            phone: Some(Phone::new("999").unwrap()),
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };

        let edited = descriptor.apply(&delivered);
        assert_eq!(edited.phone.as_str(), "999");
        assert!(edited.tags.is_empty());
        assert_eq!(edited.name, carl().name);
        assert_eq!(edited.delivery_status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_is_any_field_edited() {
        assert!(!EditOrderDescriptor::default().is_any_field_edited());
        let descriptor = EditOrderDescriptor {
            delivery_date: Some(DeliveryDate::new("05/05/2100").unwrap()),
            ..Default::default()
        };
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut model = typical_model();
        let descriptor = EditOrderDescriptor {
            name: Some(Name::new("Carla Kurz").unwrap()),
            order_descriptions: Some(
                [OrderDescription::new("1 x Lemon Cake").unwrap()]
                    .into_iter()
                    .collect(),
            ),
            ..Default::default()
        };

        let result = EditCommand::new(first(), descriptor.clone())
            .execute(&mut model)
            .unwrap();

        let edited = descriptor.apply(&carl());
        assert_eq!(result.feedback, format!("Edited Order: {edited}"));
        assert_eq!(model.order_book().orders(), &[edited, daniel()]);
        assert!(model.has_order_item(&OrderItem::new("Lemon Cake").unwrap()));
    }

    #[test]
    fn test_edit_into_duplicate_fails() {
        let mut model = typical_model();
        let before = model.clone();
        let daniel = daniel();
        let descriptor = EditOrderDescriptor {
            name: Some(daniel.name.clone()),
            phone: Some(daniel.phone.clone()),
            email: Some(daniel.email.clone()),
            address: Some(daniel.address.clone()),
            order_descriptions: Some(daniel.order_descriptions.clone()),
            tags: Some(daniel.tags.clone()),
            delivery_date: Some(daniel.delivery_date),
        };

        let result = EditCommand::new(first(), descriptor).execute(&mut model);
        assert!(matches!(result, Err(CommandError::DuplicateOrder)));
        assert_eq!(model, before);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut model = typical_model();
        let descriptor = EditOrderDescriptor {
            phone: Some(Phone::new("999").unwrap()),
            ..Default::default()
        };
        let result = EditCommand::new(Index::from_one_based(3).unwrap(), descriptor)
            .execute(&mut model);
        assert!(matches!(result, Err(CommandError::InvalidOrderIndex)));
    }
}
