use log::debug;

use crate::command::CommandResult;
use crate::error::CommandError;
use crate::model::Model;
use crate::order::Order;

/// Adds a new order and records its items in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    order: Order,
}

impl AddCommand {
    pub const MESSAGE_USAGE: &'static str = "add: Adds an order to CakeCollate. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS o/ORDER_DESCRIPTION... d/DELIVERY_DATE [t/TAG]... [r/REQUEST]\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
o/2 x Chocolate Cake o/1 x Kiwi Cake t/friends d/13/05/2100 r/Less sugar";

    #[must_use]
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrder`] if an equal order exists.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_order(self.order.clone())?;
        model.record_order_items(&self.order);
        debug!("Added order for `{}`", self.order.name);

        Ok(CommandResult::new(format!("New order added: {}", self.order)))
    }
}
