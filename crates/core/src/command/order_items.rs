use itertools::Itertools;

use crate::command::CommandResult;
use crate::error::CommandError;
use crate::index::IndexList;
use crate::messages::order_items_listed_overview;
use crate::model::Model;
use crate::order::OrderItem;

/// Adds an entry to the order items catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOrderItemCommand {
    item: OrderItem,
}

impl AddOrderItemCommand {
    pub const MESSAGE_USAGE: &'static str = "addItem: Adds an order item to the order items list.\n\
Parameters: ORDER_ITEM\n\
Example: addItem Chocolate Cake";

    #[must_use]
    pub fn new(item: OrderItem) -> Self {
        Self { item }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateOrderItem`] if the item is already listed.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.add_order_item(self.item.clone())?;
        Ok(CommandResult::new(format!("New order item added: {}", self.item)))
    }
}

/// Removes catalog entries by their displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrderItemCommand {
    indices: IndexList,
}

impl DeleteOrderItemCommand {
    pub const MESSAGE_USAGE: &'static str = "deleteItem: Deletes the order items identified by the index numbers used in the order items list.\n\
Parameters: INDEX... (positive integers separated by spaces or commas, ranges such as 2-4 are allowed)\n\
Example: deleteItem 1 3";

    #[must_use]
    pub fn new(indices: IndexList) -> Self {
        Self { indices }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderItemIndex`] if any index is out of
    /// range, before anything is removed.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let targets: Vec<OrderItem> = {
            let displayed: Vec<&OrderItem> = model.order_items().items().iter().collect();
            self.indices
                .resolve(&displayed)
                .ok_or(CommandError::InvalidOrderItemIndex)?
                .into_iter()
                .cloned()
                .collect()
        };

        for target in &targets {
            model.delete_order_item(target);
        }

        Ok(CommandResult::new(format!(
            "Deleted Order Item(s):\n{}",
            targets.iter().join("\n")
        )))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOrderItemsCommand;

impl ListOrderItemsCommand {
    pub const MESSAGE_USAGE: &'static str = "listItems: Lists all order items.\nExample: listItems";

    #[must_use]
    pub fn execute(&self, model: &Model) -> CommandResult {
        CommandResult::new(order_items_listed_overview(model.order_items().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::typical_model;

    fn item(name: &str) -> OrderItem {
        OrderItem::new(name).unwrap()
    }

    #[test]
    fn test_add_item() {
        let mut model = typical_model();
        let result = AddOrderItemCommand::new(item("Kiwi Cake"))
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "New order item added: Kiwi Cake");

        let result = AddOrderItemCommand::new(item("Kiwi Cake")).execute(&mut model);
        assert_eq!(
            result.unwrap_err().to_string(),
            "This order item already exists in the order items list"
        );
    }

    #[test]
    fn test_delete_items() {
        let mut model = typical_model();
        let result = DeleteOrderItemCommand::new(IndexList::parse("2,1").unwrap())
            .execute(&mut model)
            .unwrap();
        assert_eq!(
            result.feedback,
            "Deleted Order Item(s):\nChocolate Cake\nVanilla Cake"
        );
        assert!(model.order_items().is_empty());
    }

    #[test]
    fn test_delete_item_out_of_range() {
        let mut model = typical_model();
        let before = model.clone();
        let result = DeleteOrderItemCommand::new(IndexList::parse("3").unwrap()).execute(&mut model);
        assert_eq!(
            result.unwrap_err().to_string(),
            "The order item index provided is invalid"
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_list_items() {
        let model = typical_model();
        assert_eq!(
            ListOrderItemsCommand.execute(&model).feedback,
            "2 order items listed!"
        );
    }
}
