//! User-facing messages shared by the parser and command layers.

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_INVALID_ORDER_DISPLAYED_INDEX: &str = "The order index provided is invalid";
pub const MESSAGE_INVALID_ORDER_ITEM_DISPLAYED_INDEX: &str =
    "The order item index provided is invalid";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_DUPLICATE_ORDER: &str = "This order already exists in CakeCollate";
pub const MESSAGE_DUPLICATE_ORDER_ITEM: &str =
    "This order item already exists in the order items list";

/// Prefix put in front of any storage failure raised while saving after a command.
pub const FILE_OPS_ERROR_MESSAGE: &str = "Could not save data to file: ";

#[must_use]
pub fn orders_listed_overview(count: usize) -> String {
    format!("{count} orders listed!")
}

#[must_use]
pub fn order_items_listed_overview(count: usize) -> String {
    format!("{count} order items listed!")
}
