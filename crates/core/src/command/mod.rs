//! Typed requests against the [`Model`] and the result they report.
//!
//! Every command is an immutable value built by its parser. [`Command`] closes
//! over all of them so the router can execute one without knowing which it is.

use crate::error::CommandError;
use crate::index::{Index, IndexList};
use crate::model::Model;
use crate::order::Order;

mod add;
mod delete;
mod delivery_status;
mod edit;
mod general;
mod listing;
mod order_items;
mod request;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use delivery_status::DeliveryStatusCommand;
pub use edit::{EditCommand, EditOrderDescriptor};
pub use general::{ClearCommand, ExitCommand, HelpCommand};
pub use listing::{FindCommand, ListCommand, RemindCommand};
pub use order_items::{AddOrderItemCommand, DeleteOrderItemCommand, ListOrderItemsCommand};
pub use request::RequestCommand;

/// What the user is told after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The caller should show the help text.
    pub show_help: bool,
    /// The caller should end the session.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    List(ListCommand),
    Find(FindCommand),
    Remind(RemindCommand),
    DeliveryStatus(DeliveryStatusCommand),
    Request(RequestCommand),
    Clear(ClearCommand),
    AddOrderItem(AddOrderItemCommand),
    DeleteOrderItem(DeleteOrderItemCommand),
    ListOrderItems(ListOrderItemsCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Applies the command to `model`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] if an index does not point at a displayed
    /// entry or the change would create a duplicate. The model is left as it
    /// was in that case.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::List(command) => Ok(command.execute(model)),
            Command::Find(command) => Ok(command.execute(model)),
            Command::Remind(command) => Ok(command.execute(model)),
            Command::DeliveryStatus(command) => command.execute(model),
            Command::Request(command) => command.execute(model),
            Command::Clear(command) => Ok(command.execute(model)),
            Command::AddOrderItem(command) => command.execute(model),
            Command::DeleteOrderItem(command) => command.execute(model),
            Command::ListOrderItems(command) => Ok(command.execute(model)),
            Command::Help(command) => Ok(command.execute()),
            Command::Exit(command) => Ok(command.execute()),
        }
    }

    /// Whether a successful run changes data that lives on disk.
    #[must_use]
    pub fn mutates_storage(&self) -> bool {
        match self {
            Command::Add(_)
            | Command::Delete(_)
            | Command::Edit(_)
            | Command::DeliveryStatus(_)
            | Command::Request(_)
            | Command::Clear(_)
            | Command::AddOrderItem(_)
            | Command::DeleteOrderItem(_) => true,
            Command::List(_)
            | Command::Find(_)
            | Command::Remind(_)
            | Command::ListOrderItems(_)
            | Command::Help(_)
            | Command::Exit(_) => false,
        }
    }
}

/// Orders the indices point at in the displayed list, each once.
fn resolve_orders(model: &Model, indices: &IndexList) -> Result<Vec<Order>, CommandError> {
    let displayed = model.filtered_orders();
    let targets = indices
        .resolve(&displayed)
        .ok_or(CommandError::InvalidOrderIndex)?;
    Ok(targets.into_iter().cloned().collect())
}

fn resolve_order(model: &Model, index: Index) -> Result<Order, CommandError> {
    model
        .filtered_orders()
        .get(index.zero_based())
        .map(|order| (*order).clone())
        .ok_or(CommandError::InvalidOrderIndex)
}
