use itertools::Itertools;

use crate::command::{resolve_orders, CommandResult};
use crate::error::CommandError;
use crate::index::IndexList;
use crate::model::Model;

/// Deletes every displayed order the indices point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indices: IndexList,
}

impl DeleteCommand {
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the orders identified by the index numbers used in the displayed order list.\n\
Parameters: INDEX... (positive integers separated by spaces or commas, ranges such as 2-4 are allowed)\n\
Example: delete 1 3-4";

    #[must_use]
    pub fn new(indices: IndexList) -> Self {
        Self { indices }
    }

    #[must_use]
    pub fn indices(&self) -> &IndexList {
        &self.indices
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderIndex`] if any index is out of range, before deleting anything.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let targets = resolve_orders(model, &self.indices)?;

        for target in &targets {
            model.delete_order(target);
        }

        Ok(CommandResult::new(format!(
            "Deleted Order(s):\n{}",
            targets.iter().join("\n")
        )))
    }
}
