use itertools::Itertools;

use crate::command::{resolve_orders, CommandResult};
use crate::error::CommandError;
use crate::index::IndexList;
use crate::model::Model;
use crate::order::DeliveryStatus;

/// Sets one delivery status on every displayed order the indices point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatusCommand {
    indices: IndexList,
    status: DeliveryStatus,
}

impl DeliveryStatusCommand {
    #[must_use]
    pub fn new(indices: IndexList, status: DeliveryStatus) -> Self {
        Self { indices, status }
    }

    #[must_use]
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    #[must_use]
    pub fn indices(&self) -> &IndexList {
        &self.indices
    }

    /// Keyword that sets `status`.
    #[must_use]
    pub fn command_word(status: DeliveryStatus) -> &'static str {
        status.as_str()
    }

    #[must_use]
    pub fn usage(status: DeliveryStatus) -> String {
        let word = Self::command_word(status);
        format!(
            "{word}: Marks the orders identified by the index numbers used in the displayed order list as {status}.\n\
Parameters: INDEX... (positive integers separated by spaces or commas, ranges such as 2-4 are allowed)\n\
Example: {word} 1 2"
        )
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderIndex`] if any index is out of
    /// range, before any order is touched.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let targets = resolve_orders(model, &self.indices)?;
        model.set_delivery_status(&targets, self.status)?;

        let updated = targets
            .iter()
            .map(|order| order.with_delivery_status(self.status))
            .join("\n");

        Ok(CommandResult::new(format!(
            "Updated delivery status of {} order(s) to {}:\n{updated}",
            targets.len(),
            self.status
        )))
    }
}
