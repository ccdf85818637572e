use crate::command::{resolve_order, CommandResult};
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;
use crate::order::Request;

/// Sets the request on one order, or removes it when the request is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCommand {
    index: Index,
    request: Request,
}

impl RequestCommand {
    pub const MESSAGE_USAGE: &'static str = "request: Adds a request to the order identified by the index number used in the displayed order list. \
An empty request removes the existing one.\n\
Parameters: INDEX (must be a positive integer) r/REQUEST\n\
Example: request 1 r/Less sugar, more cream";

    #[must_use]
    pub fn new(index: Index, request: Request) -> Self {
        Self { index, request }
    }

    #[must_use]
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidOrderIndex`] for an index past the displayed list.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = resolve_order(model, self.index)?;
        let edited = target.with_request(self.request.clone());

        model.set_order(&target, edited.clone())?;

        let feedback = if self.request.is_empty() {
            format!("Removed request from Order: {edited}")
        } else {
            format!("Added request to Order: {edited}")
        };
        Ok(CommandResult::new(feedback))
    }
}
