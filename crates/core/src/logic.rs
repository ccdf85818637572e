//! The router between raw user input, the model and storage.

use log::{debug, info};

use crate::command::CommandResult;
use crate::error::{CommandError, Result};
use crate::file_handling::Storage;
use crate::model::Model;
use crate::parser::parse_command;

/// Owns the model and the storage it is saved to.
///
/// Failures never leave the router unusable; the next call to
/// [`Logic::execute`] works against whatever state the model is in.
#[derive(Debug)]
pub struct Logic<S> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    /// Parses and runs one line of input, then saves if the command changed
    /// anything on disk.
    ///
    /// # Arguments
    ///
    /// * `input` - One line as typed, keyword first
    ///
    /// # Returns
    ///
    /// The feedback for the user and whether help or exit was asked for
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Parse`] if the line is not a valid
    /// command and [`crate::error::Error::Command`] if it cannot be applied
    /// or saving afterwards fails. A failed save keeps the change in memory.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        debug!("Executing `{input}`");

        let command = parse_command(input)?;
        let result = command.execute(&mut self.model)?;

        if command.mutates_storage() {
            self.storage
                .save_state(&self.model)
                .map_err(CommandError::Storage)?;
            info!("Saved {} orders", self.model.order_book().len());
        }

        Ok(result)
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
