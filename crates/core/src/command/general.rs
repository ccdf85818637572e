use crate::command::CommandResult;
use crate::model::{Model, OrderFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const MESSAGE_USAGE: &'static str = "clear: Deletes every order.\nExample: clear";
    pub const MESSAGE_SUCCESS: &'static str = "CakeCollate has been cleared!";

    /// Empties the order book. The order items catalog is kept.
    #[must_use]
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.clear_orders();
        model.update_filter(OrderFilter::All);
        CommandResult::new(Self::MESSAGE_SUCCESS)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";
    pub const MESSAGE_SUCCESS: &'static str = "Opened help window.";

    #[must_use]
    pub fn execute(&self) -> CommandResult {
        CommandResult {
            show_help: true,
            ..CommandResult::new(Self::MESSAGE_SUCCESS)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\nExample: exit";
    pub const MESSAGE_SUCCESS: &'static str = "Exiting CakeCollate as requested ...";

    #[must_use]
    pub fn execute(&self) -> CommandResult {
        CommandResult {
            exit: true,
            ..CommandResult::new(Self::MESSAGE_SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::typical_model;

    #[test]
    fn test_clear_keeps_catalog() {
        let mut model = typical_model();
        let items = model.order_items().clone();

        let result = ClearCommand.execute(&mut model);
        assert_eq!(result.feedback, "CakeCollate has been cleared!");
        assert!(model.order_book().is_empty());
        assert_eq!(model.order_items(), &items);
    }

    #[test]
    fn test_flags() {
        let help = HelpCommand.execute();
        assert!(help.show_help && !help.exit);

        let exit = ExitCommand.execute();
        assert!(exit.exit && !exit.show_help);
        assert_eq!(exit.feedback, "Exiting CakeCollate as requested ...");
    }
}
