use chrono::{Local, NaiveDate};

use crate::command::CommandResult;
use crate::messages::orders_listed_overview;
use crate::model::{Model, OrderFilter};

/// Shows every order again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const MESSAGE_USAGE: &'static str = "list: Lists all orders.\nExample: list";

    #[must_use]
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(OrderFilter::All);
        CommandResult::new(orders_listed_overview(model.filtered_orders().len()))
    }
}

/// Shows orders with a word matching any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const MESSAGE_USAGE: &'static str = "find: Finds all orders whose names, addresses, tags or order descriptions \
contain any of the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice chocolate";

    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(OrderFilter::Keywords(self.keywords.clone()));
        CommandResult::new(orders_listed_overview(model.filtered_orders().len()))
    }
}

/// Shows undelivered orders due within a number of days from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemindCommand {
    days: u32,
}

impl RemindCommand {
    pub const MAX_DAYS: u32 = 3650;
    pub const MESSAGE_USAGE: &'static str = "remind: Lists undelivered orders due within the specified number of days from today.\n\
Parameters: DAYS (a non-negative integer up to 3650)\n\
Example: remind 3";

    #[must_use]
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        self.execute_from(model, Local::now().date_naive())
    }

    #[must_use]
    pub fn execute_from(&self, model: &mut Model, today: NaiveDate) -> CommandResult {
        model.update_filter(OrderFilter::DueWithin {
            from: today,
            days: self.days,
        });
        CommandResult::new(orders_listed_overview(model.filtered_orders().len()))
    }
}
