//! Turns one line of user input into a [`Command`].
//!
//! The first whitespace-separated word selects a [`CommandWord`]; the rest of
//! the line goes to that command's parser.

use std::str::FromStr;

use log::debug;

use crate::command::{
    ClearCommand, Command, ExitCommand, HelpCommand, ListCommand, ListOrderItemsCommand,
};
use crate::error::ParseError;
use crate::order::DeliveryStatus;

mod add;
mod delete;
mod delivery_status;
mod edit;
mod find;
mod order_items;
mod request;
pub mod tokenizer;
pub mod util;

pub use add::AddCommandParser;
pub use delete::DeleteCommandParser;
pub use delivery_status::DeliveryStatusCommandParser;
pub use edit::EditCommandParser;
pub use find::{FindCommandParser, RemindCommandParser};
pub use order_items::{AddOrderItemCommandParser, DeleteOrderItemCommandParser};
pub use request::RequestCommandParser;

/// Builds one kind of command from the text after its keyword.
pub trait CommandParser {
    type Output;

    /// # Errors
    ///
    /// Returns a [`ParseError`] describing why `args` do not form a valid command.
    fn parse(&self, args: &str) -> Result<Self::Output, ParseError>;
}

/// Every keyword the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Delete,
    Edit,
    List,
    Find,
    Remind,
    Delivered,
    Undelivered,
    Cancelled,
    Request,
    Clear,
    AddItem,
    DeleteItem,
    ListItems,
    Help,
    Exit,
}

impl CommandWord {
    pub const ALL: [CommandWord; 16] = [
        CommandWord::Add,
        CommandWord::Delete,
        CommandWord::Edit,
        CommandWord::List,
        CommandWord::Find,
        CommandWord::Remind,
        CommandWord::Delivered,
        CommandWord::Undelivered,
        CommandWord::Cancelled,
        CommandWord::Request,
        CommandWord::Clear,
        CommandWord::AddItem,
        CommandWord::DeleteItem,
        CommandWord::ListItems,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Delete => "delete",
            CommandWord::Edit => "edit",
            CommandWord::List => "list",
            CommandWord::Find => "find",
            CommandWord::Remind => "remind",
            CommandWord::Delivered => DeliveryStatus::Delivered.as_str(),
            CommandWord::Undelivered => DeliveryStatus::Undelivered.as_str(),
            CommandWord::Cancelled => DeliveryStatus::Cancelled.as_str(),
            CommandWord::Request => "request",
            CommandWord::Clear => "clear",
            CommandWord::AddItem => "addItem",
            CommandWord::DeleteItem => "deleteItem",
            CommandWord::ListItems => "listItems",
            CommandWord::Help => "help",
            CommandWord::Exit => "exit",
        }
    }
}

impl FromStr for CommandWord {
    type Err = ParseError;

    /// Keywords are case-sensitive.
    fn from_str(word: &str) -> Result<Self, Self::Err> {
        CommandWord::ALL
            .into_iter()
            .find(|command_word| command_word.as_str() == word)
            .ok_or(ParseError::UnknownCommand)
    }
}

/// Parses a full line of user input.
///
/// # Arguments
///
/// * `input` - The keyword followed by its arguments, e.g. `delete 1 3-4`
///
/// # Examples
///
/// ```
/// use cake_collate_core::command::Command;
/// use cake_collate_core::parser::parse_command;
///
/// assert!(matches!(parse_command("list extra words"), Ok(Command::List(_))));
/// assert!(parse_command("LIST").is_err());
/// ```
///
/// # Errors
///
/// Blank input is an invalid format error carrying the help usage, an
/// unrecognised first word is [`ParseError::UnknownCommand`], and anything
/// else is whatever the selected parser reports.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::invalid_format(HelpCommand::MESSAGE_USAGE));
    }

    let (word, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));
    let command_word = word.parse::<CommandWord>()?;
    debug!("Parsing `{}` command", command_word.as_str());

    let command = match command_word {
        CommandWord::Add => Command::Add(AddCommandParser.parse(args)?),
        CommandWord::Delete => Command::Delete(DeleteCommandParser.parse(args)?),
        CommandWord::Edit => Command::Edit(EditCommandParser.parse(args)?),
        CommandWord::List => Command::List(ListCommand),
        CommandWord::Find => Command::Find(FindCommandParser.parse(args)?),
        CommandWord::Remind => Command::Remind(RemindCommandParser.parse(args)?),
        CommandWord::Delivered => Command::DeliveryStatus(
            DeliveryStatusCommandParser::new(DeliveryStatus::Delivered).parse(args)?,
        ),
        CommandWord::Undelivered => Command::DeliveryStatus(
            DeliveryStatusCommandParser::new(DeliveryStatus::Undelivered).parse(args)?,
        ),
        CommandWord::Cancelled => Command::DeliveryStatus(
            DeliveryStatusCommandParser::new(DeliveryStatus::Cancelled).parse(args)?,
        ),
        CommandWord::Request => Command::Request(RequestCommandParser.parse(args)?),
        CommandWord::Clear => Command::Clear(ClearCommand),
        CommandWord::AddItem => Command::AddOrderItem(AddOrderItemCommandParser.parse(args)?),
        CommandWord::DeleteItem => {
            Command::DeleteOrderItem(DeleteOrderItemCommandParser.parse(args)?)
        }
        CommandWord::ListItems => Command::ListOrderItems(ListOrderItemsCommand),
        CommandWord::Help => Command::Help(HelpCommand),
        CommandWord::Exit => Command::Exit(ExitCommand),
    };

    Ok(command)
}
