use crate::command::{FindCommand, RemindCommand};
use crate::error::ParseError;
use crate::parser::CommandParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct FindCommandParser;

impl CommandParser for FindCommandParser {
    type Output = FindCommand;

    fn parse(&self, args: &str) -> Result<FindCommand, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(FindCommand::MESSAGE_USAGE));
        }
        Ok(FindCommand::new(keywords))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemindCommandParser;

impl CommandParser for RemindCommandParser {
    type Output = RemindCommand;

    fn parse(&self, args: &str) -> Result<RemindCommand, ParseError> {
        let args = args.trim();
        if args.is_empty() || !args.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::invalid_format(RemindCommand::MESSAGE_USAGE));
        }

        match args.parse::<u32>() {
            Ok(days) if days <= RemindCommand::MAX_DAYS => Ok(RemindCommand::new(days)),
            _ => Err(ParseError::InvalidDays(RemindCommand::MAX_DAYS)),
        }
    }
}
