use crate::command::DeleteCommand;
use crate::error::ParseError;
use crate::index::{IndexList, MAX_INDEX_DIGITS};
use crate::parser::CommandParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteCommandParser;

impl CommandParser for DeleteCommandParser {
    type Output = DeleteCommand;

    /// A failed parse of a single all-digit number longer than
    /// [`MAX_INDEX_DIGITS`] reports an invalid order index instead of the
    /// usage, since the user clearly meant an index.
    fn parse(&self, args: &str) -> Result<DeleteCommand, ParseError> {
        let trimmed = args.trim();
        let looks_like_long_index =
            trimmed.chars().all(|c| c.is_ascii_digit()) && trimmed.len() > MAX_INDEX_DIGITS;

        match IndexList::parse(args) {
            Ok(indices) => Ok(DeleteCommand::new(indices)),
            Err(_) if looks_like_long_index => Err(ParseError::InvalidOrderDisplayedIndex),
            Err(error) => Err(ParseError::invalid_format_caused_by(
                DeleteCommand::MESSAGE_USAGE,
                error,
            )),
        }
    }
}
