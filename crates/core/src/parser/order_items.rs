use crate::command::{AddOrderItemCommand, DeleteOrderItemCommand};
use crate::error::ParseError;
use crate::index::IndexList;
use crate::parser::util::parse_order_item;
use crate::parser::CommandParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddOrderItemCommandParser;

impl CommandParser for AddOrderItemCommandParser {
    type Output = AddOrderItemCommand;

    fn parse(&self, args: &str) -> Result<AddOrderItemCommand, ParseError> {
        if args.trim().is_empty() {
            return Err(ParseError::invalid_format(AddOrderItemCommand::MESSAGE_USAGE));
        }
        Ok(AddOrderItemCommand::new(parse_order_item(args)?))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOrderItemCommandParser;

impl CommandParser for DeleteOrderItemCommandParser {
    type Output = DeleteOrderItemCommand;

    fn parse(&self, args: &str) -> Result<DeleteOrderItemCommand, ParseError> {
        IndexList::parse(args)
            .map(DeleteOrderItemCommand::new)
            .map_err(|error| {
                ParseError::invalid_format_caused_by(DeleteOrderItemCommand::MESSAGE_USAGE, error)
            })
    }
}
