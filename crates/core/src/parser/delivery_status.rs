use crate::command::DeliveryStatusCommand;
use crate::error::ParseError;
use crate::index::IndexList;
use crate::order::DeliveryStatus;
use crate::parser::CommandParser;

/// Parser for the keyword of one delivery status, bound to that status.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryStatusCommandParser {
    status: DeliveryStatus,
}

impl DeliveryStatusCommandParser {
    #[must_use]
    pub fn new(status: DeliveryStatus) -> Self {
        Self { status }
    }
}

impl CommandParser for DeliveryStatusCommandParser {
    type Output = DeliveryStatusCommand;

    fn parse(&self, args: &str) -> Result<DeliveryStatusCommand, ParseError> {
        IndexList::parse(args)
            .map(|indices| DeliveryStatusCommand::new(indices, self.status))
            .map_err(|error| {
                ParseError::invalid_format_caused_by(
                    DeliveryStatusCommand::usage(self.status),
                    error,
                )
            })
    }
}
