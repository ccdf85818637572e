use crate::command::RequestCommand;
use crate::error::ParseError;
use crate::index::Index;
use crate::parser::tokenizer::{tokenize, PREFIX_REQUEST};
use crate::parser::util::parse_request;
use crate::parser::CommandParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestCommandParser;

impl CommandParser for RequestCommandParser {
    type Output = RequestCommand;

    fn parse(&self, args: &str) -> Result<RequestCommand, ParseError> {
        let multimap = tokenize(args, &[PREFIX_REQUEST]);

        let Some(request) = multimap.value(PREFIX_REQUEST) else {
            return Err(ParseError::invalid_format(RequestCommand::MESSAGE_USAGE));
        };
        let index = Index::parse(multimap.preamble()).map_err(|error| {
            ParseError::invalid_format_caused_by(RequestCommand::MESSAGE_USAGE, error)
        })?;

        Ok(RequestCommand::new(index, parse_request(request)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Request;

    #[test]
    fn test_request() {
        let command = RequestCommandParser.parse("1 r/ Less sugar ").unwrap();
        assert_eq!(
            command,
            RequestCommand::new(
                Index::from_one_based(1).unwrap(),
                Request::new("Less sugar").unwrap()
            )
        );

        let command = RequestCommandParser.parse("2 r/").unwrap();
        assert!(command.request().is_empty());
    }

    #[test]
    fn test_invalid_format() {
        let expected = format!("Invalid command format! \n{}", RequestCommand::MESSAGE_USAGE);
        for args in ["1", "r/abc", "x r/abc", ""] {
            assert_eq!(
                RequestCommandParser.parse(args).unwrap_err().to_string(),
                expected,
                "args: {args:?}"
            );
        }
    }
}
