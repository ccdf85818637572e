use std::collections::BTreeSet;

use crate::command::{EditCommand, EditOrderDescriptor};
use crate::error::ParseError;
use crate::index::Index;
use crate::order::Tag;
use crate::parser::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_DELIVERY_DATE, PREFIX_EMAIL, PREFIX_NAME,
    PREFIX_ORDER_DESCRIPTION, PREFIX_PHONE, PREFIX_TAG,
};
use crate::parser::util::{
    parse_address, parse_delivery_date, parse_email, parse_name, parse_order_descriptions,
    parse_phone, parse_tags,
};
use crate::parser::CommandParser;

#[derive(Debug, Clone, Copy, Default)]
pub struct EditCommandParser;

impl CommandParser for EditCommandParser {
    type Output = EditCommand;

    fn parse(&self, args: &str) -> Result<EditCommand, ParseError> {
        let multimap = tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_ADDRESS,
                PREFIX_ORDER_DESCRIPTION,
                PREFIX_TAG,
                PREFIX_DELIVERY_DATE,
            ],
        );

        let index = Index::parse(multimap.preamble())
            .map_err(|error| ParseError::invalid_format_caused_by(EditCommand::MESSAGE_USAGE, error))?;

        let descriptor = EditOrderDescriptor {
            name: multimap.value(PREFIX_NAME).map(parse_name).transpose()?,
            phone: multimap.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: multimap.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: multimap.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            order_descriptions: if multimap.contains(PREFIX_ORDER_DESCRIPTION) {
                Some(parse_order_descriptions(
                    multimap.all_values(PREFIX_ORDER_DESCRIPTION),
                )?)
            } else {
                None
            },
            tags: parse_tags_for_edit(multimap.all_values(PREFIX_TAG))?,
            delivery_date: multimap
                .value(PREFIX_DELIVERY_DATE)
                .map(parse_delivery_date)
                .transpose()?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NothingToEdit);
        }

        Ok(EditCommand::new(index, descriptor))
    }
}

/// No `t/` leaves tags alone; a single empty `t/` clears them.
fn parse_tags_for_edit(raw: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match raw {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(raw).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::order::{Name, Phone};

    fn parse(args: &str) -> Result<EditCommand, ParseError> {
        EditCommandParser.parse(args)
    }

    #[test]
    fn test_edit_some_fields() {
        let command = parse("2 n/Amy Bee p/ 123 ").unwrap();
        let expected = EditOrderDescriptor {
            name: Some(Name::new("Amy Bee").unwrap()),
            phone: Some(Phone::new("123").unwrap()),
            ..Default::default()
        };
        assert_eq!(
            command,
            EditCommand::new(Index::from_one_based(2).unwrap(), expected)
        );
    }

    #[test]
    fn test_empty_tag_clears() {
        let command = parse("1 t/").unwrap();
        assert_eq!(command.descriptor().tags, Some(BTreeSet::new()));

        let command = parse("1 t/a t/b").unwrap();
        assert_eq!(command.descriptor().tags.as_ref().map(BTreeSet::len), Some(2));
    }

    #[test]
    fn test_bad_preamble() {
        for args in ["n/Amy", "0 n/Amy", "-5 n/Amy", "1 some text n/Amy"] {
            assert_eq!(
                parse(args).unwrap_err().to_string(),
                format!("Invalid command format! \n{}", EditCommand::MESSAGE_USAGE),
                "args: {args:?}"
            );
        }
    }

    #[test]
    fn test_nothing_to_edit() {
        assert_eq!(parse("1"), Err(ParseError::NothingToEdit));
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(parse("1 e/not-an-email"), Err(ValidationError::Email.into()));
        assert_eq!(parse("1 o/"), Err(ValidationError::OrderDescription.into()));
    }
}
