use crate::command::AddCommand;
use crate::error::ParseError;
use crate::order::{DeliveryStatus, Order};
use crate::parser::tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_DELIVERY_DATE, PREFIX_EMAIL, PREFIX_NAME,
    PREFIX_ORDER_DESCRIPTION, PREFIX_PHONE, PREFIX_REQUEST, PREFIX_TAG,
};
use crate::parser::util::{
    parse_address, parse_delivery_date, parse_email, parse_name, parse_order_descriptions,
    parse_phone, parse_request, parse_tags,
};
use crate::parser::CommandParser;

const REQUIRED: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_ORDER_DESCRIPTION,
    PREFIX_DELIVERY_DATE,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AddCommandParser;

impl CommandParser for AddCommandParser {
    type Output = AddCommand;

    fn parse(&self, args: &str) -> Result<AddCommand, ParseError> {
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
                PREFIX_REQUEST,
            ],
        );

        if !multimap.contains_all(&REQUIRED) || !multimap.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
        }
        let required = |prefix: Prefix| multimap.value(prefix).unwrap_or_default();

        let order = Order {
            name: parse_name(required(PREFIX_NAME))?,
            phone: parse_phone(required(PREFIX_PHONE))?,
            email: parse_email(required(PREFIX_EMAIL))?,
            address: parse_address(required(PREFIX_ADDRESS))?,
            order_descriptions: parse_order_descriptions(
                multimap.all_values(PREFIX_ORDER_DESCRIPTION),
            )?,
            tags: parse_tags(multimap.all_values(PREFIX_TAG))?,
            delivery_date: parse_delivery_date(required(PREFIX_DELIVERY_DATE))?,
            request: multimap
                .value(PREFIX_REQUEST)
                .map(parse_request)
                .transpose()?
                .unwrap_or_default(),
            delivery_status: DeliveryStatus::Undelivered,
        };

        Ok(AddCommand::new(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::order::Request;
    use crate::testing::bob;

    const BOB: &str = " n/Bob Choo p/22222222 e/bobchoo@example.com a/Block 123, Bob Choo Street \
o/1 x Black Forest Cake o/2 x Strawberry Cake t/friends d/02/01/2100";

    fn parse(args: &str) -> Result<AddCommand, ParseError> {
        AddCommandParser.parse(args)
    }

    #[test]
    fn test_all_fields_present() {
        assert_eq!(parse(BOB), Ok(AddCommand::new(bob())));
    }

    #[test]
    fn test_request_and_alternative_date_format() {
        let args = BOB.replace("d/02/01/2100", "d/2-1-2100 r/ Less sugar ");
        let command = parse(&args).unwrap();
        let expected = bob().with_request(Request::new("Less sugar").unwrap());
        assert_eq!(command.order(), &expected);
    }

    #[test]
    fn test_repeated_single_value_uses_last() {
        let args = format!("n/Someone Else{BOB}");
        assert_eq!(parse(&args), Ok(AddCommand::new(bob())));
    }

    #[test]
    fn test_missing_prefix() {
        let expected = Err(ParseError::invalid_format(AddCommand::MESSAGE_USAGE));
        assert_eq!(parse(&BOB.replace("p/", "")), expected);
        assert_eq!(parse(&BOB.replace("o/", "x/")), expected);
        assert_eq!(parse(&format!("preamble{BOB}")), expected);
    }

    #[test]
    fn test_invalid_field_values() {
        assert_eq!(
            parse(&BOB.replace("p/22222222", "p/22a")),
            Err(ValidationError::Phone.into())
        );
        assert_eq!(
            parse(&BOB.replace("n/Bob Choo", "n/ ")),
            Err(ValidationError::BlankName.into())
        );
        assert_eq!(
            parse(&BOB.replace("t/friends", "t/best friends")),
            Err(ValidationError::Tag.into())
        );
        assert_eq!(
            parse(&BOB.replace("d/02/01/2100", "d/31/02/2100")),
            Err(ValidationError::DeliveryDate.into())
        );
    }
}
