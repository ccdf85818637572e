//! Trimming constructors for field values typed by the user.

use std::collections::BTreeSet;

use crate::error::{ParseError, ValidationError};
use crate::order::{
    Address, DeliveryDate, Email, Name, OrderDescription, OrderItem, Phone, Request, Tag,
};

/// # Errors
///
/// Blank input gets [`ValidationError::BlankName`], anything else invalid [`ValidationError::Name`].
pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName.into());
    }
    Ok(Name::new(trimmed)?)
}

/// # Errors
///
/// Returns the phone constraint error.
pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

/// # Errors
///
/// Returns the email constraint error.
pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::new(raw.trim())?)
}

/// # Errors
///
/// Returns the address constraint error.
pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

/// # Errors
///
/// Returns the delivery date constraint error.
pub fn parse_delivery_date(raw: &str) -> Result<DeliveryDate, ParseError> {
    Ok(DeliveryDate::new(raw.trim())?)
}

/// # Errors
///
/// Returns the request constraint error.
pub fn parse_request(raw: &str) -> Result<Request, ParseError> {
    Ok(Request::new(raw.trim())?)
}

/// # Errors
///
/// Returns the order item constraint error.
pub fn parse_order_item(raw: &str) -> Result<OrderItem, ParseError> {
    Ok(OrderItem::new(raw.trim())?)
}

/// # Errors
///
/// Fails on the first description that is not valid.
pub fn parse_order_descriptions(
    raw: &[String],
) -> Result<BTreeSet<OrderDescription>, ParseError> {
    raw.iter()
        .map(|description| OrderDescription::new(description.trim()).map_err(ParseError::from))
        .collect()
}

/// # Errors
///
/// Fails on the first tag that is not valid.
pub fn parse_tags(raw: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    raw.iter()
        .map(|tag| Tag::new(tag.trim()).map_err(ParseError::from))
        .collect()
}
