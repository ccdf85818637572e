//! Self-validating wrappers for the text attributes of an order.
//!
//! Every type follows the same shape: `new` checks the raw value against
//! `is_valid` and fails with the type's fixed [`ValidationError`], `Display`
//! returns the wrapped value verbatim, and serde goes through the same check
//! so a hand-edited data file cannot smuggle in an invalid value.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! string_value {
    ($name:ident, $error:expr) => {
        impl $name {
            /// # Errors
            ///
            /// Returns the type's [`ValidationError`] if the value is rejected by `is_valid`.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err($error)
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Characters that end a line; none of the single-line fields may contain them.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

fn starts_with_non_whitespace(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Customer name on an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MAX_LENGTH: usize = 80;
    pub const MESSAGE_CONSTRAINTS: &'static str = "ERROR: Name cannot exceed 80 characters.";
    pub const MESSAGE_EMPTY: &'static str = "ERROR: Name cannot be blank.";

    /// Between 1 and 80 characters on a single line.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        let length = value.chars().count();
        (1..=Self::MAX_LENGTH).contains(&length) && !value.chars().any(is_line_terminator)
    }
}

string_value!(Name, ValidationError::Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be between 3 and 20 digits long";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        (3..=20).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit())
    }
}

string_value!(Phone, ValidationError::Phone);

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]+(?:[+_.\-][a-zA-Z0-9]+)*@(?:[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*\.)*[a-zA-Z0-9]{2,}(?:-[a-zA-Z0-9]+)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels separated by periods.\n\
         The domain name must:\n    \
         - end with a domain label at least 2 characters long\n    \
         - have each domain label start and end with alphanumeric characters\n    \
         - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

string_value!(Email, ValidationError::Email);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        starts_with_non_whitespace(value)
    }
}

string_value!(Address, ValidationError::Address);

/// One line item of an order, e.g. `2 x Chocolate Cake`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderDescription(String);

impl OrderDescription {
    pub const MAX_LENGTH: usize = 150;
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Order descriptions should not be blank and should not exceed 150 characters";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        starts_with_non_whitespace(value) && value.chars().count() <= Self::MAX_LENGTH
    }

    /// The description without a leading quantity such as `2 x `.
    #[must_use]
    pub fn item_name(&self) -> &str {
        let digits = self.0.len() - self.0.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return self.0.trim();
        }

        let rest = self.0[digits..].trim_start();
        let name = rest
            .strip_prefix(&['x', 'X'][..])
            .filter(|after| after.starts_with(char::is_whitespace))
            .map(str::trim);

        match name {
            Some(name) if !name.is_empty() => name,
            _ => self.0.trim(),
        }
    }
}

string_value!(OrderDescription, ValidationError::OrderDescription);

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{Nd}]+$").expect("tag pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        TAG_REGEX.is_match(value)
    }
}

string_value!(Tag, ValidationError::Tag);

/// Free-text note attached to an order. Empty means no request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Request(String);

impl Request {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Requests should fit on a single line";

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        !value.chars().any(is_line_terminator)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

string_value!(Request, ValidationError::Request);
