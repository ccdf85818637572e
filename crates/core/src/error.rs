use thiserror::Error;

use crate::messages::{
    FILE_OPS_ERROR_MESSAGE, MESSAGE_DUPLICATE_ORDER, MESSAGE_DUPLICATE_ORDER_ITEM,
    MESSAGE_INVALID_COMMAND_FORMAT, MESSAGE_INVALID_INDEX, MESSAGE_INVALID_ORDER_DISPLAYED_INDEX,
    MESSAGE_INVALID_ORDER_ITEM_DISPLAYED_INDEX, MESSAGE_UNKNOWN_COMMAND,
};
use crate::order::{
    Address, DeliveryDate, Email, Name, OrderDescription, OrderItem, Phone, Request, Tag,
};

/// Result of running a line of user input through the router.
pub type Result<T> = std::result::Result<T, Error>;

/// The two failure kinds the router propagates to its caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// A raw value was rejected by a field type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", Name::MESSAGE_CONSTRAINTS)]
    Name,

    #[error("{}", Name::MESSAGE_EMPTY)]
    BlankName,

    #[error("{}", Phone::MESSAGE_CONSTRAINTS)]
    Phone,

    #[error("{}", Email::MESSAGE_CONSTRAINTS)]
    Email,

    #[error("{}", Address::MESSAGE_CONSTRAINTS)]
    Address,

    #[error("{}", DeliveryDate::MESSAGE_CONSTRAINTS)]
    DeliveryDate,

    #[error("{}", OrderDescription::MESSAGE_CONSTRAINTS)]
    OrderDescription,

    #[error("{}", Tag::MESSAGE_CONSTRAINTS)]
    Tag,

    #[error("{}", Request::MESSAGE_CONSTRAINTS)]
    Request,

    #[error("{}", OrderItem::MESSAGE_CONSTRAINTS)]
    OrderItem,
}

/// User input could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, .usage)]
    InvalidCommandFormat {
        usage: String,
        #[source]
        cause: Option<Box<ParseError>>,
    },

    #[error("{}", MESSAGE_INVALID_ORDER_DISPLAYED_INDEX)]
    InvalidOrderDisplayedIndex,

    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex(String),

    #[error("Invalid index range `{}`: the start must not exceed the end and a range may cover at most {} indices", .range, .max_span)]
    InvalidIndexRange { range: String, max_span: usize },

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("Number of days should be a non-negative integer no greater than {}", .0)]
    InvalidDays(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ParseError {
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        Self::InvalidCommandFormat {
            usage: usage.into(),
            cause: None,
        }
    }

    pub fn invalid_format_caused_by(usage: impl Into<String>, cause: ParseError) -> Self {
        Self::InvalidCommandFormat {
            usage: usage.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

/// A well-formed command could not be applied to the model.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_ORDER_DISPLAYED_INDEX)]
    InvalidOrderIndex,

    #[error("{}", MESSAGE_INVALID_ORDER_ITEM_DISPLAYED_INDEX)]
    InvalidOrderItemIndex,

    #[error("{}", MESSAGE_DUPLICATE_ORDER)]
    DuplicateOrder,

    #[error("{}", MESSAGE_DUPLICATE_ORDER_ITEM)]
    DuplicateOrderItem,

    #[error("{}{}", FILE_OPS_ERROR_MESSAGE, .0)]
    Storage(#[source] StorageError),
}

/// Reading or writing one of the data or settings files failed.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        #[source]
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        #[source]
        original: serde_json::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        #[source]
        original: serde_yaml::Error,
    },
}

impl StorageError {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn json_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
