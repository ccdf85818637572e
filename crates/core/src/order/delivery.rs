use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Formats accepted when reading a delivery date, the first one is also the display format.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// Day an order is due, always displayed as `dd/mm/yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeliveryDate(NaiveDate);

impl DeliveryDate {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Delivery dates should be in the format dd/mm/yyyy and be a valid calendar date";

    /// # Errors
    ///
    /// Returns [`ValidationError::DeliveryDate`] if the text is not a real date in an accepted format.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .ok_or(ValidationError::DeliveryDate)
            .and_then(Self::from_date)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::DeliveryDate`] for years outside 1000 to 9999.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        if (1000..=9999).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(ValidationError::DeliveryDate)
        }
    }

    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for DeliveryDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.format(DATE_FORMATS[0]))
    }
}

impl TryFrom<String> for DeliveryDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DeliveryDate> for String {
    fn from(value: DeliveryDate) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    #[default]
    Undelivered,
    Delivered,
    Cancelled,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Undelivered,
        DeliveryStatus::Delivered,
        DeliveryStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Undelivered => "undelivered",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_date_formats_are_normalized() {
        for raw in ["13/05/2100", "13-05-2100", "13.05.2100", "13/5/2100"] {
            let date = DeliveryDate::new(raw).unwrap();
            assert_eq!(date.to_string(), "13/05/2100");
        }
    }

    #[test]
    fn test_delivery_date_rejects_invalid() {
        assert!(!DeliveryDate::is_valid(""));
        assert!(!DeliveryDate::is_valid("31/02/2022"));
        assert!(!DeliveryDate::is_valid("2022/05/13"));
        assert!(!DeliveryDate::is_valid("13 May 2022"));
        assert!(!DeliveryDate::is_valid("13/05/999"));
        assert_eq!(
            DeliveryDate::new("tomorrow").unwrap_err().to_string(),
            DeliveryDate::MESSAGE_CONSTRAINTS
        );
    }

    #[test]
    fn test_delivery_date_leap_day() {
        assert!(DeliveryDate::is_valid("29/02/2024"));
        assert!(!DeliveryDate::is_valid("29/02/2023"));
    }

    #[test]
    fn test_delivery_date_ordering() {
        let earlier = DeliveryDate::new("01/01/2030").unwrap();
        let later = DeliveryDate::new("02/01/2030").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_delivery_status_serialization() {
        let json = serde_json::to_string(&DeliveryStatus::Delivered).unwrap();
        assert_eq!(json, "\"DELIVERED\"");
        let status: DeliveryStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, DeliveryStatus::Cancelled);
        assert_eq!(DeliveryStatus::default(), DeliveryStatus::Undelivered);
    }
}
