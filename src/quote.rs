//! Quote entity and the submission contract
//!
//! The wire payload uses the frontend's field names (`quote`, `quote_author`,
//! `opinion`); the stored record uses the column names (`quote_text`,
//! `quote_author`, `user_opinion`). Identifiers are never exposed on the wire.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted quote row
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    #[serde(skip_serializing)]
    pub id: i64,
    pub quote_text: String,
    pub quote_author: String,
    pub user_opinion: String,
}

/// A quote ready for insertion, all fields checked present and non-empty
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub quote_text: String,
    pub quote_author: String,
    pub user_opinion: String,
}

/// Incoming submission payload, fields optional until validated
#[derive(Debug, Deserialize)]
pub struct SubmitQuote {
    pub quote: Option<String>,
    pub quote_author: Option<String>,
    pub opinion: Option<String>,
}

impl SubmitQuote {
    /// Check all three fields are present and non-empty before anything is
    /// persisted. A missing field is a caller error, never defaulted.
    pub fn validate(self) -> Result<NewQuote> {
        Ok(NewQuote {
            quote_text: required(self.quote, "quote")?,
            quote_author: required(self.quote_author, "quote_author")?,
            user_opinion: required(self.opinion, "opinion")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(quote: Option<&str>, author: Option<&str>, opinion: Option<&str>) -> SubmitQuote {
        SubmitQuote {
            quote: quote.map(String::from),
            quote_author: author.map(String::from),
            opinion: opinion.map(String::from),
        }
    }

    #[test]
    fn test_valid_payload() {
        let new_quote = payload(Some("Be water."), Some("Bruce Lee"), Some("Inspiring"))
            .validate()
            .unwrap();
        assert_eq!(new_quote.quote_text, "Be water.");
        assert_eq!(new_quote.quote_author, "Bruce Lee");
        assert_eq!(new_quote.user_opinion, "Inspiring");
    }

    #[test]
    fn test_missing_author_and_opinion() {
        let err = payload(Some("x"), None, None).validate().unwrap_err();
        assert!(matches!(err, Error::MissingField("quote_author")));
    }

    #[test]
    fn test_empty_field_is_missing() {
        let err = payload(Some("x"), Some("   "), Some("y")).validate().unwrap_err();
        assert!(matches!(err, Error::MissingField("quote_author")));
    }

    #[test]
    fn test_id_not_serialized() {
        let quote = Quote {
            id: 7,
            quote_text: "a".into(),
            quote_author: "b".into(),
            user_opinion: "c".into(),
        };
        let value = serde_json::to_value(&quote).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["quote_text"], "a");
    }
}
