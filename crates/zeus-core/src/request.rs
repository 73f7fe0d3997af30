//! Validation of incoming quote requests.

use serde_json::{Map, Value};
use zeus_estimate::CharCount;
use zeus_postcode::PostcodeParts;

use crate::error::QuoteError;

/// A validated quote request: a postcode that passed the grammar and a
/// positive character count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub postcode: PostcodeParts,
    pub chars: CharCount,
}

impl QuoteRequest {
    pub fn new(postcode: &str, chars: u64) -> Result<Self, QuoteError> {
        let chars = CharCount::new(chars).map_err(|_| QuoteError::InvalidCharCount)?;
        let postcode = zeus_postcode::normalize(postcode)?;
        Ok(Self { postcode, chars })
    }

    /// Validates a raw `{ "postcode": ..., "charCount": ... }` body.
    ///
    /// The body is checked first, then the character count, then the postcode,
    /// so a request with several problems always reports the same one.
    /// `charCount` may be a JSON integer or a string holding one.
    pub fn from_json(body: &str) -> Result<Self, QuoteError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| QuoteError::MalformedBody(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(QuoteError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        };

        let chars = char_count(fields.get("charCount"))?;
        let postcode = postcode(&fields)?;
        Ok(Self { postcode, chars })
    }
}

fn char_count(value: Option<&Value>) -> Result<CharCount, QuoteError> {
    let count = match value {
        Some(Value::Number(number)) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    count
        .and_then(|count| CharCount::new(count).ok())
        .ok_or(QuoteError::InvalidCharCount)
}

fn postcode(fields: &Map<String, Value>) -> Result<PostcodeParts, QuoteError> {
    match fields.get("postcode") {
        None | Some(Value::Null) => Err(QuoteError::MissingPostcode),
        Some(Value::String(raw)) => Ok(zeus_postcode::normalize(raw)?),
        Some(other) => Err(QuoteError::InvalidPostcode(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_body() {
        let request = QuoteRequest::from_json(r#"{"postcode": "sw1a 1aa", "charCount": 300}"#)
            .unwrap();
        assert_eq!(request.postcode.outcode(), "SW1A");
        assert_eq!(request.chars.get(), 300);
    }

    #[test]
    fn char_count_may_be_a_numeric_string() {
        let request =
            QuoteRequest::from_json(r#"{"postcode": "N1", "charCount": " 42 "}"#).unwrap();
        assert_eq!(request.chars.get(), 42);

        let request = QuoteRequest::from_json(r#"{"postcode": "N1", "charCount": 42.0}"#).unwrap();
        assert_eq!(request.chars.get(), 42);
    }

    #[test]
    fn rejects_bad_char_counts() {
        for count in ["0", "-5", "2.5", "\"abc\"", "null", "true", "\"\""] {
            let body = format!(r#"{{"postcode": "N1", "charCount": {count}}}"#);
            assert!(
                matches!(
                    QuoteRequest::from_json(&body),
                    Err(QuoteError::InvalidCharCount)
                ),
                "{count} should be rejected"
            );
        }
        assert!(matches!(
            QuoteRequest::from_json(r#"{"postcode": "N1"}"#),
            Err(QuoteError::InvalidCharCount)
        ));
    }

    #[test]
    fn char_count_is_checked_before_postcode() {
        assert!(matches!(
            QuoteRequest::from_json(r#"{"postcode": "nonsense!", "charCount": 0}"#),
            Err(QuoteError::InvalidCharCount)
        ));
    }

    #[test]
    fn postcode_errors() {
        assert!(matches!(
            QuoteRequest::from_json(r#"{"charCount": 10}"#),
            Err(QuoteError::MissingPostcode)
        ));
        assert!(matches!(
            QuoteRequest::from_json(r#"{"postcode": "  ", "charCount": 10}"#),
            Err(QuoteError::MissingPostcode)
        ));
        assert!(matches!(
            QuoteRequest::from_json(r#"{"postcode": "12345", "charCount": 10}"#),
            Err(QuoteError::InvalidPostcode(raw)) if raw == "12345"
        ));
        assert!(matches!(
            QuoteRequest::from_json(r#"{"postcode": 12345, "charCount": 10}"#),
            Err(QuoteError::InvalidPostcode(_))
        ));
    }

    #[test]
    fn malformed_bodies() {
        for body in ["", "{", "[1, 2]", "\"SW1A 1AA\""] {
            assert!(
                matches!(
                    QuoteRequest::from_json(body),
                    Err(QuoteError::MalformedBody(_))
                ),
                "{body:?} should be malformed"
            );
        }
    }

    #[test]
    fn new_validates_like_from_json() {
        assert!(matches!(
            QuoteRequest::new("SW1A 1AA", 0),
            Err(QuoteError::InvalidCharCount)
        ));
        assert!(matches!(
            QuoteRequest::new("", 10),
            Err(QuoteError::MissingPostcode)
        ));
        assert!(QuoteRequest::new("EC1A 1BB", 1).is_ok());
    }
}
