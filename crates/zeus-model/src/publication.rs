//! Publication records as stored by the directory collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::decimal::parse_decimal;
use crate::ids::PublicationId;
use crate::money::Money;

/// A newspaper in the publications directory.
///
/// Price and width columns keep the raw decimal text the store hands back;
/// use the typed accessors to read them. Unparseable values read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,
    pub name: String,
    #[serde(default)]
    pub group: String,
    /// Comma-separated outcodes, districts and sectors.
    #[serde(default)]
    pub circulation: String,
    #[serde(default, deserialize_with = "decimal_text")]
    pub hgv_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub premises_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub trustee_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub col_price: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub col_width: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub col2_width: Option<String>,
    #[serde(default)]
    pub circulation_count: Option<i64>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub confirmed: bool,
    #[serde(default)]
    pub is_national_paper: Option<bool>,
    #[serde(default)]
    pub is_paid_paper: Option<bool>,
    #[serde(default)]
    pub paper_contact_name: Option<String>,
    #[serde(default)]
    pub paper_contact_email: Option<String>,
    #[serde(default)]
    pub paper_contact_number: Option<String>,
    #[serde(default)]
    pub paper_voucher_contact_name: Option<String>,
    #[serde(default)]
    pub paper_voucher_contact_number: Option<String>,
    #[serde(default)]
    pub adfast: Option<bool>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub send_artwork: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Publication {
    /// Create a publication with only the identifying fields set.
    pub fn new(id: PublicationId, name: impl Into<String>, circulation: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group: String::new(),
            circulation: circulation.into(),
            hgv_price: None,
            premises_price: None,
            trustee_price: None,
            col_price: None,
            col_width: None,
            col2_width: None,
            circulation_count: None,
            confirmed: false,
            is_national_paper: None,
            is_paid_paper: None,
            paper_contact_name: None,
            paper_contact_email: None,
            paper_contact_number: None,
            paper_voucher_contact_name: None,
            paper_voucher_contact_number: None,
            adfast: None,
            deadline: None,
            special_instructions: None,
            send_artwork: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    #[must_use]
    pub fn with_column(mut self, width_mm: impl Into<String>, price: impl Into<String>) -> Self {
        self.col_width = Some(width_mm.into());
        self.col_price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_trustee_price(mut self, price: impl Into<String>) -> Self {
        self.trustee_price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Column width in millimetres, present only when it is a positive decimal.
    pub fn col_width_mm(&self) -> Option<f64> {
        self.col_width
            .as_deref()
            .and_then(parse_decimal)
            .filter(|width| *width > 0.0)
    }

    /// Price per 10mm band.
    pub fn col_price(&self) -> Option<Money> {
        self.col_price
            .as_deref()
            .and_then(|raw| Money::parse(raw).ok())
    }

    /// Flat override price. A zero price reads as absent.
    pub fn trustee_price(&self) -> Option<Money> {
        self.trustee_price
            .as_deref()
            .and_then(|raw| Money::parse(raw).ok())
            .filter(|price| !price.is_zero())
    }

    /// Whether the cost estimator can price this publication.
    pub fn is_priceable(&self) -> bool {
        self.trustee_price().is_some()
            || (self.col_width_mm().is_some() && self.col_price().is_some())
    }
}

/// Decimal columns arrive as strings from SQL numerics, but hand-edited
/// directories may carry plain JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalValue {
    Text(String),
    Int(i64),
    Float(f64),
}

fn decimal_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DecimalValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(DecimalValue::Text(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Some(DecimalValue::Int(value)) => Some(value.to_string()),
        Some(DecimalValue::Float(value)) => Some(value.to_string()),
        None => None,
    })
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> PublicationId {
        PublicationId::new(value).unwrap()
    }

    #[test]
    fn zero_trustee_price_reads_as_absent() {
        let publication = Publication::new(id("A"), "Gazette", "SW1").with_trustee_price("0");
        assert!(publication.trustee_price().is_none());
        let publication = publication.with_trustee_price("0.00");
        assert!(publication.trustee_price().is_none());
        assert!(!publication.is_priceable());
    }

    #[test]
    fn unparseable_decimals_read_as_absent() {
        let publication = Publication::new(id("A"), "Gazette", "SW1").with_column("wide", "cheap");
        assert!(publication.col_width_mm().is_none());
        assert!(publication.col_price().is_none());
        assert!(!publication.is_priceable());
    }

    #[test]
    fn non_positive_column_width_reads_as_absent() {
        let publication = Publication::new(id("A"), "Gazette", "SW1").with_column("0", "5");
        assert!(publication.col_width_mm().is_none());
    }

    #[test]
    fn column_width_without_price_is_not_priceable() {
        let mut publication = Publication::new(id("A"), "Gazette", "SW1");
        publication.col_width = Some("30".to_string());
        assert!(!publication.is_priceable());
        assert!(publication.with_trustee_price("150").is_priceable());
    }
}
