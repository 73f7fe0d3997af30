use serde::{Deserialize, Serialize};

use crate::ids::PublicationId;
use crate::money::Money;
use crate::publication::Publication;

/// A matched publication together with its estimated cost.
///
/// Serialized in the shape consumers of the quote endpoint expect: the cost as
/// a two-decimal string and the raw directory record under `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedPublication {
    pub id: PublicationId,
    pub name: String,
    pub cost: Money,
    pub col_width: Option<String>,
    pub confirmed: bool,
    #[serde(rename = "result")]
    pub record: Publication,
}

impl PricedPublication {
    pub fn new(record: Publication, cost: Money) -> Self {
        let col_width = record
            .col_width_mm()
            .and(record.col_width.clone());
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            cost,
            col_width,
            confirmed: record.confirmed,
            record,
        }
    }
}
