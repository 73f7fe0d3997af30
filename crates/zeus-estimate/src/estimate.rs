//! Column-inch cost estimation.
//!
//! Notices are set in 7pt type on 6.5pt leading in a single newspaper column.
//! The character count gives a line count, the line count gives a height, and
//! the height is billed in whole 10mm bands with a 50mm minimum. Trustee
//! pricing replaces the band price. Every priced notice carries a fixed
//! surcharge.
//!
//! Lengths are worked in points and converted with [`MM_PER_POINT`] in both
//! directions.

use serde::Serialize;
use zeus_model::{Money, Publication};

use crate::chars::CharCount;

/// Type size in points.
pub const FONT_SIZE_PT: f64 = 7.0;
/// Line spacing in points.
pub const LEADING_PT: f64 = 6.5;
/// Average character width as a fraction of the type size.
pub const AVG_CHAR_WIDTH_FACTOR: f64 = 0.36;
/// Millimetres per typographic point.
pub const MM_PER_POINT: f64 = 0.352778;
/// Shortest billable advertisement.
pub const MINIMUM_HEIGHT_MM: f64 = 50.0;
/// Height of one billing band.
pub const BAND_HEIGHT_MM: f64 = 10.0;
/// Added to every priced notice.
pub const FIXED_SURCHARGE: Money = Money::from_units(60);

/// Physical layout of a notice in one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdLayout {
    pub chars_per_line: f64,
    pub lines: u64,
    /// Height of the set text.
    pub text_height_mm: f64,
    /// Height after the minimum floor.
    pub height_mm: f64,
    /// Whole 10mm bands billed.
    pub bands: u64,
}

/// How a cost was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "basis", rename_all = "lowercase")]
pub enum PricingBasis {
    Column { bands: u64 },
    Trustee,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedCost {
    /// Total including the fixed surcharge.
    pub cost: Money,
    #[serde(flatten)]
    pub basis: PricingBasis,
    /// Present whenever the publication has a usable column width.
    pub layout: Option<AdLayout>,
}

/// Lays out `chars` characters in a column `col_width_mm` wide.
pub fn ad_layout(col_width_mm: f64, chars: CharCount) -> AdLayout {
    let col_width_points = col_width_mm / MM_PER_POINT;
    let avg_char_width = FONT_SIZE_PT * AVG_CHAR_WIDTH_FACTOR;
    let chars_per_line = col_width_points / avg_char_width;
    // A partly filled line still takes a full line.
    let lines = (chars.get() as f64 / chars_per_line).ceil() as u64;
    let text_height_mm = lines as f64 * LEADING_PT * MM_PER_POINT;
    let height_mm = text_height_mm.max(MINIMUM_HEIGHT_MM);
    let bands = (height_mm / BAND_HEIGHT_MM).ceil() as u64;
    AdLayout {
        chars_per_line,
        lines,
        text_height_mm,
        height_mm,
        bands,
    }
}

/// Estimates what a notice of `chars` characters costs in `publication`.
///
/// Returns `None` when the publication cannot be priced: no trustee price and
/// no column width with a column price.
pub fn estimate(publication: &Publication, chars: CharCount) -> Option<EstimatedCost> {
    let layout = publication
        .col_width_mm()
        .map(|width| ad_layout(width, chars));

    let (base, basis) = match (publication.trustee_price(), layout) {
        (Some(trustee), _) => (trustee, PricingBasis::Trustee),
        (None, Some(layout)) => {
            let band_price = publication.col_price()?;
            (
                band_price.checked_mul(layout.bands)?,
                PricingBasis::Column {
                    bands: layout.bands,
                },
            )
        }
        (None, None) => return None,
    };

    Some(EstimatedCost {
        cost: base.checked_add(FIXED_SURCHARGE)?,
        basis,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use zeus_model::PublicationId;

    use super::*;

    fn chars(count: u64) -> CharCount {
        CharCount::new(count).unwrap()
    }

    fn paper() -> Publication {
        Publication::new(PublicationId::new("A").unwrap(), "Gazette", "SW1")
    }

    #[test]
    fn layout_in_thirty_mm_column() {
        let layout = ad_layout(30.0, chars(2000));
        assert!((layout.chars_per_line - 33.745_760_52).abs() < 1e-6);
        assert_eq!(layout.lines, 60);
        assert!((layout.text_height_mm - 137.583_42).abs() < 1e-6);
        assert_eq!(layout.height_mm, layout.text_height_mm);
        assert_eq!(layout.bands, 14);
    }

    #[test]
    fn partial_line_takes_a_full_line() {
        assert_eq!(ad_layout(30.0, chars(33)).lines, 1);
        assert_eq!(ad_layout(30.0, chars(34)).lines, 2);
    }

    #[test]
    fn height_just_over_the_floor_bills_an_extra_band() {
        let layout = ad_layout(30.0, chars(741));
        assert_eq!(layout.lines, 22);
        assert!(layout.height_mm > 50.0 && layout.height_mm < 51.0);
        assert_eq!(layout.bands, 6);
    }

    #[test]
    fn column_price_per_band_plus_surcharge() {
        let publication = paper().with_column("30", "5");
        let estimate = estimate(&publication, chars(2000)).unwrap();
        assert_eq!(estimate.cost.to_fixed_2(), "130.00");
        assert_eq!(estimate.basis, PricingBasis::Column { bands: 14 });
    }

    #[test]
    fn trustee_price_without_column_width() {
        let publication = paper().with_trustee_price("150");
        let estimate = estimate(&publication, chars(300)).unwrap();
        assert_eq!(estimate.cost.to_fixed_2(), "210.00");
        assert_eq!(estimate.basis, PricingBasis::Trustee);
        assert!(estimate.layout.is_none());
    }

    #[test]
    fn zero_trustee_price_falls_through_to_column_price() {
        let publication = paper().with_column("30", "5").with_trustee_price("0");
        let estimate = estimate(&publication, chars(10)).unwrap();
        assert_eq!(estimate.cost.to_fixed_2(), "85.00");

        let publication = paper().with_trustee_price("0");
        assert!(super::estimate(&publication, chars(10)).is_none());
    }

    #[test]
    fn column_width_without_price_is_unpriceable() {
        let mut publication = paper();
        publication.col_width = Some("30".to_string());
        assert!(estimate(&publication, chars(100)).is_none());
    }
}
