use proptest::prelude::*;
use zeus_estimate::{
    CharCount, EstimateError, MINIMUM_HEIGHT_MM, PricingBasis, ad_layout, estimate,
};
use zeus_model::{Publication, PublicationId};

fn paper(id: &str) -> Publication {
    Publication::new(PublicationId::new(id).unwrap(), format!("Paper {id}"), "SW1")
}

fn chars(count: u64) -> CharCount {
    CharCount::new(count).unwrap()
}

#[test]
fn char_count_must_be_positive() {
    assert_eq!(CharCount::new(0), Err(EstimateError::NonPositiveCharCount(0)));
    assert_eq!(
        CharCount::try_from(-12_i64),
        Err(EstimateError::NonPositiveCharCount(-12))
    );
    assert_eq!(CharCount::try_from(300_i64).unwrap().get(), 300);
}

#[test]
fn trustee_price_overrides_column_price() {
    let publication = paper("T").with_column("30", "10").with_trustee_price("200");
    let quote = estimate(&publication, chars(500)).unwrap();
    assert_eq!(quote.cost.to_fixed_2(), "260.00");
    assert_eq!(quote.basis, PricingBasis::Trustee);
    assert_eq!(quote.layout.map(|layout| layout.bands), Some(5));
}

#[test]
fn wider_notice_bills_partial_bands_in_full() {
    let publication = paper("W").with_column("45", "12.50");
    let quote = estimate(&publication, chars(1200)).unwrap();
    let layout = quote.layout.unwrap();
    assert_eq!(layout.lines, 24);
    assert!(layout.height_mm > 55.0 && layout.height_mm < 56.0);
    assert_eq!(layout.bands, 6);
    assert_eq!(quote.cost.to_fixed_2(), "135.00");
}

#[test]
fn fractional_prices_render_with_two_decimals() {
    let publication = paper("F").with_column("27", "3.333");
    let quote = estimate(&publication, chars(3000)).unwrap();
    assert_eq!(quote.layout.unwrap().bands, 23);
    // 3.333 * 23 = 76.659, plus 60
    assert_eq!(quote.cost.to_fixed_2(), "136.66");
}

#[test]
fn confirmed_flag_does_not_affect_cost() {
    let unconfirmed = paper("C").with_column("30", "5");
    let confirmed = unconfirmed.clone().with_confirmed(true);
    assert_eq!(
        estimate(&unconfirmed, chars(300)),
        estimate(&confirmed, chars(300))
    );
}

proptest! {
    #[test]
    fn tiny_notices_clamp_to_minimum_height(width in 5.0f64..200.0, price in 1u32..500) {
        let layout = ad_layout(width, chars(1));
        prop_assert_eq!(layout.height_mm, MINIMUM_HEIGHT_MM);
        prop_assert_eq!(layout.bands, 5);

        let publication = paper("P").with_column(width.to_string(), price.to_string());
        let quote = estimate(&publication, chars(1)).unwrap();
        prop_assert_eq!(quote.cost.to_fixed_2(), format!("{}.00", u64::from(price) * 5 + 60));
    }

    #[test]
    fn unpriceable_publications_are_never_priced(count in 1u64..100_000, price in "[0-9]{0,3}") {
        let mut publication = paper("U");
        publication.col_price = (!price.is_empty()).then_some(price);
        prop_assert!(estimate(&publication, chars(count)).is_none());
    }

    #[test]
    fn estimate_is_deterministic(width in 10u32..90, price in 1u32..100, count in 1u64..20_000) {
        let publication = paper("D").with_column(width.to_string(), price.to_string());
        let first = estimate(&publication, chars(count)).unwrap();
        let second = estimate(&publication, chars(count)).unwrap();
        prop_assert_eq!(first.cost.to_fixed_2(), second.cost.to_fixed_2());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn more_text_never_costs_less(width in 10u32..90, count in 1u64..20_000, extra in 0u64..5_000) {
        let publication = paper("M").with_column(width.to_string(), "7.5");
        let shorter = estimate(&publication, chars(count)).unwrap();
        let longer = estimate(&publication, chars(count + extra)).unwrap();
        prop_assert!(longer.cost >= shorter.cost);
    }
}
