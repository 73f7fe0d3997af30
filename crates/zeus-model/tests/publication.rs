use zeus_model::{Money, Publication, PublicationId};

#[test]
fn deserializes_directory_record_with_defaults() {
    let json = r#"{
        "id": "pub-42",
        "name": "Evening Standard",
        "group": "London",
        "circulation": "SW1, SW1A, EC1"
    }"#;
    let publication: Publication = serde_json::from_str(json).expect("parse publication");
    assert_eq!(publication.id, PublicationId::new("pub-42").unwrap());
    assert_eq!(publication.group, "London");
    assert!(!publication.confirmed);
    assert!(publication.col_width.is_none());
    assert!(publication.created_at.is_none());
    assert!(!publication.is_priceable());
}

#[test]
fn null_confirmed_defaults_to_false() {
    let json = r#"{"id": "A", "name": "Gazette", "circulation": "N1", "confirmed": null}"#;
    let publication: Publication = serde_json::from_str(json).expect("parse publication");
    assert!(!publication.confirmed);
}

#[test]
fn decimal_columns_accept_strings_and_numbers() {
    let json = r#"{
        "id": "A",
        "name": "Gazette",
        "circulation": "N1",
        "colWidth": 30,
        "colPrice": "4.35",
        "trusteePrice": 150.5,
        "col2Width": "  ",
        "confirmed": true,
        "createdAt": "2024-05-01T09:30:00Z"
    }"#;
    let publication: Publication = serde_json::from_str(json).expect("parse publication");
    assert_eq!(publication.col_width.as_deref(), Some("30"));
    assert_eq!(publication.col_width_mm(), Some(30.0));
    assert_eq!(publication.col_price(), Some(Money::parse("4.35").unwrap()));
    assert_eq!(publication.trustee_price().map(Money::to_fixed_2).as_deref(), Some("150.50"));
    assert!(publication.col2_width.is_none());
    assert!(publication.confirmed);
    assert!(publication.created_at.is_some());
}

#[test]
fn serializes_camel_case_storage_shape() {
    let publication = Publication::new(PublicationId::new("A").unwrap(), "Gazette", "N1")
        .with_group("North")
        .with_trustee_price("150");
    let json = serde_json::to_value(&publication).expect("serialize publication");
    assert_eq!(json["trusteePrice"], "150");
    assert_eq!(json["colWidth"], serde_json::Value::Null);
    assert_eq!(json["group"], "North");
    assert!(json.get("paperContactEmail").is_some());
}

#[test]
fn rejects_blank_id() {
    let json = r#"{"id": "  ", "name": "Gazette"}"#;
    assert!(serde_json::from_str::<Publication>(json).is_err());
}
