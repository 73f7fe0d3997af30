use std::collections::BTreeMap;

use zeus_core::{AccessError, ApiKeyRecord, ApiKeyRegistry, Authorizer, Scope, bearer_token, hash_key};

fn record(name: &str, key: &str, actions: &[&str]) -> ApiKeyRecord {
    let mut permissions = BTreeMap::new();
    permissions.insert(
        "publications".to_string(),
        actions.iter().map(ToString::to_string).collect(),
    );
    ApiKeyRecord {
        name: name.to_string(),
        sha256: hash_key(key),
        enabled: true,
        permissions,
    }
}

fn registry() -> ApiKeyRegistry {
    let mut disabled = record("retired", "old-key", &["read"]);
    disabled.enabled = false;
    ApiKeyRegistry::new(vec![
        record("portal", "portal-key", &["read"]),
        record("uploader", "upload-key", &["write"]),
        disabled,
    ])
}

#[test]
fn digest_is_lowercase_hex_sha256() {
    assert_eq!(
        hash_key("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn permitted_key_is_authorized() {
    assert_eq!(registry().authorize("portal-key", &Scope::PUBLICATIONS_READ), Ok(()));
}

#[test]
fn digest_comparison_ignores_case() {
    let mut portal = record("portal", "portal-key", &["read"]);
    portal.sha256 = portal.sha256.to_uppercase();
    let registry = ApiKeyRegistry::new(vec![portal]);
    assert!(registry.authorize("portal-key", &Scope::PUBLICATIONS_READ).is_ok());
}

#[test]
fn missing_key_is_unauthorized() {
    assert_eq!(
        registry().authorize("  ", &Scope::PUBLICATIONS_READ),
        Err(AccessError::Unauthorized)
    );
}

#[test]
fn unknown_disabled_or_unscoped_keys_are_forbidden() {
    let forbidden = Err(AccessError::Forbidden {
        scope: Scope::PUBLICATIONS_READ,
    });
    let registry = registry();
    for key in ["nope", "old-key", "upload-key"] {
        assert_eq!(
            registry.authorize(key, &Scope::PUBLICATIONS_READ),
            forbidden,
            "{key}"
        );
    }
}

#[test]
fn permissions_deserialize_from_toml_shape() {
    let record: ApiKeyRecord = serde_json::from_value(serde_json::json!({
        "name": "portal",
        "sha256": hash_key("k"),
        "permissions": { "publications": ["read"] }
    }))
    .unwrap();
    assert!(record.enabled);
    assert!(record.allows(&Scope::PUBLICATIONS_READ));
}

#[test]
fn bearer_header_parsing() {
    assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
    assert_eq!(bearer_token("  bearer   abc123 "), Some("abc123"));
    assert_eq!(bearer_token("Basic abc123"), None);
    assert_eq!(bearer_token("Bearer"), None);
    assert_eq!(bearer_token("Bearer   "), None);
    assert_eq!(Scope::PUBLICATIONS_READ.to_string(), "publications:read");
}
