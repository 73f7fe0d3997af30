//! API key authorization.
//!
//! Keys are never stored. The registry holds SHA-256 digests of issued keys
//! along with the scopes each key may use.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

/// A resource and the action requested on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    pub resource: &'static str,
    pub action: &'static str,
}

impl Scope {
    pub const PUBLICATIONS_READ: Scope = Scope {
        resource: "publications",
        action: "read",
    };
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("missing API key")]
    Unauthorized,
    #[error("API key is not permitted to {scope}")]
    Forbidden { scope: Scope },
}

/// Decides whether a presented key may act on a scope.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, key: &str, scope: &Scope) -> Result<(), AccessError>;
}

/// The token of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(char::is_whitespace)?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Lowercase hex SHA-256 digest of `key`, the form keys are configured in.
pub fn hash_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}

fn default_enabled() -> bool {
    true
}

/// One issued key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    pub name: String,
    /// Hex SHA-256 digest of the key.
    pub sha256: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Resource name to permitted actions, e.g. `publications = ["read"]`.
    #[serde(default)]
    pub permissions: BTreeMap<String, Vec<String>>,
}

impl ApiKeyRecord {
    pub fn allows(&self, scope: &Scope) -> bool {
        self.permissions
            .get(scope.resource)
            .is_some_and(|actions| actions.iter().any(|action| action == scope.action))
    }
}

/// [`Authorizer`] over a fixed list of issued keys.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyRegistry {
    keys: Vec<ApiKeyRecord>,
}

impl ApiKeyRegistry {
    pub fn new(keys: Vec<ApiKeyRecord>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Authorizer for ApiKeyRegistry {
    fn authorize(&self, key: &str, scope: &Scope) -> Result<(), AccessError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AccessError::Unauthorized);
        }
        let forbidden = AccessError::Forbidden { scope: *scope };

        let digest = hash_key(key);
        let Some(record) = self
            .keys
            .iter()
            .find(|record| record.sha256.trim().eq_ignore_ascii_case(&digest))
        else {
            warn!(%scope, "unknown API key");
            return Err(forbidden);
        };

        if !record.enabled {
            warn!(key = %record.name, %scope, "disabled API key");
            return Err(forbidden);
        }
        if !record.allows(scope) {
            warn!(key = %record.name, %scope, "API key lacks permission");
            return Err(forbidden);
        }

        debug!(key = %record.name, %scope, "API key authorized");
        Ok(())
    }
}
