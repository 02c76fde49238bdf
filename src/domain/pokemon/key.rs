//! Case-insensitive lookup key for Pokémon names

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Pattern accepted for Pokémon identifiers: names (`mr-mime`) or dex numbers (`25`)
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Validates a raw identifier as received from a caller
pub fn validate_identifier(identifier: &str) -> Result<(), DomainError> {
    if identifier.trim().is_empty() {
        return Err(DomainError::invalid_input("name is required"));
    }

    if !NAME_PATTERN.is_match(identifier) {
        return Err(DomainError::invalid_input(
            "name must be alphanumeric or dash",
        ));
    }

    Ok(())
}

/// Validated, lower-cased Pokémon identifier
///
/// Two identifiers that differ only in case produce equal keys, so they
/// share a single cache entry and a single upstream URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LookupKey(String);

impl LookupKey {
    /// Create a new key, validating and normalizing the identifier
    pub fn new(identifier: impl AsRef<str>) -> Result<Self, DomainError> {
        let identifier = identifier.as_ref();
        validate_identifier(identifier)?;
        Ok(Self(identifier.to_lowercase()))
    }

    /// Get the normalized key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LookupKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LookupKey> for String {
    fn from(key: LookupKey) -> Self {
        key.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LookupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
