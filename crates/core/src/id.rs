//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog product (e.g. `p001`, `d001`).
///
/// Product ids are short human-typed codes, so they are strings rather than
/// UUIDs. Surrounding whitespace is trimmed on parse; an empty id is invalid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Build an id from a known-good code.
    ///
    /// Prefer `str::parse` for user input; this constructor does not validate.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if code.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id(format!(
                "ProductId: contains whitespace: {code:?}"
            )));
        }
        Ok(Self(code.to_string()))
    }
}

/// Identifier of a checkout receipt.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ReceiptId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("ReceiptId: {e}")))?;
        Ok(Self(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parse_trims_whitespace() {
        let id: ProductId = "  p001 ".parse().unwrap();
        assert_eq!(id.as_str(), "p001");
        assert_eq!(id.to_string(), "p001");
    }

    #[test]
    fn product_id_parse_rejects_empty() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for blank product id"),
        }
    }

    #[test]
    fn product_id_parse_rejects_inner_whitespace() {
        assert!("p 001".parse::<ProductId>().is_err());
    }

    #[test]
    fn product_id_serializes_transparently() {
        let id = ProductId::new("d001");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"d001\"");
    }

    #[test]
    fn receipt_id_round_trips_through_display() {
        let id = ReceiptId::new();
        let parsed: ReceiptId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn receipt_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ReceiptId>().is_err());
    }
}
