use crate::error::CoreError;
use crate::hash::fnv1a_64;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The content-addressed identifier of a shortened URL.
///
/// A `ShortId` is the natural lowercase-hex rendering of the 64-bit
/// FNV-1a hash of the original URL, with no leading-zero padding, so it
/// is 1 to 16 hex digits long. Because the identifier is derived from the
/// content it names, re-submitting the same URL always yields the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortId(String);

const MAX_LENGTH: usize = 16;

impl ShortId {
    /// Derives the identifier for a URL by hashing its UTF-8 bytes.
    pub fn for_url(url: &str) -> Self {
        Self(format!("{:x}", fnv1a_64(url.as_bytes())))
    }

    /// Parses an externally supplied identifier.
    ///
    /// Valid ids are 1-16 characters of lowercase hex. This accepts every
    /// id `for_url` can produce and nothing else.
    pub fn parse(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> Result<(), CoreError> {
        if id.is_empty() || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortId(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only lowercase hex digits: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = ShortId::for_url("https://example.com");
        let b = ShortId::for_url("https://example.com");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "837b2b5793a240b3");
    }

    #[test]
    fn derived_id_round_trips_through_parse() {
        let id = ShortId::for_url("https://www.rust-lang.org/");
        let parsed = ShortId::parse(id.as_str()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn valid_ids() {
        assert!(ShortId::parse("0").is_ok());
        assert!(ShortId::parse("deadbeef").is_ok());
        assert!(ShortId::parse("ffffffffffffffff").is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(ShortId::parse("").is_err());
        assert!(ShortId::parse("f".repeat(17)).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert!(ShortId::parse("DEADBEEF").is_err());
        assert!(ShortId::parse("xyz").is_err());
        assert!(ShortId::parse("abc 123").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        let id = ShortId::for_url("https://example.org");
        assert_eq!(id.to_string(), id.as_str());
    }
}
