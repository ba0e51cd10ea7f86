//! Decoding for the closed code enumerations of the forecast document.
//!
//! The service may introduce new parameter names or level types at any time, so
//! these fields never fail a decode: anything outside the known mapping becomes
//! the enumeration's `Unknown` variant.

use serde::de::{Deserialize, Deserializer, IgnoredAny};
use serde::Serializer;

/// A closed enumeration of string codes with a designated fallback variant.
///
/// Matching is exact and case-sensitive against the entries of [`TolerantCode::KNOWN`].
/// The empty string, unlisted codes and non-string values all map to
/// [`TolerantCode::UNKNOWN`].
pub trait TolerantCode: Sized + Copy + PartialEq + 'static {
    /// The variant produced for every token outside [`TolerantCode::KNOWN`].
    const UNKNOWN: Self;

    /// Accepted wire tokens and the variant each one maps to. A variant may be
    /// listed more than once when the service has used several spellings.
    const KNOWN: &'static [(&'static str, Self)];

    /// The canonical wire code. `UNKNOWN` encodes as the empty string.
    fn code(&self) -> &'static str;

    /// Maps a raw token to its variant. Never fails.
    fn from_code(token: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|(code, _)| *code == token)
            .map(|(_, variant)| *variant)
            .unwrap_or(Self::UNKNOWN)
    }

    /// Whether this is the fallback variant.
    fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawToken {
    Code(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Deserializes any JSON value into a [`TolerantCode`].
///
/// Only a syntactically broken document can make this fail; every well-formed
/// value resolves to a variant.
pub(crate) fn deserialize_tolerant<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TolerantCode,
{
    Ok(match RawToken::deserialize(deserializer)? {
        RawToken::Code(token) => T::from_code(&token),
        RawToken::Other(IgnoredAny) => T::UNKNOWN,
    })
}

pub(crate) fn serialize_code<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: TolerantCode,
{
    serializer.serialize_str(value.code())
}
