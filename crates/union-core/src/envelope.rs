//! The `{type, value}` wire envelope shared by every arity's codec.
//!
//! A union serializes to a JSON object with exactly two keys:
//!
//! - `type` — the 1-based position of the active variant
//! - `value` — the payload, encoded by that variant type's own serde impl
//!
//! Unknown extra keys are **rejected** (`deny_unknown_fields`); the wire
//! contract allows either policy, and rejecting catches envelope typos the
//! ignore policy would silently drop.
//!
//! The per-arity `Serialize`/`Deserialize` impls are generated alongside the
//! union types themselves (see `macros`), so codec resolution is ordinary
//! static trait dispatch: there is no runtime registry keyed by arity, and an
//! unsupported arity is a missing type rather than a late lookup failure.
//!
//! # Example
//! ```
//! use union_core::{from_json, to_json, Union3};
//!
//! let u: Union3<i64, String, bool> = Union3::from1(42);
//! assert_eq!(to_json(&u).unwrap(), r#"{"type":1,"value":42}"#);
//!
//! let back: Union3<i64, String, bool> = from_json(r#"{"type":2,"value":"hello"}"#).unwrap();
//! assert_eq!(back.get2().unwrap(), "hello");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Raw decoded form of the wire envelope, before the discriminator has been
/// validated against the target union's arity.
///
/// The `type` field deserializes as `u64` on purpose: an out-of-range
/// discriminator like `{"type":5000,...}` must reach the range check and
/// produce the invalid-discriminator message, not an integer-width error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub tag: u64,
    pub value: Value,
}

/// Serialize any union (or other `Serialize` value) to a compact JSON string.
///
/// Serializing an uninitialized union fails: tag 0 has no wire
/// representation.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize a union from its JSON envelope string.
///
/// Wire-format violations (missing or non-numeric `type`, out-of-range
/// discriminator, payload not decodable as the selected variant, unknown
/// extra keys) all surface as [`UnionError::Decode`](crate::UnionError) with
/// a message naming the violated expectation.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Message for a discriminator outside `1..=arity`.
pub(crate) fn bad_discriminator(tag: u64, arity: u8) -> String {
    format!("invalid union discriminator {tag}: expected an integer in 1..={arity}")
}

/// Message for a payload that failed to decode as the variant type selected
/// by the discriminator.
pub(crate) fn bad_payload(tag: u64, ty: &'static str, err: &serde_json::Error) -> String {
    format!("invalid payload for discriminator {tag} (expected {ty}): {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_rejects_unknown_keys() {
        let err = serde_json::from_str::<Envelope>(r#"{"type":1,"value":42,"extra":true}"#)
            .unwrap_err();
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn envelope_requires_numeric_type() {
        let err = serde_json::from_str::<Envelope>(r#"{"type":"1","value":42}"#).unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn envelope_requires_type_field() {
        let err = serde_json::from_str::<Envelope>(r#"{"value":42}"#).unwrap_err();
        assert!(err.to_string().contains("type"));
    }

    #[test]
    fn discriminator_message_names_range() {
        let msg = bad_discriminator(5, 3);
        assert!(msg.contains('5'));
        assert!(msg.contains("1..=3"));
    }
}
