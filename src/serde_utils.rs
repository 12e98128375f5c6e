//! Shared serialization utilities for exchange requests.

use alloy::primitives::Signature;
use serde::{ser::Error as _, ser::SerializeStruct, Serialize, Serializer};

/// Serialize a required field stored as an `Option`.
///
/// An unset value is an error rather than `null`; request encoders check
/// required fields up front, so reaching the error branch means the value was
/// serialized directly through serde.
pub(crate) fn required<T, S>(value: &Option<T>, s: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(s),
        None => Err(S::Error::custom("missing required field")),
    }
}

/// Serialize an Alloy Signature into the {r, s, v} format expected by Hyperliquid API.
///
/// `r` and `s` are written as `0x` hex strings so the structured and binary
/// encodings carry the same scalar types.
pub fn serialize_signature<S>(sig: &Signature, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut state = s.serialize_struct("Signature", 3)?;
    state.serialize_field("r", &format!("{:#x}", sig.r()))?;
    state.serialize_field("s", &format!("{:#x}", sig.s()))?;
    state.serialize_field("v", &(27 + sig.v() as u64))?;
    state.end()
}

pub(crate) fn required_signature<S>(sig: &Option<Signature>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sig {
        Some(sig) => serialize_signature(sig, s),
        None => Err(S::Error::custom("missing required field: signature")),
    }
}
