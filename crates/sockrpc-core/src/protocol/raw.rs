//! Serde adapter: `Bytes` payload <-> embedded raw JSON value.
//!
//! Serializing fails if the buffer is not valid JSON. A missing or `null`
//! field deserializes to an empty buffer.

use bytes::Bytes;
use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

pub fn serialize<S: Serializer>(data: &Bytes, s: S) -> Result<S::Ok, S::Error> {
    let raw: &RawValue = serde_json::from_slice(data).map_err(S::Error::custom)?;
    raw.serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Bytes, D::Error> {
    let raw: Option<Box<RawValue>> = Option::deserialize(d)?;
    Ok(raw
        .map(|r| Bytes::copy_from_slice(r.get().as_bytes()))
        .unwrap_or_default())
}
