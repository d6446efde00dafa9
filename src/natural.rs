//! Serde adapter for natural numbers, used through `#[serde(with = "natural")]`.
//!
//! Values that fit in a `u64` are written as plain numbers, larger ones as decimal strings, so
//! small ordinals keep their natural JSON shape.

use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::shims::*;

pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_u64() {
        Some(small) => serializer.serialize_u64(small),
        None => serializer.collect_str(value),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Small(u64),
        Big(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Small(small) => Ok(BigUint::from(small)),
        Repr::Big(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            BigUint::from_str(&digits).map_err(de::Error::custom)
        }
        Repr::Big(digits) => Err(de::Error::invalid_value(de::Unexpected::Str(&digits), &"a natural number")),
    }
}

/// A natural number that serializes like the fields above; used where `with` cannot be attached.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Natural(#[serde(with = "crate::natural")] pub BigUint);
