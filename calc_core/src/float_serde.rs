//! Serde support for `f64` values that may be non-finite.
//!
//! JSON has no literal for infinity or NaN, and `serde_json` writes them as
//! `null`. Fields using this module write finite values as plain numbers and
//! non-finite ones as the strings `"inf"`, `"-inf"` and `"NaN"`, so every
//! result a [`crate::Calculator`] can produce reads back unchanged.
//!
//! ```
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Sample {
//!     #[serde(with = "calc_core::float_serde")]
//!     value: f64,
//! }
//! ```

use std::fmt;

use serde::{de, Deserializer, Serializer};

/// Serializes `value` as a number when finite, otherwise as a string.
///
/// This function can be used with `serde_derive`'s `with` and
/// `serialize_with` annotations.
pub fn serialize<S>(value: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        s.serialize_f64(*value)
    } else {
        s.serialize_str(&value.to_string())
    }
}

/// Deserializes a number, or one of the strings written by [`serialize`].
///
/// This function can be used with `serde_derive`'s `with` and
/// `deserialize_with` annotations.
pub fn deserialize<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct V;

    impl de::Visitor<'_> for V {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or one of \"inf\", \"-inf\", \"NaN\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    d.deserialize_any(V)
}
