//! The items of a sequence to be formatted.
//!
//! A [`FormatValue`] is one item of the sequence handed to the formatter. Most items are
//! machine integers; numbers beyond `i64` are kept as [`BigInt`] and written in plain
//! decimal, and pre-rendered text is passed through verbatim.
//!
//! ## Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use xsl_numbering::FormatValue;
//!
//! assert_eq!(FormatValue::from(7), FormatValue::Integer(7));
//! assert!(FormatValue::from(u64::MAX).is_bigint());
//! assert_eq!(FormatValue::from("n/a").as_str(), Some("n/a"));
//!
//! let big: BigInt = "123456789012345678901234567890".parse().unwrap();
//! assert_eq!(FormatValue::from(big).to_string(), "123456789012345678901234567890");
//! ```

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One item of a sequence to format.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatValue {
    /// Formatted through the format token.
    Integer(i64),
    /// Too large for a format token; written as plain decimal.
    BigInt(BigInt),
    /// Written verbatim.
    Text(String),
}

impl FormatValue {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, FormatValue::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, FormatValue::BigInt(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, FormatValue::Text(_))
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FormatValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            FormatValue::BigInt(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FormatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FormatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatValue::Integer(n) => write!(f, "{}", n),
            FormatValue::BigInt(n) => write!(f, "{}", n),
            FormatValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! from_lossless_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FormatValue {
                fn from(value: $t) -> Self {
                    FormatValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

from_lossless_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FormatValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => FormatValue::Integer(n),
            Err(_) => FormatValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<usize> for FormatValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => FormatValue::Integer(n),
            Err(_) => FormatValue::BigInt(BigInt::from(value)),
        }
    }
}

impl From<i128> for FormatValue {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(n) => FormatValue::Integer(n),
            Err(_) => FormatValue::BigInt(BigInt::from(value)),
        }
    }
}

/// Narrows to [`FormatValue::Integer`] when the value fits in an `i64`.
impl From<BigInt> for FormatValue {
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(n) => FormatValue::Integer(n),
            Err(_) => FormatValue::BigInt(value),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(value: &str) -> Self {
        FormatValue::Text(value.to_string())
    }
}

impl From<String> for FormatValue {
    fn from(value: String) -> Self {
        FormatValue::Text(value)
    }
}

impl Serialize for FormatValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FormatValue::Integer(n) => serializer.serialize_i64(*n),
            FormatValue::BigInt(n) => serializer.serialize_str(&n.to_string()),
            FormatValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FormatValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct FormatValueVisitor;

        impl<'de> Visitor<'de> for FormatValueVisitor {
            type Value = FormatValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FormatValue::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(FormatValue::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(FormatValue::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(FormatValue::from(BigInt::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
                    Ok(FormatValue::Integer(value as i64))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(value), &self))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(FormatValue::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(FormatValue::Text(value))
            }
        }

        deserializer.deserialize_any(FormatValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(FormatValue::from(-5i8), FormatValue::Integer(-5));
        assert_eq!(FormatValue::from(42u32), FormatValue::Integer(42));
        assert_eq!(FormatValue::from(3usize), FormatValue::Integer(3));
        assert_eq!(
            FormatValue::from(u64::MAX),
            FormatValue::BigInt(BigInt::from(u64::MAX))
        );
        assert_eq!(FormatValue::from(BigInt::from(12)), FormatValue::Integer(12));
        assert_eq!(
            FormatValue::from(String::from("x")),
            FormatValue::Text("x".to_string())
        );
    }

    #[test]
    fn test_accessors() {
        let value = FormatValue::from(9);
        assert!(value.is_integer());
        assert_eq!(value.as_i64(), Some(9));
        assert_eq!(value.as_str(), None);

        let value = FormatValue::from("nine");
        assert!(value.is_text());
        assert_eq!(value.as_bigint(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FormatValue::from(-12).to_string(), "-12");
        assert_eq!(FormatValue::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(FormatValue::from("\u{2014}").to_string(), "\u{2014}");
    }

    #[test]
    fn test_json_sequence() {
        let values: Vec<FormatValue> =
            serde_json::from_str(r#"[1, 18446744073709551615, "x", 3.0]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FormatValue::Integer(1),
                FormatValue::BigInt(BigInt::from(u64::MAX)),
                FormatValue::Text("x".to_string()),
                FormatValue::Integer(3),
            ]
        );
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"[1,"18446744073709551615","x",3]"#
        );
        assert!(serde_json::from_str::<FormatValue>("2.5").is_err());
        assert!(serde_json::from_str::<FormatValue>("true").is_err());
    }
}
