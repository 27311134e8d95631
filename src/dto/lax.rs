//! Integer fields that also accept numeric strings (`"5"`) and integral
//! floats (`5.0`), matching the coercion clients of this API rely on.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum LaxInt {
    Int(i64),
    Float(f64),
    Str(String),
}

impl LaxInt {
    fn into_i64<E: Error>(self) -> Result<i64, E> {
        match self {
            LaxInt::Int(value) => Ok(value),
            LaxInt::Float(value)
                if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
            {
                Ok(value as i64)
            }
            LaxInt::Float(value) => Err(E::custom(format!("expected an integer, got {value}"))),
            LaxInt::Str(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got {raw:?}"))),
        }
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    LaxInt::deserialize(deserializer)?.into_i64()
}

pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LaxInt>::deserialize(deserializer)?
        .map(LaxInt::into_i64)
        .transpose()
}
