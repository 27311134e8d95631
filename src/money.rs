use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Serializer, ser::Error};

/// Writes whole amounts as JSON integers and fractional ones as floats,
/// so `10` stays `10` and `9.99` stays `9.99`.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract().is_zero()
        && let Some(whole) = value.to_i64()
    {
        return serializer.serialize_i64(whole);
    }
    match value.to_f64() {
        Some(float) => serializer.serialize_f64(float),
        None => Err(S::Error::custom(format!("amount {value} is not representable"))),
    }
}
