//! Decimal fields travel as JSON numbers. Parsing goes through
//! `serde_json::Number` so that `arbitrary_precision` keeps the exact digits.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let f = value
        .to_f64()
        .ok_or_else(|| serde::ser::Error::custom(format!("decimal {value} out of f64 range")))?;
    serializer.serialize_f64(f)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let num = serde_json::Number::deserialize(deserializer)?;
    parse(&num).map_err(serde::de::Error::custom)
}

fn parse(num: &serde_json::Number) -> Result<Decimal, rust_decimal::Error> {
    let text = num.to_string();
    Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text))
}

pub mod option {
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => {
                let f = d.to_f64().ok_or_else(|| {
                    serde::ser::Error::custom(format!("decimal {d} out of f64 range"))
                })?;
                serializer.serialize_some(&f)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<serde_json::Number>::deserialize(deserializer)?;
        opt.map(|num| super::parse(&num).map_err(serde::de::Error::custom))
            .transpose()
    }
}
