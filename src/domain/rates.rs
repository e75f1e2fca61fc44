use std::collections::BTreeMap;

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize, Serializer};

use super::materials::{MaterialKey, DEFAULT_RATES};
use super::numeric::parse_leading_float;

/// Per-unit material rates, kept as the text the user typed and read
/// leniently. Materials without an entry cost nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<MaterialKey, String>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults() -> Self {
        DEFAULT_RATES.iter().copied().collect()
    }

    pub fn get(&self, key: MaterialKey) -> f64 {
        self.rates.get(&key).map_or(0.0, |text| parse_rate(text))
    }

    /// Text as entered for `key`; empty when nothing was entered.
    pub fn text(&self, key: MaterialKey) -> &str {
        self.rates.get(&key).map_or("", String::as_str)
    }

    /// Stores a rate, coercing negative or non-finite values to 0.
    pub fn set(&mut self, key: MaterialKey, rate: f64) {
        // `f64` Display is the shortest text that reads back to the same value.
        self.rates.insert(key, sanitize(rate).to_string());
    }

    pub fn set_from_text(&mut self, key: MaterialKey, text: impl Into<String>) {
        self.rates.insert(key, text.into());
    }
}

impl FromIterator<(MaterialKey, f64)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (MaterialKey, f64)>>(iter: T) -> Self {
        let mut table = RateTable::new();
        for (key, rate) in iter {
            table.set(key, rate);
        }
        table
    }
}

/// Lenient rate parsing: the leading number of `text` when it is finite
/// and non-negative, 0 for anything else.
pub fn parse_rate(text: &str) -> f64 {
    parse_leading_float(text).map_or(0.0, sanitize)
}

fn sanitize(rate: f64) -> f64 {
    if rate.is_finite() && rate >= 0.0 {
        rate
    } else {
        0.0
    }
}

/// Rates may be persisted as numbers or as the text the user typed.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRate {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl StoredRate {
    fn into_text(self) -> Option<String> {
        match self {
            StoredRate::Number(rate) => Some(rate.to_string()),
            StoredRate::Text(text) => Some(text),
            StoredRate::Other(_) => None,
        }
    }
}

impl Serialize for RateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rates.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, StoredRate>::deserialize(deserializer)?;
        let rates = raw
            .into_iter()
            .filter_map(|(key, rate)| Some((MaterialKey::parse(&key)?, rate.into_text()?)))
            .collect();
        Ok(RateTable { rates })
    }
}
