//! Telemetry record schema.
//!
//! One record is a snapshot of a play session at some point in time.
//! Exported datasets are loosely typed, so every field decodes leniently:
//! a malformed field degrades to its empty value instead of rejecting the
//! whole record.

use super::numeric::{parse_float_prefix, parse_int_prefix};
use crate::utils::config::WINNER_CODE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single telemetry entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Groups records belonging to one play session
    #[serde(default, deserialize_with = "lenient::string")]
    pub session_id: String,

    /// Orders records within a session
    #[serde(default, deserialize_with = "lenient::number")]
    pub timestamp: f64,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub player_class: Option<String>,

    /// Highest dungeon floor reached when this record was taken
    #[serde(default, deserialize_with = "lenient::opt_integer")]
    pub floor: Option<i64>,

    #[serde(default, deserialize_with = "lenient::opt_use_counts")]
    pub combo_use_counts: Option<UseCounts>,

    #[serde(default, deserialize_with = "lenient::opt_use_counts")]
    pub card_use_counts: Option<UseCounts>,

    /// Equipped trinket identifiers
    #[serde(default, deserialize_with = "lenient::opt_string_list")]
    pub trinkets: Option<Vec<String>>,

    /// Kept raw: may be a number, a decimal string, or garbage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_outgoing_damage: Option<Value>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub winner_index: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub enemy_class: Option<String>,
}

/// Parallel-array encoded `name -> count` mapping
///
/// `keys[i]` pairs with `values[i]`; the arrays are zipped by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UseCounts {
    /// Non-string keys are coerced to text so positions stay aligned
    #[serde(default, deserialize_with = "lenient::opt_key_list")]
    pub keys: Option<Vec<String>>,

    /// String-encoded integers; `None` marks a non-string, non-number entry
    #[serde(default, deserialize_with = "lenient::opt_count_list")]
    pub values: Option<Vec<Option<String>>>,
}

impl Record {
    /// Floor reached, with a missing floor read as 0
    pub fn floor_reached(&self) -> i64 {
        self.floor.unwrap_or(0)
    }

    /// Trinket list, empty when absent
    pub fn trinket_list(&self) -> &[String] {
        self.trinkets.as_deref().unwrap_or(&[])
    }

    /// Parsed `averageOutgoingDamage`, `None` when missing or non-numeric
    pub fn damage(&self) -> Option<f64> {
        match self.average_outgoing_damage.as_ref()? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_float_prefix(s),
            _ => None,
        }
    }

    /// True when this record's owning player won the encounter
    pub fn is_win(&self) -> bool {
        self.winner_index.as_deref() == Some(WINNER_CODE)
    }

    /// True when the record belongs to `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.player_class.as_deref() == Some(class)
    }
}

impl UseCounts {
    pub fn new(keys: &[&str], values: &[&str]) -> Self {
        Self {
            keys: Some(keys.iter().map(|k| k.to_string()).collect()),
            values: Some(values.iter().map(|v| Some(v.to_string())).collect()),
        }
    }

    /// Key list, empty when absent
    pub fn key_list(&self) -> &[String] {
        self.keys.as_deref().unwrap_or(&[])
    }

    /// True when both parallel arrays are present
    pub fn is_complete(&self) -> bool {
        self.keys.is_some() && self.values.is_some()
    }

    /// Zip keys with their parsed counts by index
    ///
    /// A count is `None` when the value is missing at that index or has no
    /// leading integer.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<i64>)> + '_ {
        let values = self.values.as_deref().unwrap_or(&[]);
        self.key_list().iter().enumerate().map(move |(i, key)| {
            let count = values
                .get(i)
                .and_then(|v| v.as_deref())
                .and_then(parse_int_prefix);
            (key.as_str(), count)
        })
    }
}

/// Field decoders that never fail on a wrong JSON type
mod lenient {
    use super::UseCounts;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        })
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Whole numbers only; `2.5` or `"3x"` decode to `None`
    pub fn opt_integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
            Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole),
            _ => None,
        })
    }

    fn whole(value: f64) -> Option<i64> {
        (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
    }

    pub fn opt_string_list<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn opt_key_list<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .map(|v| match v {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn opt_count_list<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<Option<String>>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            // Positions matter, so bad entries stay as None instead of being dropped
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .map(|v| match v {
                        Value::String(s) => Some(s),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn opt_use_counts<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<UseCounts>, D::Error> {
        Ok(match Value::deserialize(d)? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}
