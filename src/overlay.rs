use crate::keys::{overlay_key, DateKey};
use crate::storage::{read_json, write_json, KeyValueStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::error;

pub type Overlay<V> = BTreeMap<String, V>;

/// A per-date layer of values keyed by template name.
pub trait OverlayKind {
    type Value: Clone + Serialize;

    /// Suffix appended to the date to form the storage key.
    const SUFFIX: &'static str;

    fn default_value() -> Self::Value;

    /// Decodes one stored entry. `None` means the entry is treated as unset.
    fn decode(raw: &Value) -> Option<Self::Value>;
}

/// Checked flags for checklist items.
pub struct Checked;

impl OverlayKind for Checked {
    type Value = bool;
    const SUFFIX: &'static str = "checked";

    fn default_value() -> bool {
        false
    }

    fn decode(raw: &Value) -> Option<bool> {
        raw.as_bool()
    }
}

/// Slider scores for rating categories.
pub struct Ratings;

impl OverlayKind for Ratings {
    type Value = Rating;
    const SUFFIX: &'static str = "ratings";

    fn default_value() -> Rating {
        Rating::DEFAULT
    }

    fn decode(raw: &Value) -> Option<Rating> {
        match raw {
            Value::Number(n) => n.as_u64().and_then(Rating::from_u64),
            // Older data stored the slider's string value.
            Value::String(s) => s.trim().parse::<u64>().ok().and_then(Rating::from_u64),
            _ => None,
        }
    }
}

/// A rating score, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;
    pub const DEFAULT: Rating = Rating(5);

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    fn from_u64(value: u64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ratings::decode(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("rating must be an integer from 0 to 10, got {raw}"))
        })
    }
}

/// Returns the overlay for `date`, or an empty map when none is saved.
pub fn load_overlay<K, S>(store: &S, date: &DateKey) -> Overlay<K::Value>
where
    K: OverlayKind,
    S: KeyValueStore + ?Sized,
{
    let raw: BTreeMap<String, Value> = read_json(store, &overlay_key(date, K::SUFFIX)).unwrap_or_default();
    raw.iter()
        .filter_map(|(name, value)| K::decode(value).map(|value| (name.clone(), value)))
        .collect()
}

pub fn save_overlay<K, S>(store: &mut S, date: &DateKey, overlay: &Overlay<K::Value>)
where
    K: OverlayKind,
    S: KeyValueStore + ?Sized,
{
    write_json(store, &overlay_key(date, K::SUFFIX), overlay);
}

/// Load, overwrite one entry, save the whole map back. Works on the stored
/// entries as-is so ones this build cannot decode are kept untouched.
pub fn set_overlay_entry<K, S>(store: &mut S, date: &DateKey, name: &str, value: K::Value)
where
    K: OverlayKind,
    S: KeyValueStore + ?Sized,
{
    let key = overlay_key(date, K::SUFFIX);
    let value = match serde_json::to_value(&value) {
        Ok(value) => value,
        Err(err) => {
            error!("failed to encode {name:?} for {key}: {err}");
            return;
        }
    };
    let mut raw: BTreeMap<String, Value> = read_json(store, &key).unwrap_or_default();
    raw.insert(name.to_string(), value);
    write_json(store, &key, &raw);
}
