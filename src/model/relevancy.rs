//! Per-page relevancy annotations.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Number of page slots on a results screen.
pub const SLOT_COUNT: usize = 12;

/// Annotation values for the twelve page slots `page1-ann` … `page12-ann`.
///
/// Known slots always exist and default to 0. Writing a slot name outside
/// that set is accepted and kept aside as a stray entry so it still shows
/// up in the published map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, i64>")]
pub struct RelevancyMap {
    slots: [i64; SLOT_COUNT],
    stray: BTreeMap<String, i64>,
}

impl RelevancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for the zero-based slot index, e.g. `0 -> "page1-ann"`.
    pub fn slot_key(index: usize) -> String {
        format!("page{}-ann", index + 1)
    }

    /// Zero-based index of a known slot key.
    pub fn slot_index(key: &str) -> Option<usize> {
        let digits = key.strip_prefix("page")?.strip_suffix("-ann")?;
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        (1..=SLOT_COUNT).contains(&number).then(|| number - 1)
    }

    /// Set the value for a slot.
    ///
    /// Returns `false` when `slot` is not one of the known page slots; the
    /// value is stored as a stray entry in that case.
    pub fn set(&mut self, slot: &str, value: i64) -> bool {
        match Self::slot_index(slot) {
            Some(index) => {
                self.slots[index] = value;
                true
            }
            None => {
                self.stray.insert(slot.to_string(), value);
                false
            }
        }
    }

    pub fn get(&self, slot: &str) -> Option<i64> {
        match Self::slot_index(slot) {
            Some(index) => Some(self.slots[index]),
            None => self.stray.get(slot).copied(),
        }
    }

    /// All entries: known slots in page order, then stray entries.
    pub fn entries(&self) -> impl Iterator<Item = (String, i64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, value)| (Self::slot_key(index), *value))
            .chain(self.stray.iter().map(|(key, value)| (key.clone(), *value)))
    }

    pub fn stray_slots(&self) -> impl Iterator<Item = &str> {
        self.stray.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        SLOT_COUNT + self.stray.len()
    }
}

impl From<BTreeMap<String, i64>> for RelevancyMap {
    fn from(entries: BTreeMap<String, i64>) -> Self {
        let mut map = Self::default();
        for (slot, value) in entries {
            map.set(&slot, value);
        }
        map
    }
}

impl Serialize for RelevancyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_twelve_zeroed_slots() {
        let map = RelevancyMap::new();
        assert_eq!(map.len(), SLOT_COUNT);
        assert!(map.entries().all(|(_, value)| value == 0));
        assert_eq!(map.get("page1-ann"), Some(0));
        assert_eq!(map.get("page12-ann"), Some(0));
    }

    #[test]
    fn slot_index_accepts_only_known_keys() {
        assert_eq!(RelevancyMap::slot_index("page1-ann"), Some(0));
        assert_eq!(RelevancyMap::slot_index("page12-ann"), Some(11));
        assert_eq!(RelevancyMap::slot_index("page0-ann"), None);
        assert_eq!(RelevancyMap::slot_index("page13-ann"), None);
        assert_eq!(RelevancyMap::slot_index("page03-ann"), None);
        assert_eq!(RelevancyMap::slot_index("page-ann"), None);
        assert_eq!(RelevancyMap::slot_index("page+1-ann"), None);
        assert_eq!(RelevancyMap::slot_index("pageone-ann"), None);
    }

    #[test]
    fn set_known_slot_keeps_size() {
        let mut map = RelevancyMap::new();
        assert!(map.set("page3-ann", 5));
        assert_eq!(map.get("page3-ann"), Some(5));
        assert_eq!(map.len(), SLOT_COUNT);
    }

    #[test]
    fn set_unknown_slot_is_kept_as_stray() {
        let mut map = RelevancyMap::new();
        assert!(!map.set("page13-ann", 4));
        assert_eq!(map.get("page13-ann"), Some(4));
        assert_eq!(map.len(), SLOT_COUNT + 1);
        assert_eq!(map.stray_slots().collect::<Vec<_>>(), vec!["page13-ann"]);
    }

    #[test]
    fn serializes_in_page_order() {
        let mut map = RelevancyMap::new();
        map.set("page10-ann", 3);
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"page1-ann":0,"page2-ann":0"#));
        assert!(json.contains(r#""page10-ann":3"#));
        assert!(json.ends_with(r#""page12-ann":0}"#));
    }

    #[test]
    fn deserializes_from_plain_map() {
        let map: RelevancyMap =
            serde_json::from_str(r#"{"page2-ann": 4, "page7-ann": 1}"#).unwrap();
        assert_eq!(map.get("page2-ann"), Some(4));
        assert_eq!(map.get("page7-ann"), Some(1));
        assert_eq!(map.get("page1-ann"), Some(0));
        assert_eq!(map.len(), SLOT_COUNT);
    }
}
