use serde::{Deserialize, Serialize};
use serde::ser::SerializeMap;

/// Identifier for one file resource in a configuration table (e.g. `"avatar"`).
pub type ResourceKey = String;

/// Per-resource route configuration as it appears in the declarative file.
///
/// All fields are optional. [`ConfigResolver::sanitize`] fills the four
/// naming fields (`name`, `path`, `api_name`, `api_path`) from the active
/// [`RouteNaming`] strategy; the remaining fields keep their absent state so
/// the loader can tell "never set" apart from an explicit value.
///
/// Structural equality over all eight fields is the equality used by
/// [`ConfigTable::dedup`].
///
/// [`ConfigResolver::sanitize`]: super::ConfigResolver::sanitize
/// [`RouteNaming`]: crate::naming::RouteNaming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntryConfig {
    /// Route name override; defaulted from the resource key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Route path override; defaulted from the resource key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// API route name override; defaulted from the resource key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    /// API route path override; defaulted from the resource key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,
    /// Gate for the standard route. Absent means always registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Gate for the API route, applied by the API projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_enabled: Option<bool>,
    /// Storage specification name for the standard route (`type` in the file).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub spec_name: Option<String>,
    /// Storage specification name for the API route (`api_type` in the file).
    #[serde(rename = "api_type", default, skip_serializing_if = "Option::is_none")]
    pub api_spec_name: Option<String>,
}

/// Order-preserving table of resource keys to route configuration entries.
///
/// Iteration always yields entries in the order they were inserted, which is
/// the order they appear in the configuration file. Inserting an existing key
/// replaces the entry in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTable {
    entries: Vec<(ResourceKey, RouteEntryConfig)>,
}

impl ConfigTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry, replacing any existing entry with the same key in place.
    pub fn insert(&mut self, key: ResourceKey, entry: RouteEntryConfig) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((key, entry)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RouteEntryConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntryConfig)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    /// Returns a copy with structurally equal entries collapsed.
    ///
    /// Equality is over the entry value only, not the key; the first
    /// occurrence wins and table order is otherwise preserved.
    #[must_use]
    pub fn dedup(&self) -> ConfigTable {
        let mut entries: Vec<(ResourceKey, RouteEntryConfig)> = Vec::new();
        for (key, entry) in &self.entries {
            if !entries.iter().any(|(_, seen)| seen == entry) {
                entries.push((key.clone(), entry.clone()));
            }
        }
        ConfigTable { entries }
    }
}

impl FromIterator<(ResourceKey, RouteEntryConfig)> for ConfigTable {
    fn from_iter<I: IntoIterator<Item = (ResourceKey, RouteEntryConfig)>>(iter: I) -> Self {
        let mut table = ConfigTable::new();
        for (key, entry) in iter {
            table.insert(key, entry);
        }
        table
    }
}

impl IntoIterator for ConfigTable {
    type Item = (ResourceKey, RouteEntryConfig);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ConfigTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = ConfigTable::new();
        table.insert("avatar".into(), RouteEntryConfig::default());
        table.insert(
            "document".into(),
            RouteEntryConfig {
                enabled: Some(false),
                ..Default::default()
            },
        );
        table.insert(
            "avatar".into(),
            RouteEntryConfig {
                name: Some("avatar_upload".into()),
                ..Default::default()
            },
        );

        assert_eq!(table.len(), 2);
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["avatar", "document"]);
        assert_eq!(
            table.get("avatar").and_then(|e| e.name.as_deref()),
            Some("avatar_upload")
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let entry = RouteEntryConfig {
            name: Some("shared".into()),
            ..Default::default()
        };
        let mut table = ConfigTable::new();
        table.insert("avatar".into(), entry.clone());
        table.insert("photo".into(), entry);
        table.insert(
            "document".into(),
            RouteEntryConfig {
                name: Some("document".into()),
                ..Default::default()
            },
        );

        let deduped = table.dedup();
        assert_eq!(deduped.len(), 2);
        let keys: Vec<&str> = deduped.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["avatar", "document"]);
        // the input table is untouched
        assert_eq!(table.len(), 3);
    }
}
