//! Template-level string tables for static label substitution
//!
//! A [`StringTable`] maps language -> key -> text. It only feeds short
//! labels (navigation links, button text) into fragment builders. Whole-page
//! content per language is carried by page overlays instead.
//!
//! Tables are written either per language or flat. Flat `key = text`
//! entries hold for every language and are consulted last:
//!
//! ```toml
//! "nav.shop" = "Shop"
//!
//! [fr]
//! "nav.home" = "Accueil"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTable", into = "RawTable")]
pub struct StringTable {
    by_language: BTreeMap<String, BTreeMap<String, String>>,
    shared: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Language(BTreeMap<String, String>),
}

type RawTable = BTreeMap<String, RawEntry>;

impl From<RawTable> for StringTable {
    fn from(raw: RawTable) -> Self {
        let mut table = StringTable::new();
        for (key, entry) in raw {
            match entry {
                RawEntry::Text(text) => {
                    table.shared.insert(key, text);
                }
                RawEntry::Language(entries) => {
                    table.by_language.entry(key).or_default().extend(entries);
                }
            }
        }
        table
    }
}

impl From<StringTable> for RawTable {
    fn from(table: StringTable) -> Self {
        let shared = table
            .shared
            .into_iter()
            .map(|(key, text)| (key, RawEntry::Text(text)));
        let languages = table
            .by_language
            .into_iter()
            .map(|(lang, entries)| (lang, RawEntry::Language(entries)));
        shared.chain(languages).collect()
    }
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn insert(
        &mut self,
        lang: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.by_language
            .entry(lang.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Chainable form of [`StringTable::insert`]
    pub fn with(
        mut self,
        lang: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(lang, key, text);
        self
    }

    /// Add or replace an entry that holds for every language
    pub fn insert_shared(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.shared.insert(key.into(), text.into());
    }

    /// Chainable form of [`StringTable::insert_shared`]
    pub fn with_shared(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert_shared(key, text);
        self
    }

    /// Exact lookup, no fallback
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.by_language.get(lang)?.get(key).map(|s| s.as_str())
    }

    /// Look up `key` in `lang`, then the `base` language, then the shared entries
    pub fn lookup(&self, lang: &str, base: &str, key: &str) -> Option<&str> {
        self.get(lang, key)
            .or_else(|| self.get(base, key))
            .or_else(|| self.shared.get(key).map(|s| s.as_str()))
    }

    /// Languages with at least one entry
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.by_language.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.by_language.values().all(|entries| entries.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StringTable {
        StringTable::new()
            .with("en", "nav.home", "Home")
            .with("en", "nav.menu", "Menu")
            .with("fr", "nav.home", "Accueil")
    }

    #[test]
    fn test_exact_lookup() {
        let t = table();
        assert_eq!(t.get("fr", "nav.home"), Some("Accueil"));
        assert_eq!(t.get("fr", "nav.menu"), None);
        assert_eq!(t.get("de", "nav.home"), None);
    }

    #[test]
    fn test_lookup_falls_back_to_base() {
        let t = table();
        assert_eq!(t.lookup("fr", "en", "nav.menu"), Some("Menu"));
        assert_eq!(t.lookup("de", "en", "nav.home"), Some("Home"));
        assert_eq!(t.lookup("fr", "en", "nav.unknown"), None);
    }

    #[test]
    fn test_deserializes_from_nested_toml() {
        let t: StringTable = toml::from_str(
            r#"
[en]
"nav.home" = "Home"
[ar]
"nav.home" = "الرئيسية"
"#,
        )
        .unwrap();
        assert_eq!(t.languages().collect::<Vec<_>>(), vec!["ar", "en"]);
        assert_eq!(t.get("ar", "nav.home"), Some("الرئيسية"));
    }

    #[test]
    fn test_deserializes_flat_and_mixed_toml() {
        let t: StringTable = toml::from_str(
            r#"
"nav.home" = "Home"
"nav.shop" = "Shop"

[fr]
"nav.home" = "Accueil"
"#,
        )
        .unwrap();
        assert_eq!(t.languages().collect::<Vec<_>>(), vec!["fr"]);
        assert_eq!(t.get("fr", "nav.shop"), None);
        assert_eq!(t.lookup("fr", "en", "nav.home"), Some("Accueil"));
        assert_eq!(t.lookup("fr", "en", "nav.shop"), Some("Shop"));
        assert_eq!(t.lookup("de", "en", "nav.home"), Some("Home"));
    }

    #[test]
    fn test_language_entry_beats_shared() {
        let t = StringTable::new()
            .with_shared("nav.home", "Home")
            .with("en", "nav.home", "Start");
        assert_eq!(t.lookup("fr", "en", "nav.home"), Some("Start"));
        assert!(!StringTable::new().with_shared("k", "v").is_empty());
    }

    #[test]
    fn test_empty() {
        assert!(StringTable::new().is_empty());
        assert!(!table().is_empty());
    }
}
