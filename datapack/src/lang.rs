use indexmap::IndexMap;
use serde::Serialize;

/// The translation strings of a run
///
/// Owned by whoever drives the run and lent to the emitters that add display names.
/// It is written once, by [ResourceManager::flush_lang](crate::ResourceManager::flush_lang).
#[derive(Serialize, Default, Debug)]
#[serde(transparent)]
pub struct LangBuffer {
    entries: IndexMap<String, String>,
}

impl LangBuffer {
    pub fn new() -> Self {
        LangBuffer::default()
    }

    /// Sets the translation for `key`, replacing any earlier value
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Sets every translation in the list, in order
    pub fn extend<'a, I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[test]
fn last_write_wins() {
    let mut lang = LangBuffer::new();
    lang.insert("block.notreepunching.clay_worked", "Clay");
    lang.insert("item.notreepunching.flint_shard", "Flint Shard");
    lang.insert("block.notreepunching.clay_worked", "Worked Clay");

    assert_eq!(lang.len(), 2);
    assert_eq!(lang.get("block.notreepunching.clay_worked"), Some("Worked Clay"));
    assert_eq!(
        serde_json::to_string(&lang).unwrap(),
        r#"{"block.notreepunching.clay_worked":"Worked Clay","item.notreepunching.flint_shard":"Flint Shard"}"#
    );
}
