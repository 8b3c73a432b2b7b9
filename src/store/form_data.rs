//! Multipart-style submission payload

/// An ordered, all-string key/value payload for form submission.
///
/// Values are the string forms of the store's current values; file bytes
/// are never embedded here. Callers needing raw files consult the store's
/// file map and build their own payload entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one entry, replacing any existing entry with the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let data = FormData::new();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut data = FormData::new();
        data.set("email", "a@b.com");
        assert_eq!(data.get("email"), Some("a@b.com"));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn test_set_replaces_existing_key() {
        let mut data = FormData::new();
        data.set("email", "old");
        data.set("email", "new");
        assert_eq!(data.get("email"), Some("new"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let mut data = FormData::new();
        data.set("b", "2");
        data.set("a", "1");
        let keys: Vec<&str> = data.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
