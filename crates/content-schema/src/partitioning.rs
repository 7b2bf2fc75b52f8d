use serde::{Deserialize, Serialize};

/// The single key of the invariant partition.
const INVARIANT_KEY: &str = "iv";

/// How a field's value varies by locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Partitioning {
    /// One value per content item.
    #[default]
    Invariant,
    /// One value per configured language.
    Language,
}

/// One key of a field's partition, e.g. `iv` or a language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(String);

impl PartitionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn invariant() -> Self {
        Self(INVARIANT_KEY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PartitionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolves the ordered set of partition keys for a partitioning mode.
pub trait PartitionResolver {
    fn resolve(&self, partitioning: Partitioning) -> Vec<PartitionKey>;
}

/// The languages configured for an app, master language first.
///
/// The order of the codes is the order the partition keys appear in
/// everywhere the languages are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSet {
    codes: Vec<String>,
}

impl LanguageSet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn codes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.codes.iter().map(String::as_str)
    }
}

impl PartitionResolver for LanguageSet {
    fn resolve(&self, partitioning: Partitioning) -> Vec<PartitionKey> {
        match partitioning {
            Partitioning::Invariant => vec![PartitionKey::invariant()],
            Partitioning::Language => self.codes.iter().map(PartitionKey::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_partitioning_has_a_single_key() {
        let languages = LanguageSet::new(["en", "de"]);
        let keys = languages.resolve(Partitioning::Invariant);

        assert_eq!(keys, vec![PartitionKey::invariant()]);
        assert_eq!(keys[0].as_str(), "iv");
    }

    #[test]
    fn language_partitioning_keeps_configured_order() {
        let languages = LanguageSet::new(["en", "de", "fi"]);
        let keys = languages.resolve(Partitioning::Language);

        let keys: Vec<_> = keys.iter().map(PartitionKey::as_str).collect();
        assert_eq!(keys, vec!["en", "de", "fi"]);
    }
}
