use serde::{Deserialize, Serialize};

/// On-disk wrapper: `{"last_updated": ..., "<key>": [...]}`.
///
/// The collection key differs per file, so the records are flattened in
/// through a single-entry map rather than a fixed field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact<T> {
    pub last_updated: String,
    #[serde(flatten)]
    pub collection: indexmap::IndexMap<String, Vec<T>>,
}

impl<T> Artifact<T> {
    pub fn new(key: &str, last_updated: String, records: Vec<T>) -> Self {
        let mut collection = indexmap::IndexMap::with_capacity(1);
        collection.insert(key.to_string(), records);
        Self {
            last_updated,
            collection,
        }
    }

    pub fn records(&self, key: &str) -> Option<&[T]> {
        self.collection.get(key).map(Vec::as_slice)
    }
}

/// Borrowing counterpart of `Artifact` used when writing, so records are
/// serialized in place.
#[derive(Debug, Serialize)]
pub struct ArtifactRef<'a, T> {
    pub last_updated: &'a str,
    #[serde(flatten)]
    pub collection: indexmap::IndexMap<&'a str, &'a [T]>,
}

impl<'a, T> ArtifactRef<'a, T> {
    pub fn new(key: &'a str, last_updated: &'a str, records: &'a [T]) -> Self {
        let mut collection = indexmap::IndexMap::with_capacity(1);
        collection.insert(key, records);
        Self {
            last_updated,
            collection,
        }
    }
}
