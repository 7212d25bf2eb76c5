//! Artifact writer: one JSON file per collection, written to the primary
//! data directory and mirrored into the site's source tree.

use crate::types::{ArtifactRef, BusinessRecord, CategoryRecord, Result, SuburbRecord};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

pub const BUSINESSES_FILE: &str = "businesses.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const SUBURBS_FILE: &str = "suburbs.json";

/// Paths written for one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub key: &'static str,
    pub count: usize,
    pub primary: PathBuf,
    pub mirror: PathBuf,
}

pub struct ArtifactWriter {
    data_dir: PathBuf,
    mirror_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(data_dir: impl Into<PathBuf>, mirror_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            mirror_dir: mirror_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn mirror_dir(&self) -> &Path {
        &self.mirror_dir
    }

    /// Write all three collections. Any failure aborts the remainder.
    pub fn write_all(
        &self,
        last_updated: &str,
        businesses: &[BusinessRecord],
        categories: &[CategoryRecord],
        suburbs: &[SuburbRecord],
    ) -> Result<Vec<WrittenArtifact>> {
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(&self.mirror_dir)?;

        Ok(vec![
            self.write_collection("businesses", BUSINESSES_FILE, last_updated, businesses)?,
            self.write_collection("categories", CATEGORIES_FILE, last_updated, categories)?,
            self.write_collection("suburbs", SUBURBS_FILE, last_updated, suburbs)?,
        ])
    }

    /// Serialize `{last_updated, <key>: records}` once and write it to both
    /// directories.
    #[instrument(level = "debug", skip(self, last_updated, records), fields(count = records.len()))]
    pub fn write_collection<T: Serialize>(
        &self,
        key: &'static str,
        file_name: &str,
        last_updated: &str,
        records: &[T],
    ) -> Result<WrittenArtifact> {
        let artifact = ArtifactRef::new(key, last_updated, records);
        let mut content = serde_json::to_string_pretty(&artifact)?;
        content.push('\n');

        let primary = self.data_dir.join(file_name);
        let mirror = self.mirror_dir.join(file_name);
        for path in [&primary, &mirror] {
            write_file(path, &content)?;
            debug!(path = %path.display(), "wrote artifact");
        }

        Ok(WrittenArtifact {
            key,
            count: records.len(),
            primary,
            mirror,
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
