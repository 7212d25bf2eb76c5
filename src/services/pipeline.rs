//! End-to-end sync: fetch -> normalize -> aggregate -> write
//!
//! Only the businesses tab is fetched; categories and suburbs are derived
//! from the normalized businesses.

use crate::services::fetcher::SheetSource;
use crate::services::normalizer::BusinessNormalizer;
use crate::services::writer::{ArtifactWriter, WrittenArtifact};
use crate::services::Aggregator;
use crate::types::Result;
use chrono::{DateTime, Local};
use tracing::{error, info};

/// Timestamp source for a run; fixed in tests for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    now: DateTime<Local>,
}

impl RunClock {
    pub fn now() -> Self {
        Self { now: Local::now() }
    }

    pub fn fixed(now: DateTime<Local>) -> Self {
        Self { now }
    }

    /// `last_updated` value: local ISO-8601 without offset
    pub fn timestamp(&self) -> String {
        self.now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }

    /// `createdAt`/`updatedAt` value
    pub fn date(&self) -> String {
        self.now.format("%Y-%m-%d").to_string()
    }
}

/// Result of a sync run
#[derive(Debug)]
pub enum SyncOutcome {
    /// All three artifacts written
    Completed(SyncReport),
    /// Businesses fetch failed; nothing written
    Aborted { sheet: String, reason: String },
}

#[derive(Debug)]
pub struct SyncReport {
    pub artifacts: Vec<WrittenArtifact>,
    pub last_updated: String,
}

impl SyncReport {
    pub fn count(&self, key: &str) -> usize {
        self.artifacts
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.count)
            .unwrap_or(0)
    }
}

pub struct SyncPipeline<S: SheetSource> {
    source: S,
    businesses_sheet: String,
    writer: ArtifactWriter,
    strict_headers: bool,
}

impl<S: SheetSource> SyncPipeline<S> {
    pub fn new(source: S, businesses_sheet: impl Into<String>, writer: ArtifactWriter) -> Self {
        Self {
            source,
            businesses_sheet: businesses_sheet.into(),
            writer,
            strict_headers: false,
        }
    }

    pub fn strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    /// Run once. A failed businesses fetch is an `Aborted` outcome, not an
    /// error; header (strict mode) and write failures are errors.
    pub fn run(&self, clock: RunClock) -> Result<SyncOutcome> {
        info!(sheet = %self.businesses_sheet, "fetching businesses");
        let sheet = match self.source.fetch(&self.businesses_sheet) {
            Ok(values) => values,
            Err(e) => {
                error!(sheet = %self.businesses_sheet, error = %e, "failed to fetch businesses data");
                return Ok(SyncOutcome::Aborted {
                    sheet: self.businesses_sheet.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let businesses = BusinessNormalizer::new(clock.date())
            .strict_headers(self.strict_headers)
            .normalize(&sheet)?;
        info!(count = businesses.len(), "processed businesses");

        let categories = Aggregator::categories(&businesses);
        let suburbs = Aggregator::suburbs(&businesses);
        info!(
            categories = categories.len(),
            suburbs = suburbs.len(),
            "derived collections"
        );

        let last_updated = clock.timestamp();
        let artifacts = self
            .writer
            .write_all(&last_updated, &businesses, &categories, &suburbs)?;

        Ok(SyncOutcome::Completed(SyncReport {
            artifacts,
            last_updated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FetchError, SheetValues};
    use chrono::TimeZone;
    use tempfile::TempDir;

    struct StaticSource(SheetValues);

    impl SheetSource for StaticSource {
        fn fetch(&self, _sheet: &str) -> std::result::Result<SheetValues, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl SheetSource for FailingSource {
        fn fetch(&self, sheet: &str) -> std::result::Result<SheetValues, FetchError> {
            Err(FetchError::Status {
                sheet: sheet.to_string(),
                status: 500,
            })
        }
    }

    fn clock() -> RunClock {
        RunClock::fixed(Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap())
    }

    fn rows(data: &[&[&str]]) -> SheetValues {
        SheetValues::from_rows(
            data.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_clock_formats() {
        let clock = clock();
        assert_eq!(clock.date(), "2024-01-15");
        assert_eq!(clock.timestamp(), "2024-01-15T09:30:00.000000");
    }

    #[test]
    fn test_run_completes() {
        let temp_dir = TempDir::new().unwrap();
        let source = StaticSource(rows(&[
            &["Name", "Category", "Description", "Phone", "Website", "Address"],
            &["Joe's Cafe", "Cafes", "", "", "", "1 Main St, Richmond, VIC 3121"],
            &["Bean There", "Cafes", "", "", "", ""],
            &["Pipe Pros", "Plumbers", "", "", "", "2 High St, Fitzroy, VIC 3065"],
        ]));
        let writer = ArtifactWriter::new(temp_dir.path().join("data"), temp_dir.path().join("mirror"));

        let outcome = SyncPipeline::new(source, "Businesses", writer)
            .run(clock())
            .unwrap();

        let SyncOutcome::Completed(report) = outcome else {
            panic!("expected completed run");
        };
        assert_eq!(report.count("businesses"), 3);
        assert_eq!(report.count("categories"), 2);
        assert_eq!(report.count("suburbs"), 2);
        assert_eq!(report.last_updated, "2024-01-15T09:30:00.000000");
    }

    #[test]
    fn test_fetch_failure_aborts_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let writer = ArtifactWriter::new(&data_dir, temp_dir.path().join("mirror"));

        let outcome = SyncPipeline::new(FailingSource, "Businesses", writer)
            .run(clock())
            .unwrap();

        match outcome {
            SyncOutcome::Aborted { sheet, reason } => {
                assert_eq!(sheet, "Businesses");
                assert!(reason.contains("500"));
            }
            other => panic!("expected abort, got {other:?}"),
        }
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_empty_sheet_still_writes_empty_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ArtifactWriter::new(temp_dir.path().join("data"), temp_dir.path().join("mirror"));

        let outcome = SyncPipeline::new(StaticSource(SheetValues::default()), "Businesses", writer)
            .run(clock())
            .unwrap();

        let SyncOutcome::Completed(report) = outcome else {
            panic!("expected completed run");
        };
        assert_eq!(report.artifacts.len(), 3);
        assert_eq!(report.count("businesses"), 0);
    }

    #[test]
    fn test_strict_header_mismatch_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = StaticSource(rows(&[&["Category", "Name"], &["Cafes", "Joe's Cafe"]]));
        let writer = ArtifactWriter::new(temp_dir.path().join("data"), temp_dir.path().join("mirror"));

        let result = SyncPipeline::new(source, "Businesses", writer)
            .strict_headers(true)
            .run(clock());

        assert!(result.is_err());
        assert!(!temp_dir.path().join("data").exists());
    }
}
