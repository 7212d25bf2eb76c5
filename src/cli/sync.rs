//! `bizsync sync` subcommand

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::services::{
    ArtifactWriter, RunClock, SheetsClient, SyncConfig, SyncOutcome, SyncPipeline, SyncReport,
};

/// Default primary artifact directory
const DEFAULT_DATA_DIR: &str = "data";

/// Default mirror consumed by the site build
const DEFAULT_MIRROR_DIR: &str = "src/data";

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Primary output directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Mirrored output directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MIRROR_DIR)]
    pub mirror_dir: PathBuf,

    /// Fail when the header row doesn't match the expected columns
    #[arg(long)]
    pub strict_headers: bool,
}

impl Default for SyncArgs {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            mirror_dir: PathBuf::from(DEFAULT_MIRROR_DIR),
            strict_headers: false,
        }
    }
}

impl SyncArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let config = SyncConfig::from_env()?;
        info!(sheet_id = %config.spreadsheet_id, "fetching data from Google Sheets");

        let client = SheetsClient::new(&config)?;
        let writer = ArtifactWriter::new(self.data_dir, self.mirror_dir);
        let pipeline = SyncPipeline::new(client, config.businesses_sheet.clone(), writer)
            .strict_headers(self.strict_headers);

        match pipeline.run(RunClock::now())? {
            SyncOutcome::Completed(report) => {
                print!("{}", render_summary(&report));
                Ok(())
            }
            // Nothing downstream has input; already logged, not a process failure
            SyncOutcome::Aborted { .. } => Ok(()),
        }
    }
}

/// Human-readable run summary
pub fn render_summary(report: &SyncReport) -> String {
    let mut out = String::from("Generated data files:\n");
    for artifact in &report.artifacts {
        out.push_str(&format!(
            "  - {} {} in {} and {}\n",
            artifact.count,
            artifact.key,
            artifact.primary.display(),
            artifact.mirror.display()
        ));
    }
    out.push_str("Data sync complete!\n");
    out.push_str(&format!("Data last updated: {}\n", report.last_updated));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::writer::WrittenArtifact;

    #[test]
    fn test_render_summary() {
        let report = SyncReport {
            artifacts: vec![WrittenArtifact {
                key: "suburbs",
                count: 4,
                primary: PathBuf::from("data/suburbs.json"),
                mirror: PathBuf::from("src/data/suburbs.json"),
            }],
            last_updated: "2024-01-15T09:30:00.000000".into(),
        };

        let summary = render_summary(&report);

        assert!(summary.contains("  - 4 suburbs in data/suburbs.json and src/data/suburbs.json\n"));
        assert!(summary.ends_with("Data last updated: 2024-01-15T09:30:00.000000\n"));
    }

    #[test]
    fn test_default_args() {
        let args = SyncArgs::default();
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert_eq!(args.mirror_dir, PathBuf::from("src/data"));
    }
}
