//! Services for fetching, normalizing, aggregating and writing listings

pub mod aggregator;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod normalizer;
pub mod pipeline;
pub mod writer;

pub use aggregator::Aggregator;
pub use config::SyncConfig;
pub use fetcher::{SheetSource, SheetsClient};
pub use normalizer::BusinessNormalizer;
pub use pipeline::{RunClock, SyncOutcome, SyncPipeline, SyncReport};
pub use writer::ArtifactWriter;
