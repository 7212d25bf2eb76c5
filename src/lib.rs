//! Google Sheets to JSON sync for a local business directory

pub mod cli;
pub mod services;
pub mod types;
