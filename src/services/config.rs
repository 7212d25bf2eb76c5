//! Environment-sourced configuration
//!
//! Required: `GOOGLE_SHEETS_ID`, `GOOGLE_API_KEY`. Optional tab names and
//! API base URL fall back to defaults. For local development `.env.local`
//! and `.env` are loaded first; variables already in the environment win.

use crate::types::{Result, SyncError};
use std::path::Path;

pub const SHEETS_ID_VAR: &str = "GOOGLE_SHEETS_ID";
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const BUSINESSES_SHEET_VAR: &str = "BUSINESSES_SHEET_NAME";
pub const CATEGORIES_SHEET_VAR: &str = "CATEGORIES_SHEET_NAME";
pub const API_BASE_URL_VAR: &str = "SHEETS_API_BASE_URL";

pub const DEFAULT_BUSINESSES_SHEET: &str = "Businesses";
pub const DEFAULT_CATEGORIES_SHEET: &str = "Categories";
pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Dotenv files tried in order, relative to the working directory
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub spreadsheet_id: String,
    pub api_key: String,
    pub businesses_sheet: String,
    /// Accepted for compatibility; categories are derived from businesses
    pub categories_sheet: String,
    pub api_base_url: String,
}

impl SyncConfig {
    /// Load dotenv files (if present) and then read the process environment
    pub fn from_env() -> Result<Self> {
        load_env_files(Path::new("."));
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let spreadsheet_id = get(SHEETS_ID_VAR);
        let api_key = get(API_KEY_VAR);

        let (spreadsheet_id, api_key) = match (spreadsheet_id, api_key) {
            (Some(id), Some(key)) => (id, key),
            (id, key) => {
                let mut missing = Vec::new();
                if id.is_none() {
                    missing.push(SHEETS_ID_VAR.to_string());
                }
                if key.is_none() {
                    missing.push(API_KEY_VAR.to_string());
                }
                return Err(SyncError::Config { missing });
            }
        };

        Ok(Self {
            spreadsheet_id,
            api_key,
            businesses_sheet: get(BUSINESSES_SHEET_VAR)
                .unwrap_or_else(|| DEFAULT_BUSINESSES_SHEET.to_string()),
            categories_sheet: get(CATEGORIES_SHEET_VAR)
                .unwrap_or_else(|| DEFAULT_CATEGORIES_SHEET.to_string()),
            api_base_url: get(API_BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        })
    }

    /// API key with all but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

/// Load `.env.local` then `.env` from `dir`. Missing files are fine;
/// unreadable ones are logged and skipped.
pub fn load_env_files(dir: &Path) {
    for name in ENV_FILES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load env file"),
        }
    }
}
