//! Business listing types written to businesses.json

use serde::{Deserialize, Serialize};

/// Author tag stamped on every synced record
pub const CREATED_BY: &str = "google-sheets-sync";

/// State assumed for every listing (the directory is Melbourne focused)
pub const DEFAULT_STATE: &str = "VIC";

/// City assumed for every listing; doubles as the fallback suburb
pub const DEFAULT_CITY: &str = "Melbourne";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    /// Category slug
    pub category: String,
    pub description: String,
    pub location: Location,
    pub contact: Contact,
    pub rating: f64,
    pub review_count: u32,
    pub community_owned: bool,
    pub verified: bool,
    pub languages: Vec<String>,
    /// Raw (untransformed) category cell, if any
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub hours: BusinessHours,
    pub reviews: Vec<Review>,
    /// Local date of the sync run, `YYYY-MM-DD`
    pub created_at: String,
    pub updated_at: String,
    pub created_by: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub suburb: String,
    pub postcode: String,
    pub state: String,
    pub city: String,
}

/// Contact details; keys are omitted rather than nulled when absent
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Opening hours per weekday. The sheet carries no hours, so this is
/// always serialized as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
}

/// Community review as consumed by the site. Never produced by the sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub business_id: String,
    pub author: String,
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub date: String,
    pub helpful: u32,
    pub verified: bool,
}
