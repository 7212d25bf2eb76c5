//! Business row normalization
//!
//! Converts positional sheet rows into `BusinessRecord`s. Columns:
//! 0 name, 1 category, 2 description, 3 phone, 4 website, 5 address,
//! 6 additional info. Only the header's width is used; names are checked
//! separately by `validate_header`.

use crate::types::{
    BusinessHours, BusinessRecord, Contact, Location, RawRow, Result, SheetValues, SyncError,
    CREATED_BY, DEFAULT_CITY, DEFAULT_STATE,
};
use tracing::warn;

/// Suburb assigned when the address yields nothing better
pub const FALLBACK_SUBURB: &str = DEFAULT_CITY;

/// Expected header names by column position
pub const EXPECTED_HEADERS: [&str; 7] = [
    "Name",
    "Category",
    "Description",
    "Phone",
    "Website",
    "Address",
    "Additional Info",
];

/// Slug for a business name: lowercase, spaces to hyphens, `&` to `and`,
/// drop anything not alphanumeric or hyphen, trim outer hyphens.
///
/// # Examples
/// ```
/// use bizsync::services::normalizer::slugify_name;
///
/// assert_eq!(slugify_name("Joe's Cafe"), "joes-cafe");
/// assert_eq!(slugify_name("Smith & Sons"), "smith-and-sons");
/// ```
pub fn slugify_name(name: &str) -> String {
    slugify(&name.to_lowercase().replace(' ', "-").replace('&', "and"))
}

/// Slug for a category: as `slugify_name`, with `/` also mapped to `-`.
///
/// Idempotent: slugifying an existing slug returns it unchanged.
pub fn slugify_category(category: &str) -> String {
    slugify(
        &category
            .to_lowercase()
            .replace('/', "-")
            .replace(' ', "-")
            .replace('&', "and"),
    )
}

fn slugify(prepared: &str) -> String {
    prepared
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

/// Best-effort suburb guess from a free-text address: the second-to-last
/// comma-separated part, or the sole part when there is only one.
/// Not a geocode; "123 Main St, Richmond, VIC 3121" gives "Richmond".
pub fn extract_suburb(address: &str) -> String {
    if address.is_empty() {
        return FALLBACK_SUBURB.to_string();
    }
    let parts: Vec<&str> = address.split(',').map(str::trim).collect();
    match parts.len() {
        0 => FALLBACK_SUBURB.to_string(),
        1 => parts[0].to_string(),
        n => parts[n - 2].to_string(),
    }
}

/// Description with additional info appended, falling back to
/// `"<name> - <category>"` (or just `<name>`) when both are empty.
pub fn compose_description(
    name: &str,
    category: &str,
    description: &str,
    additional_info: &str,
) -> String {
    let mut full = description.to_string();
    if !additional_info.is_empty() && additional_info != description {
        if full.is_empty() {
            full = additional_info.to_string();
        } else {
            full = format!("{}. {}", full, additional_info);
        }
    }

    if !full.is_empty() {
        full
    } else if category.is_empty() {
        name.to_string()
    } else {
        format!("{} - {}", name, category)
    }
}

/// Check header names against `EXPECTED_HEADERS` (trimmed,
/// case-insensitive). Only positions present in the header are compared.
pub fn validate_header(header: &[String]) -> Result<()> {
    if header.len() < 2 {
        return Err(SyncError::Header(format!(
            "expected at least 2 columns, found {}",
            header.len()
        )));
    }

    let mismatches: Vec<String> = header
        .iter()
        .zip(EXPECTED_HEADERS.iter())
        .enumerate()
        .filter(|(_, (actual, expected))| !actual.trim().eq_ignore_ascii_case(expected))
        .map(|(idx, (actual, expected))| {
            format!("column {} is '{}', expected '{}'", idx, actual.trim(), expected)
        })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(SyncError::Header(mismatches.join("; ")))
    }
}

/// Row-to-record normalizer for the businesses tab
pub struct BusinessNormalizer {
    /// Local date stamped into createdAt/updatedAt
    run_date: String,
    strict_headers: bool,
}

impl BusinessNormalizer {
    pub fn new(run_date: impl Into<String>) -> Self {
        Self {
            run_date: run_date.into(),
            strict_headers: false,
        }
    }

    /// Fail instead of warn on a header mismatch
    pub fn strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    /// Normalize a whole tab. Fewer than two rows (no header + data) gives
    /// an empty result; output order follows input order.
    pub fn normalize(&self, sheet: &SheetValues) -> Result<Vec<BusinessRecord>> {
        let Some(header) = sheet.header() else {
            return Ok(Vec::new());
        };
        if sheet.data_rows().is_empty() {
            return Ok(Vec::new());
        }

        if let Err(e) = validate_header(header) {
            if self.strict_headers {
                return Err(e);
            }
            warn!(error = %e, "businesses header does not match expected layout");
        }

        let width = header.len();
        Ok(sheet
            .data_rows()
            .iter()
            .enumerate()
            // Sheet rows are 1-based and the header is row 1
            .filter_map(|(idx, row)| self.normalize_row(row, width, idx + 2))
            .collect())
    }

    /// Normalize one row, padded to `width`. Returns `None` for blank rows
    /// and rows without a name. `sheet_row` is the 1-based row number, used
    /// for the fallback id of names with no slug characters.
    pub fn normalize_row(
        &self,
        row: &RawRow,
        width: usize,
        sheet_row: usize,
    ) -> Option<BusinessRecord> {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            return None;
        }

        let mut cells: Vec<&str> = row.iter().map(|c| c.trim()).collect();
        if cells.len() < width {
            cells.resize(width, "");
        }
        let cell = |idx: usize| cells.get(idx).copied().unwrap_or("");

        let name = cell(0);
        if name.is_empty() {
            return None;
        }
        let category = cell(1);
        let description = cell(2);
        let phone = cell(3);
        let website = cell(4);
        let address = cell(5);
        let additional_info = cell(6);

        let mut id = slugify_name(name);
        if id.is_empty() {
            id = fallback_id(sheet_row);
            warn!(
                row = sheet_row,
                name,
                id = %id,
                "name has no slug characters, using fallback id"
            );
        }

        Some(BusinessRecord {
            id,
            name: name.to_string(),
            category: slugify_category(category),
            description: compose_description(name, category, description, additional_info),
            location: Location {
                address: address.to_string(),
                suburb: extract_suburb(address),
                postcode: String::new(),
                state: DEFAULT_STATE.to_string(),
                city: DEFAULT_CITY.to_string(),
            },
            contact: Contact {
                phone: non_empty(phone),
                website: non_empty(website),
            },
            rating: 0.0,
            review_count: 0,
            community_owned: false,
            verified: false,
            languages: Vec::new(),
            tags: non_empty(category).into_iter().collect(),
            features: Vec::new(),
            hours: BusinessHours::default(),
            reviews: Vec::new(),
            created_at: self.run_date.clone(),
            updated_at: self.run_date.clone(),
            created_by: CREATED_BY.to_string(),
        })
    }
}

/// Id for a name that slugifies to nothing, e.g. "!!!"
pub fn fallback_id(sheet_row: usize) -> String {
    format!("business-row-{}", sheet_row)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
