//! Aggregator service for deriving categories and suburbs

use crate::services::catalog::{color_for, icon_for};
use crate::services::normalizer::FALLBACK_SUBURB;
use crate::types::{BusinessRecord, CategoryRecord, SuburbRecord};
use indexmap::IndexMap;

/// Aggregator for derived directory collections.
///
/// Both collections keep the order in which each key is first seen.
pub struct Aggregator;

#[derive(Default)]
struct CategoryGroup {
    name: Option<String>,
    count: usize,
}

impl Aggregator {
    /// One category per distinct non-empty slug, with its business count
    pub fn categories(businesses: &[BusinessRecord]) -> Vec<CategoryRecord> {
        let mut groups: IndexMap<&str, CategoryGroup> = IndexMap::new();

        for business in businesses {
            let slug = business.category.as_str();
            if slug.is_empty() {
                continue;
            }
            let group = groups.entry(slug).or_default();
            group.count += 1;
            if group.name.is_none() {
                group.name = business.tags.first().cloned();
            }
        }

        groups
            .into_iter()
            .filter(|(_, group)| group.count > 0)
            .map(|(slug, group)| {
                let name = group.name.unwrap_or_else(|| title_case_slug(slug));
                CategoryRecord {
                    id: slug.to_string(),
                    description: category_description(&name),
                    name,
                    local_name: String::new(),
                    slug: slug.to_string(),
                    icon: icon_for(slug).to_string(),
                    color: color_for(slug).to_string(),
                    subcategories: Vec::new(),
                    business_count: group.count,
                }
            })
            .collect()
    }

    /// One suburb per distinct suburb name other than the fallback
    pub fn suburbs(businesses: &[BusinessRecord]) -> Vec<SuburbRecord> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();

        for business in businesses {
            let suburb = business.location.suburb.as_str();
            if suburb.is_empty() || suburb == FALLBACK_SUBURB {
                continue;
            }
            *counts.entry(suburb).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(name, count)| SuburbRecord {
                name: name.to_string(),
                postcode: String::new(),
                business_count: count,
                popular_categories: Vec::new(),
            })
            .collect()
    }
}

/// "car-mechanics-and-repairs" -> "Car Mechanics And Repairs"
pub fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Category blurb; names already mentioning "service" avoid repeating it
pub fn category_description(name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.contains("service") {
        format!(
            "Find trusted {} in Melbourne. Quality offerings from verified local businesses.",
            lower
        )
    } else {
        format!(
            "Find trusted {} in Melbourne. Quality services from verified local businesses.",
            lower
        )
    }
}
