//! Derived directory collections: categories and suburbs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub local_name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub subcategories: Vec<Subcategory>,
    pub business_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub local_name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuburbRecord {
    pub name: String,
    pub postcode: String,
    pub business_count: usize,
    pub popular_categories: Vec<String>,
}
