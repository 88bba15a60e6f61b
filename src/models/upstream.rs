use serde::Deserialize;
use std::collections::HashMap;

/// Author or translator entry as returned by the catalog service. Only the
/// name takes part in deduplication; the years ride along untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

/// One catalog entry. Every field defaults when absent, matching the
/// permissive decoding the catalog service's clients rely on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub translators: Vec<Person>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub copyright: Option<bool>,
    #[serde(default)]
    pub media_type: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub formats: String,
    #[serde(default)]
    pub download_count: u64,
}

/// One page of a paginated catalog query. `count` is the total across all
/// pages of the query, not the size of this page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<Book>,
}

impl CatalogPage {
    /// The catalog signals the last page with either a null or an empty
    /// `next` cursor.
    pub fn has_next(&self) -> bool {
        self.next.as_deref().map(|n| !n.is_empty()).unwrap_or(false)
    }
}

/// Country entry from the language-to-countries lookup service.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    #[serde(rename = "ISO3166_1_Alpha_2", default)]
    pub iso_two: String,
    #[serde(rename = "ISO3166_1_Alpha_3", default)]
    pub iso_three: String,
    #[serde(rename = "Official_Name", default)]
    pub official_name: String,
    #[serde(rename = "Region_Name", default)]
    pub region: String,
    #[serde(rename = "Sub_Region_Name", default)]
    pub sub_region: String,
    #[serde(rename = "Language", default)]
    pub language: String,
}

/// Single element of the population service's response array.
#[derive(Debug, Clone, Deserialize)]
pub struct PopulationEntry {
    #[serde(default)]
    pub population: u64,
}
