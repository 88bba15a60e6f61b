use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCountReport {
    pub language: String,
    pub books: u64,
    pub authors: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadershipRecord {
    pub country: String,
    pub isocode: String,
    pub books: u64,
    pub authors: usize,
    pub readership: u64,
}

/// Per-upstream reachability report. Each field carries the HTTP status the
/// probe observed, or "500" when the upstream could not be reached at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub gutendexapi: String,
    pub languageapi: String,
    pub countriesapi: String,
    pub version: String,
    pub uptime: u64,
}
