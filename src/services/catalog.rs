use crate::error::StatsError;
use crate::models::upstream::CatalogPage;
use reqwest::Client;
use tracing::debug;

const SERVICE: &str = "gutendex";

/// Client for the paginated book catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one page (1-based) of books filtered by language.
    pub async fn fetch_page(&self, language: &str, page: u32) -> Result<CatalogPage, StatsError> {
        let url = format!(
            "{}/books/?languages={}&page={}",
            self.base_url, language, page
        );
        debug!("fetching catalog page {} for language {}", page, language);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::unavailable(SERVICE, e))?;

        response
            .json::<CatalogPage>()
            .await
            .map_err(|e| StatsError::malformed(SERVICE, e))
    }

    /// Total number of books in the catalog, across all languages. Only the
    /// first page is requested; its `count` covers the whole catalog.
    pub async fn fetch_global_total(&self) -> Result<u64, StatsError> {
        let url = format!("{}/books", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::unavailable(SERVICE, e))?;

        let page = response
            .json::<CatalogPage>()
            .await
            .map_err(|e| StatsError::malformed(SERVICE, e))?;

        Ok(page.count)
    }

    /// Lightweight reachability probe for the status endpoint.
    pub async fn probe(&self) -> String {
        let url = format!("{}/books", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().as_u16().to_string(),
            Err(_) => "500".to_string(),
        }
    }
}
