use crate::error::StatsError;
use crate::models::upstream::Country;
use reqwest::Client;
use tracing::debug;

const SERVICE: &str = "language2countries";

/// Client for the language-to-countries lookup.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Countries where `language` is spoken, in upstream order. The limit is
    /// forwarded upstream and also enforced here: the result never holds more
    /// than `limit` entries even if the upstream ignores the parameter.
    pub async fn countries_for_language(
        &self,
        language: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Country>, StatsError> {
        let url = match limit {
            Some(n) => format!(
                "{}/language2countries/{}?limit={}",
                self.base_url, language, n
            ),
            None => format!("{}/language2countries/{}", self.base_url, language),
        };
        debug!("resolving countries for language {}", language);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::unavailable(SERVICE, e))?;

        let mut countries = response
            .json::<Vec<Country>>()
            .await
            .map_err(|e| StatsError::malformed(SERVICE, e))?;

        if let Some(n) = limit {
            countries.truncate(n);
        }

        Ok(countries)
    }

    /// Lightweight reachability probe for the status endpoint.
    pub async fn probe(&self) -> String {
        let url = format!("{}/language2countries/no", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().as_u16().to_string(),
            Err(_) => "500".to_string(),
        }
    }
}
