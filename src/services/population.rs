use crate::error::StatsError;
use crate::models::upstream::PopulationEntry;
use reqwest::Client;
use tracing::debug;

const SERVICE: &str = "restcountries";

/// Client for the country population lookup.
#[derive(Debug, Clone)]
pub struct PopulationClient {
    http: Client,
    base_url: String,
}

impl PopulationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Population of a single country looked up by name. The upstream answers
    /// with an array; an empty array is a typed NotFound, never an index panic.
    pub async fn population_of(&self, country_name: &str) -> Result<u64, StatsError> {
        let url = format!(
            "{}/v3.1/name/{}?fields=population",
            self.base_url, country_name
        );
        debug!("fetching population for {}", country_name);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StatsError::unavailable(SERVICE, e))?;

        let entries = response
            .json::<Vec<PopulationEntry>>()
            .await
            .map_err(|e| StatsError::malformed(SERVICE, e))?;

        match entries.first() {
            Some(entry) => Ok(entry.population),
            None => Err(StatsError::NotFound(format!(
                "no population entry for country {}",
                country_name
            ))),
        }
    }

    /// Lightweight reachability probe for the status endpoint.
    pub async fn probe(&self) -> String {
        let url = format!("{}/v3.1/name/Norway?fields=population", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().as_u16().to_string(),
            Err(_) => "500".to_string(),
        }
    }
}
