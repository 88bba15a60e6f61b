/// Upstream base addresses and the listen port, read once at startup.
///
/// Every address can be overridden through the environment, which is also how
/// the integration tests point the service at mock upstreams.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub gutendex_url: String,
    pub language2countries_url: String,
    pub restcountries_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()),
            gutendex_url: std::env::var("GUTENDEX_URL")
                .unwrap_or_else(|_| "http://129.241.150.113:8000".to_string()),
            language2countries_url: std::env::var("LANGUAGE2COUNTRIES_URL")
                .unwrap_or_else(|_| "http://129.241.150.113:3000".to_string()),
            restcountries_url: std::env::var("RESTCOUNTRIES_URL")
                .unwrap_or_else(|_| "https://restcountries.com".to_string()),
        }
    }
}
