use anyhow::{Context, Result};
use url::Url;

const DEFAULT_HOLIDAY_API: &str = "https://date.nager.at";
const DEFAULT_COUNTRY: &str = "TR";

/// Connection settings for the backend and the public holiday service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the CampusHub backend, e.g. `http://127.0.0.1:8000`.
    pub api_base: Url,
    /// Origin of the public holiday calendar service.
    pub holiday_base: Url,
    /// ISO country code used for holiday lookups.
    pub country: String,
}

impl ClientConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            holiday_base: Url::parse(DEFAULT_HOLIDAY_API).expect("default holiday URL is valid"),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Read configuration from the environment (a `.env` file is
    /// honored if present).
    ///
    /// * `CAMPUSHUB_API_URL`: required backend origin
    /// * `CAMPUSHUB_HOLIDAY_API_URL`: optional, defaults to the public service
    /// * `CAMPUSHUB_COUNTRY`: optional ISO country code, defaults to `TR`
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_base = std::env::var("CAMPUSHUB_API_URL")
            .context("CAMPUSHUB_API_URL is not set")?;
        let api_base = Url::parse(&api_base)
            .with_context(|| format!("CAMPUSHUB_API_URL is not a valid URL: {api_base}"))?;

        let holiday_base = match std::env::var("CAMPUSHUB_HOLIDAY_API_URL") {
            Ok(raw) => Url::parse(&raw)
                .with_context(|| format!("CAMPUSHUB_HOLIDAY_API_URL is not a valid URL: {raw}"))?,
            Err(_) => Url::parse(DEFAULT_HOLIDAY_API).expect("default holiday URL is valid"),
        };

        let country = std::env::var("CAMPUSHUB_COUNTRY")
            .unwrap_or_else(|_| DEFAULT_COUNTRY.to_string());

        Ok(Self { api_base, holiday_base, country })
    }
}
