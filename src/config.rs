use std::time::Duration;

use anyhow::Context;

pub static DEFAULT_API_BASE_URL: &str = "https://api.henrikdev.xyz/valorant/v2";
pub static DEFAULT_REGION: &str = "na";
pub static DEFAULT_ENVIRONMENT: &str = "development";
pub static DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,\
    https://valorant-finder-app.vercel.app,\
    https://valorant-finder.com,\
    *.vercel.app";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Missing key is reported per request, the server still starts without it.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub region: String,
    pub timeout: Duration,
    pub port: u16,
    pub environment: String,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Config::default();

        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().with_context(|| format!("invalid PORT value {:?}", p))?,
            None => defaults.port,
        };
        let timeout = match var("UPSTREAM_TIMEOUT_SECS") {
            Some(t) => Duration::from_secs(
                t.parse::<u64>()
                    .with_context(|| format!("invalid UPSTREAM_TIMEOUT_SECS value {:?}", t))?,
            ),
            None => defaults.timeout,
        };

        Ok(Config {
            api_key: var("VALORANT_API_KEY"),
            api_base_url: var("VALORANT_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            region: var("VALORANT_REGION").unwrap_or(defaults.region),
            timeout,
            port,
            environment: var("APP_ENV").unwrap_or(defaults.environment),
            allowed_origins: var("ALLOWED_ORIGINS")
                .map(|o| split_origins(&o))
                .unwrap_or(defaults.allowed_origins),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}
