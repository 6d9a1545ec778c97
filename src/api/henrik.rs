use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::{ProfileError, ProfileResult};
use crate::util;

/// Outbound client for the HenrikDev MMR endpoint.
#[derive(Debug, Clone)]
pub struct HenrikClient {
    http: Client,
    base_url: String,
    region: String,
}

impl HenrikClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(HenrikClient {
            http,
            base_url: config.api_base_url.clone(),
            region: config.region.clone(),
        })
    }

    pub fn mmr_url(&self, name: &str, tag: &str) -> String {
        format!(
            "{}/mmr/{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.region),
            urlencoding::encode(name),
            urlencoding::encode(tag)
        )
    }

    /// Single attempt. 404 becomes `NotFound`, other non-2xx `Upstream(status)`.
    pub async fn get_mmr(&self, api_key: &str, name: &str, tag: &str) -> ProfileResult<Value> {
        let headers = util::header::get_upstream_headers(api_key).map_err(|e| {
            error!("VALORANT_API_KEY is not a valid header value: {}", e);
            ProfileError::Configuration
        })?;

        let url = self.mmr_url(name, tag);
        debug!("GET {}", url);

        let resp = self.http.get(&url).headers(headers).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProfileError::NotFound);
        }
        if !status.is_success() {
            warn!("Valorant API returned {} for {}#{}", status, name, tag);
            return Err(ProfileError::Upstream(status.as_u16()));
        }

        let body = resp.bytes().await?;
        serde_json::from_slice::<Value>(&body)
            .map_err(|e| ProfileError::Internal(format!("malformed upstream body: {}", e)))
    }
}
