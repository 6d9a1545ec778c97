use reqwest::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};

pub static ACCEPT: &str = "application/json";
pub static USER_AGENT: &str = concat!("valorant-profile-api/", env!("CARGO_PKG_VERSION"));

pub fn get_upstream_headers(api_key: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(api_key)?);
    Ok(headers)
}
