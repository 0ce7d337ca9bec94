use std::{env, path::PathBuf};
use url::Url;

// Runtime client settings, read from the environment (optionally via .env).

pub const DEFAULT_API_BASE_URL: &str = "https://egoriktut.ru/api_ks_app/v1/";
pub const DEFAULT_STORAGE_PATH: &str = ".ks_client/storage.toml";

pub fn api_base_url() -> Result<Url, url::ParseError> {
    let raw = env::var("KS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    parse_base_url(&raw)
}

pub fn storage_path() -> PathBuf {
    env::var("KS_STORAGE_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
}

// Endpoints are joined onto the base, so it must end with a slash to keep its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}
