//! HTTP client helpers for API tests

pub mod assertions;
pub mod async_client;
pub mod client;
pub mod curl;
pub mod hooks;

pub use assertions::{assert_equal, assert_is_true, assert_length, assert_status_code};
pub use async_client::AsyncApiClient;
pub use client::ApiClient;
pub use curl::make_curl_command;
pub use hooks::{CurlHook, HttpHook, LogHook, RequestInfo, ResponseInfo};

use crate::config::Settings;
use crate::error::Result;
use crate::report::Reporter;
use std::sync::Arc;
use std::time::Duration;

/// Unauthenticated client for the configured API, logging and attaching cURL commands
pub fn public_http_client(settings: &Settings, reporter: &Reporter) -> Result<ApiClient> {
    Ok(ApiClient::new(settings.api_base_url(), timeout(settings), settings.api.follow_redirects)?
        .with_reporter(reporter.clone())
        .with_hook(Arc::new(LogHook))
        .with_hook(Arc::new(CurlHook::new(reporter.clone()))))
}

/// Async flavour of [`public_http_client`]
pub fn public_async_http_client(settings: &Settings, reporter: &Reporter) -> Result<AsyncApiClient> {
    Ok(AsyncApiClient::new(settings.api_base_url(), timeout(settings), settings.api.follow_redirects)?
        .with_reporter(reporter.clone())
        .with_hook(Arc::new(LogHook))
        .with_hook(Arc::new(CurlHook::new(reporter.clone()))))
}

fn timeout(settings: &Settings) -> Duration {
    Duration::from_secs_f64(settings.api.timeout.max(0.0))
}

pub(crate) fn redirect_policy(follow: bool) -> reqwest::redirect::Policy {
    if follow { reqwest::redirect::Policy::limited(10) } else { reqwest::redirect::Policy::none() }
}

/// Resolve `url` against `base`; absolute URLs pass through
pub fn join_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    if url.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://cism-ms.ru/api/v1", "/vacancies"), "https://cism-ms.ru/api/v1/vacancies");
        assert_eq!(join_url("https://cism-ms.ru/api/v1/", "vacancies"), "https://cism-ms.ru/api/v1/vacancies");
        assert_eq!(join_url("https://cism-ms.ru", "http://other/x"), "http://other/x");
        assert_eq!(join_url("https://cism-ms.ru", ""), "https://cism-ms.ru");
    }
}
