//! Request/response hooks run by both HTTP clients

use crate::api::curl::make_curl_command;
use crate::report::{Reporter, mime};

/// Client-agnostic view of an outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Buffered body; `None` when empty or streamed (multipart)
    pub body: Option<Vec<u8>>,
}

impl RequestInfo {
    fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
        headers
            .iter()
            .map(|(name, value)| (name.to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned()))
            .collect()
    }

    pub fn from_blocking(request: &reqwest::blocking::Request) -> Self {
        Self {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: Self::collect_headers(request.headers()),
            body: request.body().and_then(|b| b.as_bytes()).filter(|b| !b.is_empty()).map(<[u8]>::to_vec),
        }
    }

    pub fn from_async(request: &reqwest::Request) -> Self {
        Self {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: Self::collect_headers(request.headers()),
            body: request.body().and_then(|b| b.as_bytes()).filter(|b| !b.is_empty()).map(<[u8]>::to_vec),
        }
    }
}

/// Client-agnostic view of a received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseInfo {
    pub status: u16,
    pub reason: String,
    pub url: String,
}

impl ResponseInfo {
    pub fn new(status: reqwest::StatusCode, url: &reqwest::Url) -> Self {
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            url: url.to_string(),
        }
    }
}

pub trait HttpHook: Send + Sync {
    fn on_request(&self, _request: &RequestInfo) {}

    fn on_response(&self, _response: &ResponseInfo) {}
}

/// Logs every request and response at info level
pub struct LogHook;

impl HttpHook for LogHook {
    fn on_request(&self, request: &RequestInfo) {
        log::info!("Sending request: {} to {}", request.method, request.url);
    }

    fn on_response(&self, response: &ResponseInfo) {
        log::info!("Received response: {} {} from {}", response.status, response.reason, response.url);
    }
}

/// Attaches each request as a replayable cURL command to the report
pub struct CurlHook {
    reporter: Reporter,
}

impl CurlHook {
    pub fn new(reporter: Reporter) -> Self {
        Self { reporter }
    }
}

impl HttpHook for CurlHook {
    fn on_request(&self, request: &RequestInfo) {
        self.reporter.attach_text("cURL command", &make_curl_command(request), mime::TEXT);
    }
}
