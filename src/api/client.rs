use crate::api::hooks::{HttpHook, RequestInfo, ResponseInfo};
use crate::error::Result;
use crate::report::Reporter;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Blocking HTTP client bound to a base URL.
///
/// Every call runs as a report step and passes through the hooks.
pub struct ApiClient {
    client: Client,
    base_url: String,
    hooks: Vec<Arc<dyn HttpHook>>,
    reporter: Reporter,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, follow_redirects: bool) -> Result<Self> {
        let client = Client::builder().timeout(timeout).redirect(super::redirect_policy(follow_redirects)).build()?;
        Ok(Self { client, base_url: base_url.into(), hooks: Vec::new(), reporter: Reporter::new() })
    }

    pub fn with_hook(mut self, hook: Arc<dyn HttpHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        self.send(Method::GET, url, |builder| builder.query(query))
    }

    pub fn post_json<T: Serialize + ?Sized>(&self, url: &str, json: &T) -> Result<Response> {
        self.send(Method::POST, url, |builder| builder.json(json))
    }

    pub fn post_form<T: Serialize + ?Sized>(&self, url: &str, form: &T) -> Result<Response> {
        self.send(Method::POST, url, |builder| builder.form(form))
    }

    pub fn post_multipart(&self, url: &str, form: multipart::Form) -> Result<Response> {
        self.send(Method::POST, url, |builder| builder.multipart(form))
    }

    pub fn patch<T: Serialize + ?Sized>(&self, url: &str, json: &T) -> Result<Response> {
        self.send(Method::PATCH, url, |builder| builder.json(json))
    }

    pub fn delete(&self, url: &str) -> Result<Response> {
        self.send(Method::DELETE, url, |builder| builder)
    }

    fn send(&self, method: Method, url: &str, build: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Result<Response> {
        let full_url = super::join_url(&self.base_url, url);
        self.reporter.step(&format!("Sending {} request to {}", method, url), || {
            let request = build(self.client.request(method.clone(), &full_url)).build()?;

            let info = RequestInfo::from_blocking(&request);
            self.hooks.iter().for_each(|hook| hook.on_request(&info));

            let response = self.client.execute(request)?;

            let info = ResponseInfo::new(response.status(), response.url());
            self.hooks.iter().for_each(|hook| hook.on_response(&info));
            Ok(response)
        })
    }
}
