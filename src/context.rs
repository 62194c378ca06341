use crate::browser::Driver;
use crate::config::{Settings, Timeouts};
use crate::coverage::CoverageTracker;
use crate::error::Result;
use crate::report::{Reporter, mime};
use std::sync::Arc;

/// Everything a page object needs: the driver plus the side channels
/// every action reports to. Cloning is cheap and clones share state.
#[derive(Clone)]
pub struct PageContext {
    driver: Arc<dyn Driver>,
    reporter: Reporter,
    coverage: CoverageTracker,
    timeouts: Timeouts,
    base_url: String,
}

impl PageContext {
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self {
            driver,
            reporter: Reporter::new(),
            coverage: CoverageTracker::new("vacancies"),
            timeouts: Timeouts::default(),
            base_url: Settings::default().ui_base_url(),
        }
    }

    /// Context configured from loaded settings
    pub fn from_settings(driver: Arc<dyn Driver>, settings: &Settings) -> Self {
        Self::new(driver).with_timeouts(settings.timeouts()).with_base_url(settings.ui_base_url())
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_coverage(mut self, coverage: CoverageTracker) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn driver(&self) -> &dyn Driver {
        self.driver.as_ref()
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn coverage(&self) -> &CoverageTracker {
        &self.coverage
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shorthand for [`Reporter::step`]
    pub fn step<T>(&self, name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        self.reporter.step(name, f)
    }

    /// Attach a viewport screenshot; a failing capture is only logged
    pub fn attach_screenshot(&self, name: &str) {
        match self.driver.screenshot(false) {
            Ok(png) => self.reporter.attach_bytes(name, png, mime::PNG, "png"),
            Err(e) => log::warn!("Failed to capture screenshot '{}': {}", name, e),
        }
    }

    /// Attach the page HTML; a failing read is only logged
    pub fn attach_page_source(&self, name: &str) {
        match self.driver.content() {
            Ok(html) => self.reporter.attach_text(name, &html, mime::HTML),
            Err(e) => log::warn!("Failed to read page source for '{}': {}", name, e),
        }
    }
}
