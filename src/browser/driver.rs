//! Browser driver seam
//!
//! Page objects talk to the browser only through [`Driver`]. The production
//! implementation is [`BrowserSession`](super::BrowserSession) over
//! headless_chrome; tests plug in scripted drivers.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// How an element selector is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorKind {
    /// CSS selector or XPath expression
    Path,
    /// Value of the `data-testid` attribute
    TestId,
}

/// A rendered selector restricted to its nth match (0-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub kind: SelectorKind,
    pub selector: String,
    pub nth: usize,
}

impl Target {
    pub fn path(selector: impl Into<String>) -> Self {
        Self { kind: SelectorKind::Path, selector: selector.into(), nth: 0 }
    }

    pub fn test_id(id: impl Into<String>) -> Self {
        Self { kind: SelectorKind::TestId, selector: id.into(), nth: 0 }
    }

    pub fn nth(mut self, nth: usize) -> Self {
        self.nth = nth;
        self
    }

    /// Selector as recorded for coverage: the path itself, or an XPath
    /// equivalent for test ids
    pub fn raw(&self) -> String {
        match self.kind {
            SelectorKind::Path => self.selector.clone(),
            SelectorKind::TestId => format!("//*[@data-testid='{}'][{}]", self.selector, self.nth + 1),
        }
    }

    /// Whether the selector is an XPath expression rather than CSS
    pub fn is_xpath(&self) -> bool {
        self.kind == SelectorKind::Path && is_xpath(&self.selector)
    }

    /// CSS or XPath expression matching every candidate, before `nth` applies
    pub fn query(&self) -> String {
        match self.kind {
            SelectorKind::Path => self.selector.clone(),
            SelectorKind::TestId => format!("[data-testid=\"{}\"]", self.selector.replace('"', "\\\"")),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nth == 0 { f.write_str(&self.raw()) } else { write!(f, "{} [nth={}]", self.raw(), self.nth) }
    }
}

/// XPath expressions start with a slash, a parenthesis or a relative step
pub fn is_xpath(selector: &str) -> bool {
    let s = selector.trim_start();
    s.starts_with('/') || s.starts_with('(') || s.starts_with("./") || s.starts_with("..")
}

/// Page load milestone to wait for after navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitUntil {
    DomContentLoaded,
    Load,
    /// Document complete and no new network resources for a short quiet window
    #[default]
    NetworkIdle,
}

/// Point-in-time view of one DOM node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSnapshot {
    pub tag: String,

    /// Rendered text (`innerText`)
    pub text: String,

    pub visible: bool,
    pub enabled: bool,

    /// `checked` for inputs, `aria-checked` for role=checkbox; `None` otherwise
    pub checked: Option<bool>,

    /// Current value of form controls
    pub value: Option<String>,

    pub attributes: HashMap<String, String>,
}

impl NodeSnapshot {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the `class` attribute lists `class_name`
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class_name))
            .unwrap_or(false)
    }
}

/// A file fetched through a download link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub suggested_filename: String,
    pub size: u64,
}

/// Browser primitives needed by the page-object layer.
///
/// Lookups never wait: callers poll with [`crate::wait::poll_until`].
/// Actions fail with `ElementNotFound` when the target has no nth match.
pub trait Driver: Send + Sync {
    fn goto(&self, url: &str, wait: WaitUntil, timeout: Duration) -> Result<()>;

    fn reload(&self, wait: WaitUntil, timeout: Duration) -> Result<()>;

    fn url(&self) -> Result<String>;

    fn title(&self) -> Result<String>;

    /// Serialized HTML of the current document
    fn content(&self) -> Result<String>;

    /// PNG screenshot of the viewport, or of the whole scrollable page
    fn screenshot(&self, full_page: bool) -> Result<Vec<u8>>;

    /// Number of nodes matching the target's selector, ignoring `nth`
    fn count(&self, target: &Target) -> Result<usize>;

    /// Snapshot of the nth match, `None` when it does not exist
    fn inspect(&self, target: &Target) -> Result<Option<NodeSnapshot>>;

    /// Number of descendants of the scope node matching `inner`
    fn count_within(&self, scope: &Target, inner: &str) -> Result<usize>;

    /// Rendered text of every descendant of the scope node matching `inner`
    fn texts_within(&self, scope: &Target, inner: &str) -> Result<Vec<String>>;

    fn computed_style(&self, target: &Target, property: &str) -> Result<String>;

    fn click(&self, target: &Target) -> Result<()>;

    /// Replace the value of a form control
    fn fill(&self, target: &Target, value: &str) -> Result<()>;

    fn clear(&self, target: &Target) -> Result<()>;

    /// Send keystrokes one by one, `delay` apart
    fn type_text(&self, target: &Target, text: &str, delay: Duration) -> Result<()>;

    /// Bring a checkbox to the requested state, clicking only if needed
    fn set_checked(&self, target: &Target, checked: bool) -> Result<()>;

    fn hover(&self, target: &Target) -> Result<()>;

    fn focus(&self, target: &Target) -> Result<()>;

    /// Follow a download link and report what it delivers
    fn download(&self, target: &Target) -> Result<Download>;

    /// Fixed delay; scripted drivers skip it
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
