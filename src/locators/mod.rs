//! Locator registry
//!
//! Static tables of [`UiLocator`] constants, one module per widget of the
//! vacancy site. A locator pairs a selector (CSS or XPath) with a
//! human-readable description used for logging and report steps. Locators
//! may contain named `{placeholder}` segments that are filled with
//! [`UiLocator::format`].

pub mod breadcrumbs;
pub mod cookies;
pub mod filter_bar;
pub mod filter_menu;
pub mod footer;
pub mod header;
pub mod navbar;
pub mod response_form;
pub mod vacancies_list;
pub mod vacancy;

pub use breadcrumbs::BreadcrumbsLocators;
pub use cookies::CookiesLocators;
pub use filter_bar::FilterVacanciesLocators;
pub use filter_menu::VacancyFiltersMenuLocators;
pub use footer::FooterLocators;
pub use header::HeaderPageLocators;
pub use navbar::NavBarLocators;
pub use response_form::VacancyResponseFormLocators;
pub use vacancies_list::VacanciesListLocators;
pub use vacancy::VacancyItemLocators;

use crate::error::{E2eError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A selector plus its description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiLocator {
    /// CSS selector or XPath expression
    pub selector: Cow<'static, str>,

    /// Description shown in logs and report steps
    pub description: Cow<'static, str>,
}

impl UiLocator {
    /// Create a static locator
    pub const fn new(selector: &'static str, description: &'static str) -> Self {
        Self {
            selector: Cow::Borrowed(selector),
            description: Cow::Borrowed(description),
        }
    }

    /// Create a locator from owned strings
    pub fn owned(selector: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            selector: Cow::Owned(selector.into()),
            description: Cow::Owned(description.into()),
        }
    }

    /// Fill placeholders in both the selector and the description.
    ///
    /// Every placeholder must have a value in `params`; extra values are ignored.
    pub fn format(&self, params: &Params) -> Result<UiLocator> {
        Ok(Self::owned(
            render_template(&self.selector, params)?,
            render_template(&self.description, params)?,
        ))
    }

    /// Placeholder names used by the selector, in order of appearance
    pub fn placeholders(&self) -> Vec<String> {
        let mut names = Vec::new();
        for segment in parse_template(&self.selector) {
            if let Segment::Placeholder(name) = segment {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    /// Whether the selector has placeholders left to fill
    pub fn is_template(&self) -> bool {
        !self.placeholders().is_empty()
    }
}

impl fmt::Display for UiLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.selector)
    }
}

/// Named values substituted into locator templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: IndexMap<String, String>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add a value
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    /// Add a value in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.insert(key.into(), value.to_string());
    }

    /// Get a value by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Merge `other` on top of `self`, `other` wins on conflicts
    pub fn merged(&self, other: &Params) -> Params {
        let mut values = self.values.clone();
        for (key, value) in &other.values {
            values.insert(key.clone(), value.clone());
        }
        Params { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
    Brace(char),
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a template into literal runs and `{name}` placeholders.
/// `{{` and `}}` are escaped braces; any other brace is kept literally.
fn parse_template(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        if pos > 0 {
            segments.push(Segment::Literal(&rest[..pos]));
        }
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            segments.push(Segment::Brace('{'));
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            segments.push(Segment::Brace('}'));
            rest = &tail[2..];
        } else if tail.starts_with('{') {
            match tail[1..].find('}') {
                Some(end) if is_placeholder_name(&tail[1..1 + end]) => {
                    segments.push(Segment::Placeholder(&tail[1..1 + end]));
                    rest = &tail[end + 2..];
                }
                _ => {
                    segments.push(Segment::Literal(&tail[..1]));
                    rest = &tail[1..];
                }
            }
        } else {
            segments.push(Segment::Literal(&tail[..1]));
            rest = &tail[1..];
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

/// Render a template, rejecting placeholders without a value
pub fn render_template(template: &str, params: &Params) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Brace(c) => out.push(c),
            Segment::Placeholder(name) => {
                let value = params.get(name).ok_or_else(|| {
                    E2eError::LocatorFormat(format!(
                        "missing value for placeholder '{{{}}}' in '{}'",
                        name, template
                    ))
                })?;
                out.push_str(value);
            }
        }
    }
    Ok(out)
}
