use serde::{Deserialize, Serialize};
use std::fmt;

/// Test importance as understood by Allure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocker,
    Critical,
    #[default]
    Normal,
    Minor,
    Trivial,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Blocker => "blocker",
            Severity::Critical => "critical",
            Severity::Normal => "normal",
            Severity::Minor => "minor",
            Severity::Trivial => "trivial",
        };
        f.write_str(name)
    }
}

/// A `name=value` label attached to a test result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn epic(value: impl Into<String>) -> Self {
        Self::new("epic", value)
    }

    pub fn feature(value: impl Into<String>) -> Self {
        Self::new("feature", value)
    }

    pub fn story(value: impl Into<String>) -> Self {
        Self::new("story", value)
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Self::new("tag", value)
    }

    pub fn severity(severity: Severity) -> Self {
        Self::new("severity", severity.to_string())
    }
}
