//! UI coverage tracking
//!
//! Records which selectors the suite touched and how. Purely observational:
//! nothing here can fail a test, write errors are logged and swallowed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Click,
    Visible,
    Hidden,
    Text,
    Value,
    Fill,
    Type,
    Clear,
    Enabled,
    Disabled,
    Checked,
    Unchecked,
    Hover,
    Focus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectorType {
    Css,
    Xpath,
}

impl SelectorType {
    /// Classify a raw selector string
    pub fn of(selector: &str) -> Self {
        if crate::browser::driver::is_xpath(selector) { SelectorType::Xpath } else { SelectorType::Css }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRecord {
    pub selector: String,
    pub action: ActionType,
    pub selector_type: SelectorType,
}

/// Per-selector aggregate: how often each action ran against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorCoverage {
    pub selector: String,
    pub selector_type: SelectorType,
    pub actions: BTreeMap<ActionType, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub app: String,
    pub total_actions: usize,
    pub elements: Vec<SelectorCoverage>,
}

/// Shared, clonable coverage sink
#[derive(Clone)]
pub struct CoverageTracker {
    app: String,
    records: Arc<Mutex<Vec<CoverageRecord>>>,
}

impl CoverageTracker {
    pub fn new(app: impl Into<String>) -> Self {
        Self { app: app.into(), records: Arc::new(Mutex::new(Vec::new())) }
    }

    fn records(&self) -> MutexGuard<'_, Vec<CoverageRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn track(&self, selector: &str, action: ActionType, selector_type: SelectorType) {
        log::trace!("Coverage: {:?} on {}", action, selector);
        self.records().push(CoverageRecord { selector: selector.to_string(), action, selector_type });
    }

    pub fn snapshot(&self) -> Vec<CoverageRecord> {
        self.records().clone()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Aggregate records per selector, in first-seen order
    pub fn summary(&self) -> CoverageReport {
        let records = self.records();
        let mut elements: Vec<SelectorCoverage> = Vec::new();

        for record in records.iter() {
            let index = match elements.iter().position(|e| e.selector == record.selector) {
                Some(index) => index,
                None => {
                    elements.push(SelectorCoverage {
                        selector: record.selector.clone(),
                        selector_type: record.selector_type,
                        actions: BTreeMap::new(),
                    });
                    elements.len() - 1
                }
            };
            *elements[index].actions.entry(record.action).or_insert(0) += 1;
        }

        CoverageReport { app: self.app.clone(), total_actions: records.len(), elements }
    }

    /// Write the summary as `<uuid>.json` into `dir`.
    ///
    /// Returns the written path, or `None` after logging the failure.
    pub fn save(&self, dir: &Path) -> Option<PathBuf> {
        let path = dir.join(format!("{}.json", uuid::Uuid::new_v4()));
        let written = std::fs::create_dir_all(dir)
            .map_err(|e| e.to_string())
            .and_then(|_| serde_json::to_vec_pretty(&self.summary()).map_err(|e| e.to_string()))
            .and_then(|body| std::fs::write(&path, body).map_err(|e| e.to_string()));

        match written {
            Ok(()) => Some(path),
            Err(e) => {
                log::warn!("Failed to save UI coverage to {}: {}", dir.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_groups_by_selector() {
        let tracker = CoverageTracker::new("vacancies");
        tracker.track("//footer//a", ActionType::Visible, SelectorType::Xpath);
        tracker.track("//footer//a", ActionType::Click, SelectorType::Xpath);
        tracker.track("//footer//a", ActionType::Click, SelectorType::Xpath);
        tracker.track("div.q-tab", ActionType::Checked, SelectorType::Css);

        let report = tracker.summary();
        assert_eq!(report.total_actions, 4);
        assert_eq!(report.elements.len(), 2);
        assert_eq!(report.elements[0].actions[&ActionType::Click], 2);
        assert_eq!(report.elements[1].selector_type, SelectorType::Css);
    }

    #[test]
    fn test_clones_share_records() {
        let tracker = CoverageTracker::new("vacancies");
        let clone = tracker.clone();
        clone.track("//a", ActionType::Hover, SelectorType::of("//a"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let tracker = CoverageTracker::new("vacancies");
        // A regular file cannot hold a directory
        assert!(tracker.save(&file.path().join("nested")).is_none());

        let dir = tempfile::tempdir().unwrap();
        let path = tracker.save(dir.path()).unwrap();
        assert!(path.exists());
    }
}
