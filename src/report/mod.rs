//! Allure-compatible test reporting
//!
//! A [`Reporter`] records a tree of named steps with their outcome, plus
//! text and binary attachments, while a test runs. [`Reporter::finish`]
//! turns the recording into a [`TestResult`] that [`Reporter::save`] writes
//! as `<uuid>-result.json` next to its `<uuid>-attachment.<ext>` files, the
//! layout read by `allure serve`.

pub mod labels;

pub use labels::{Label, Severity};

use crate::error::{E2eError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// MIME types used by the framework
pub mod mime {
    pub const TEXT: &str = "text/plain";
    pub const HTML: &str = "text/html";
    pub const JSON: &str = "application/json";
    pub const PNG: &str = "image/png";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    /// An assertion did not hold
    Failed,
    /// The test could not run to completion for another reason
    Broken,
    Skipped,
}

impl Status {
    pub fn of(outcome: std::result::Result<(), &E2eError>) -> Self {
        match outcome {
            Ok(()) => Status::Passed,
            Err(err) if err.is_skip() => Status::Skipped,
            Err(
                E2eError::AssertionFailed(_)
                | E2eError::Timeout(_)
                | E2eError::ElementNotFound(_)
                | E2eError::UnknownCheckbox { .. },
            ) => Status::Failed,
            Err(_) => Status::Broken,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDetails {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// File name of the attachment inside the results directory
    pub source: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResult {
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    pub stage: String,
    pub steps: Vec<StepResult>,
    pub attachments: Vec<Attachment>,
    pub start: i64,
    pub stop: i64,
}

impl StepResult {
    fn open(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: Status::Passed,
            status_details: None,
            stage: "running".to_string(),
            steps: Vec::new(),
            attachments: Vec::new(),
            start: now_millis(),
            stop: 0,
        }
    }

    /// Depth-first search for a step by name
    pub fn find(&self, name: &str) -> Option<&StepResult> {
        if self.name == name {
            return Some(self);
        }
        self.steps.iter().find_map(|step| step.find(name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub uuid: String,
    pub name: String,
    pub full_name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    pub stage: String,
    pub steps: Vec<StepResult>,
    pub attachments: Vec<Attachment>,
    pub labels: Vec<Label>,
    pub start: i64,
    pub stop: i64,
}

impl TestResult {
    /// Find a step anywhere in the tree by name
    pub fn find_step(&self, name: &str) -> Option<&StepResult> {
        self.steps.iter().find_map(|step| step.find(name))
    }
}

#[derive(Default)]
struct ReportState {
    start: i64,
    /// Finished top-level steps
    steps: Vec<StepResult>,
    /// Steps currently running, innermost last
    open: Vec<StepResult>,
    attachments: Vec<Attachment>,
    /// Attachment payloads keyed by their source file name
    files: Vec<(String, Vec<u8>)>,
}

/// Shared step/attachment recorder for one test
#[derive(Clone)]
pub struct Reporter {
    state: Arc<Mutex<ReportState>>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        let state = ReportState { start: now_millis(), ..ReportState::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    fn state(&self) -> MutexGuard<'_, ReportState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` as a named step; nested calls build nested steps.
    ///
    /// The step's status follows the result of `f`, which is returned unchanged.
    pub fn step<T>(&self, name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        log::info!("{}", name);
        self.state().open.push(StepResult::open(name));

        let result = f();

        let mut guard = self.state();
        let state = &mut *guard;
        if let Some(mut step) = state.open.pop() {
            step.stop = now_millis();
            step.stage = "finished".to_string();
            if let Err(err) = &result {
                step.status = Status::of(Err(err));
                step.status_details = Some(StatusDetails { message: err.to_string() });
            }
            match state.open.last_mut() {
                Some(parent) => parent.steps.push(step),
                None => state.steps.push(step),
            }
        }
        result
    }

    /// Attach text to the running step, or to the test when no step runs
    pub fn attach_text(&self, name: &str, content: &str, mime_type: &str) {
        let extension = match mime_type {
            mime::HTML => "html",
            mime::JSON => "json",
            _ => "txt",
        };
        self.attach_bytes(name, content.as_bytes().to_vec(), mime_type, extension);
    }

    /// Attach a binary payload (screenshots, downloaded files)
    pub fn attach_bytes(&self, name: &str, content: Vec<u8>, mime_type: &str, extension: &str) {
        let source = format!("{}-attachment.{}", uuid::Uuid::new_v4(), extension);
        let attachment = Attachment { name: name.to_string(), source: source.clone(), mime_type: mime_type.to_string() };

        let mut guard = self.state();
        let state = &mut *guard;
        state.files.push((source, content));
        match state.open.last_mut() {
            Some(step) => step.attachments.push(attachment),
            None => state.attachments.push(attachment),
        }
    }

    /// Names of every attachment recorded so far, in order
    pub fn attachment_names(&self) -> Vec<String> {
        fn collect(steps: &[StepResult], out: &mut Vec<String>) {
            for step in steps {
                out.extend(step.attachments.iter().map(|a| a.name.clone()));
                collect(&step.steps, out);
            }
        }

        let state = self.state();
        let mut names: Vec<String> = state.attachments.iter().map(|a| a.name.clone()).collect();
        collect(&state.steps, &mut names);
        collect(&state.open, &mut names);
        names
    }

    /// Close the recording and build the test result
    pub fn finish(&self, test_name: &str, outcome: std::result::Result<(), &E2eError>, labels: Vec<Label>) -> TestResult {
        let state = self.state();
        TestResult {
            uuid: uuid::Uuid::new_v4().to_string(),
            name: test_name.to_string(),
            full_name: format!("vacancy_e2e.{}", test_name),
            status: Status::of(outcome),
            status_details: outcome.err().map(|err| StatusDetails { message: err.to_string() }),
            stage: "finished".to_string(),
            steps: state.steps.clone(),
            attachments: state.attachments.clone(),
            labels,
            start: state.start,
            stop: now_millis(),
        }
    }

    /// Write the result and every attachment payload into `dir`
    pub fn save(&self, result: &TestResult, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;

        for (source, content) in &self.state().files {
            std::fs::write(dir.join(source), content)?;
        }

        let path = dir.join(format!("{}-result.json", result.uuid));
        std::fs::write(&path, serde_json::to_vec_pretty(result)?)?;
        log::debug!("Report written to {}", path.display());
        Ok(path)
    }
}

/// Write `environment.properties` shown on the report overview
pub fn write_environment(dir: &Path, properties: &[(String, String)]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let body: String = properties.iter().map(|(key, value)| format!("{}={}\n", key, value)).collect();
    let path = dir.join("environment.properties");
    std::fs::write(&path, body)?;
    Ok(path)
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_steps_and_status() {
        let reporter = Reporter::new();
        let result: Result<()> = reporter.step("Open vacancies", || {
            reporter.step("Check visible", || Ok(()))?;
            reporter.step("Check sorted", || Err(E2eError::AssertionFailed("not sorted".into())))
        });
        assert!(result.is_err());

        let test = reporter.finish("test_sort", result.as_ref().map(|_| ()), vec![Label::feature("Vacancies")]);
        assert_eq!(test.status, Status::Failed);
        assert_eq!(test.steps.len(), 1);

        let outer = &test.steps[0];
        assert_eq!(outer.status, Status::Failed);
        assert_eq!(outer.steps.len(), 2);
        assert_eq!(outer.steps[0].status, Status::Passed);
        assert_eq!(outer.steps[1].status_details.as_ref().unwrap().message, "Assertion failed: not sorted");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(Status::of(Ok(())), Status::Passed);
        assert_eq!(Status::of(Err(&E2eError::Skipped("captcha".into()))), Status::Skipped);
        assert_eq!(Status::of(Err(&E2eError::Timeout("x".into()))), Status::Failed);
        assert_eq!(Status::of(Err(&E2eError::LaunchFailed("x".into()))), Status::Broken);
    }

    #[test]
    fn test_attachment_goes_to_running_step() {
        let reporter = Reporter::new();
        reporter.attach_text("root note", "hello", mime::TEXT);
        reporter
            .step("Capture", || {
                reporter.attach_bytes("screen", vec![1, 2, 3], mime::PNG, "png");
                Ok(())
            })
            .unwrap();

        let test = reporter.finish("test_attach", Ok(()), Vec::new());
        assert_eq!(test.attachments[0].name, "root note");
        assert_eq!(test.steps[0].attachments[0].name, "screen");
        assert!(test.steps[0].attachments[0].source.ends_with("-attachment.png"));
        assert_eq!(reporter.attachment_names(), vec!["root note", "screen"]);
    }

    #[test]
    fn test_save_writes_result_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new();
        reporter.attach_text("cURL command", "curl -X 'GET'", mime::TEXT);

        let test = reporter.finish("test_save", Ok(()), vec![Label::severity(Severity::Critical)]);
        let path = reporter.save(&test, dir.path()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(json["status"], "passed");
        assert_eq!(json["fullName"], "vacancy_e2e.test_save");
        assert_eq!(json["labels"][0]["value"], "critical");
        let source = json["attachments"][0]["source"].as_str().unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join(source)).unwrap(), "curl -X 'GET'");
    }

    #[test]
    fn test_environment_properties() {
        let dir = tempfile::tempdir().unwrap();
        let props = vec![("Environment".to_string(), "local".to_string())];
        let path = write_environment(dir.path(), &props).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Environment=local\n");
    }
}
