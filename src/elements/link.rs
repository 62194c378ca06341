use crate::browser::Download;
use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::{E2eError, Result};

element_type!(
    /// Anchor element, possibly pointing at a downloadable file
    Link,
    "link"
);

impl Link {
    pub fn check_enabled(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is enabled", Self::KIND, self.name());
        self.ctx().step(&step, || self.wait_for_state("to be enabled", |s| s.enabled))?;
        self.track_coverage(ActionType::Enabled);
        Ok(self)
    }

    pub fn check_disabled(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is disabled", Self::KIND, self.name());
        self.ctx().step(&step, || self.wait_for_state("to be disabled", |s| !s.enabled))?;
        self.track_coverage(ActionType::Disabled);
        Ok(self)
    }

    /// Download the linked file and check it is named `file_name` and not empty
    pub fn check_download_file(&self, file_name: &str) -> Result<Download> {
        let step = format!("Downloading file from {} '{}'", Self::KIND, self.name());
        let download = self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().download(&target)
        })?;
        self.track_coverage(ActionType::Click);
        log::info!("File '{}' downloaded", download.suggested_filename);

        self.ctx().step(&format!("Checking that the file name is '{}'", file_name), || {
            if download.suggested_filename == file_name {
                Ok(())
            } else {
                Err(E2eError::AssertionFailed(format!(
                    "File name '{}' does not match the expected '{}'",
                    download.suggested_filename, file_name
                )))
            }
        })?;

        self.ctx().step(&format!("Checking that the file '{}' is not empty", file_name), || {
            if download.size > 0 {
                Ok(())
            } else {
                Err(E2eError::AssertionFailed(format!("Downloaded file '{}' is empty", download.suggested_filename)))
            }
        })?;

        Ok(download)
    }
}
