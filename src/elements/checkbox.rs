use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::Result;

element_type!(
    /// Native or ARIA checkbox
    Checkbox,
    "checkbox"
);

impl Checkbox {
    pub fn check(&self) -> Result<&Self> {
        let step = format!("Selecting {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().set_checked(&target, true)
        })?;
        self.track_coverage(ActionType::Checked);
        Ok(self)
    }

    pub fn uncheck(&self) -> Result<&Self> {
        let step = format!("Deselecting {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().set_checked(&target, false)
        })?;
        self.track_coverage(ActionType::Unchecked);
        Ok(self)
    }

    /// Wait until the checkbox is checked
    pub fn is_checked(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is selected", Self::KIND, self.name());
        self.ctx().step(&step, || self.wait_for_state("to be checked", |s| s.checked == Some(true)))?;
        Ok(self)
    }

    /// Wait until the checkbox is unchecked
    pub fn is_not_checked(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is not selected", Self::KIND, self.name());
        self.ctx().step(&step, || self.wait_for_state("to be unchecked", |s| s.checked != Some(true)))?;
        Ok(self)
    }

    /// Label from `aria-label`, falling back to the rendered text; trimmed
    pub fn label_text(&self) -> Result<String> {
        let step = format!("Reading label of {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let snapshot = self.snapshot()?;
            let label = snapshot.attribute("aria-label").unwrap_or(&snapshot.text).trim().to_string();
            log::info!("Label text: '{}'", label);
            Ok(label)
        })
    }

    pub fn has_aria_checked(&self, expected: &str) -> Result<&Self> {
        let step = format!("Checking aria-checked='{}' on {} '{}'", expected, Self::KIND, self.name());
        self.ctx().step(&step, || {
            self.wait_for_state(&format!("to have aria-checked='{}'", expected), |s| {
                s.attribute("aria-checked") == Some(expected)
            })
        })?;
        Ok(self)
    }

    pub fn hover(&self) -> Result<&Self> {
        let step = format!("Hovering over {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().hover(&target)
        })?;
        self.track_coverage(ActionType::Hover);
        Ok(self)
    }

    pub fn focus(&self) -> Result<&Self> {
        let step = format!("Focusing {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().focus(&target)
        })?;
        self.track_coverage(ActionType::Focus);
        Ok(self)
    }
}
