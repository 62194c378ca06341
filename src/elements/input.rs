use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::Result;
use std::time::Duration;

element_type!(
    /// Text input or textarea
    Input,
    "input"
);

impl Input {
    pub fn fill(&self, value: &str) -> Result<&Self> {
        let step = format!("Filling {} '{}' with '{}'", Self::KIND, self.name(), value);
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().fill(&target, value)
        })?;
        self.track_coverage(ActionType::Fill);
        Ok(self)
    }

    pub fn check_have_value(&self, value: &str) -> Result<&Self> {
        let step = format!("Checking that {} '{}' has value '{}'", Self::KIND, self.name(), value);
        self.ctx().step(&step, || {
            self.wait_for_state(&format!("to have value '{}'", value), |s| s.value.as_deref() == Some(value))
        })?;
        self.track_coverage(ActionType::Value);
        Ok(self)
    }

    pub fn clear(&self) -> Result<&Self> {
        let step = format!("Clearing {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().clear(&target)
        })?;
        self.track_coverage(ActionType::Clear);
        Ok(self)
    }

    /// Type key by key, `delay` between keystrokes
    pub fn type_text(&self, text: &str, delay: Duration) -> Result<&Self> {
        let step = format!("Typing '{}' into {} '{}' with delay {:?}", text, Self::KIND, self.name(), delay);
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().type_text(&target, text, delay)
        })?;
        self.track_coverage(ActionType::Type);
        Ok(self)
    }
}
