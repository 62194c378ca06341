use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::Result;

element_type!(
    /// Clickable button
    Button,
    "button"
);

impl Button {
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
}
