use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::{E2eError, Result};

/// CSS class Quasar puts on the selected tab
pub const ACTIVE_TAB_CLASS: &str = "q-tab--active";

element_type!(
    /// Category tab of a Quasar tab bar
    Tab,
    "tab"
);

impl Tab {
    /// Whether the tab becomes active within the default timeout.
    ///
    /// An inactive tab is reported with a warning, not an error.
    pub fn is_active(&self) -> Result<bool> {
        let step = format!("Checking that {} '{}' is active (has class '{}')", Self::KIND, self.name(), ACTIVE_TAB_CLASS);
        let active = self.ctx().step(&step, || {
            match self.wait_for_state("to be active", |s| s.has_class(ACTIVE_TAB_CLASS)) {
                Ok(_) => Ok(true),
                Err(E2eError::Timeout(_)) => {
                    log::warn!("{}: tab is NOT active", step);
                    Ok(false)
                }
                Err(e) => Err(e),
            }
        })?;
        self.track_coverage(ActionType::Checked);
        Ok(active)
    }
}
