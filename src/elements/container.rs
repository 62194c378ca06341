use crate::coverage::ActionType;
use crate::elements::Element;
use crate::error::Result;

element_type!(
    /// Element grouping repeated children, e.g. a result list
    Container,
    "container"
);

impl Container {
    /// Check that at most `expected_max` descendants match `inner_path`.
    ///
    /// Waits the settle delay first so that a filter request can land.
    pub fn check_less_or_equal_count_elements(&self, inner_path: &str, expected_max: usize) -> Result<&Self> {
        let step = format!("Checking that {} '{}' holds at most {} elements", Self::KIND, self.name(), expected_max);
        self.ctx().step(&step, || {
            let target = self.locator()?;
            let driver = self.ctx().driver();
            driver.pause(self.ctx().timeouts().settle);

            let actual = driver.count_within(&target, inner_path)?;
            log::info!("{}, actual count: {}", step, actual);

            crate::verify::check_count_at_most(&format!("{} '{}'", Self::KIND, self.name()), actual, expected_max)
                .inspect_err(|e| log::error!("Filtering error: {}", e))
        })?;
        self.track_coverage(ActionType::Visible);
        Ok(self)
    }

    /// Number of descendants matching `inner_path`, no settle delay
    pub fn count_inner(&self, inner_path: &str) -> Result<usize> {
        let target = self.locator()?;
        self.ctx().driver().count_within(&target, inner_path)
    }
}
