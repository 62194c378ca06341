use crate::context::PageContext;
use crate::elements::{Element, Input};
use crate::error::Result;
use crate::wait::poll_until;
use regex::Regex;

/// A group of elements forming one widget of the page
pub trait Component {
    fn ctx(&self) -> &PageContext;

    /// Wait until the current URL matches `pattern`
    fn check_current_url(&self, pattern: &Regex) -> Result<()> {
        check_current_url(self.ctx(), pattern)
    }
}

pub fn check_current_url(ctx: &PageContext, pattern: &Regex) -> Result<()> {
    let step = format!("Checking that current url matches pattern '{}'", pattern.as_str());
    ctx.step(&step, || {
        let mut last = String::new();
        poll_until(
            ctx.timeouts().default,
            || format!("url matching '{}'", pattern.as_str()),
            || {
                last = ctx.driver().url()?;
                Ok(pattern.is_match(&last).then_some(()))
            },
        )
        .inspect_err(|_| log::error!("Current url '{}' does not match '{}'", last, pattern.as_str()))
    })
}

/// Element is visible and, when given, has `text`
pub fn check_locator<E: Element>(element: &E, text: Option<&str>) -> Result<()> {
    element.check_visible()?;
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        element.check_contain_text(text)?;
    }
    Ok(())
}

/// Input is visible and, when given, holds `value`
pub fn check_input_locator(input: &Input, value: Option<&str>) -> Result<()> {
    input.check_visible()?;
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        input.check_have_value(value)?;
    }
    Ok(())
}
