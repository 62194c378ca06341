use crate::browser::{NodeSnapshot, SelectorKind, Target};
use crate::context::PageContext;
use crate::coverage::{ActionType, SelectorType};
use crate::error::{E2eError, Result};
use crate::locators::{Params, UiLocator};
use crate::wait::poll_until;

/// State shared by every element wrapper: where the element lives and
/// how it is named in logs and reports
#[derive(Clone)]
pub struct ElementBase {
    ctx: PageContext,
    locator: UiLocator,
    name: String,
    kind: SelectorKind,
    nth: usize,
    params: Params,
}

impl ElementBase {
    pub fn new(ctx: &PageContext, locator: UiLocator, name: impl Into<String>, kind: SelectorKind) -> Self {
        Self { ctx: ctx.clone(), locator, name: name.into(), kind, nth: 0, params: Params::new() }
    }

    pub fn ctx(&self) -> &PageContext {
        &self.ctx
    }

    pub fn locator_template(&self) -> &UiLocator {
        &self.locator
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    pub fn index(&self) -> usize {
        self.nth
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Render the selector template into a driver target
    pub fn target(&self) -> Result<Target> {
        let rendered = self.locator.format(&self.params)?;
        Ok(Target { kind: self.kind, selector: rendered.selector.into_owned(), nth: self.nth })
    }
}

/// A typed handle on a DOM element.
///
/// Handles are lazy: nothing touches the page until an action or assertion
/// runs. Every action runs as a report step and, when it succeeds, leaves a
/// coverage record keyed by the rendered selector.
pub trait Element: Sized + Clone {
    /// Element kind shown in step names
    const KIND: &'static str;

    fn base(&self) -> &ElementBase;

    fn base_mut(&mut self) -> &mut ElementBase;

    fn from_base(base: ElementBase) -> Self;

    /// Element located by CSS selector or XPath
    fn new(ctx: &PageContext, locator: UiLocator, name: impl Into<String>) -> Self {
        Self::from_base(ElementBase::new(ctx, locator, name, SelectorKind::Path))
    }

    /// Element located by path, named by the locator's description
    fn named(ctx: &PageContext, locator: UiLocator) -> Self {
        let name = locator.description.clone().into_owned();
        Self::new(ctx, locator, name)
    }

    /// Element located by its `data-testid`
    fn by_test_id(ctx: &PageContext, test_id: &str, name: impl Into<String>) -> Self {
        let locator = UiLocator::owned(test_id, test_id);
        Self::from_base(ElementBase::new(ctx, locator, name, SelectorKind::TestId))
    }

    /// Same element, restricted to the given match (0-based)
    fn nth(mut self, nth: usize) -> Self {
        self.base_mut().nth = nth;
        self
    }

    /// Same element with a template parameter filled.
    /// A `{placeholder}` in the display name is filled too.
    fn with(mut self, key: &str, value: impl ToString) -> Self {
        let base = self.base_mut();
        base.params.insert(key, value.to_string());
        if let Ok(name) = crate::locators::render_template(&base.name, &base.params) {
            base.name = name;
        }
        self
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn ctx(&self) -> &PageContext {
        self.base().ctx()
    }

    /// Resolve to the live nth match, waiting up to the default timeout.
    ///
    /// On failure a screenshot named `element_not_found_<name>` is attached.
    fn locator(&self) -> Result<Target> {
        let target = self.base().target()?;
        let step = format!("Getting locator with '{}' at index '{}'", target.selector, target.nth);

        self.ctx().step(&step, || {
            let driver = self.ctx().driver();
            let found = poll_until(self.ctx().timeouts().default, || target.to_string(), || {
                Ok((driver.count(&target)? > target.nth).then_some(()))
            });

            match found {
                Ok(()) => Ok(target.clone()),
                Err(E2eError::Timeout(_)) => {
                    let message = format!("Element '{}' not found by {}", self.name(), target);
                    log::error!("{}", message);
                    self.ctx().attach_screenshot(&format!("element_not_found_{}", self.name()));
                    Err(E2eError::ElementNotFound(message))
                }
                Err(e) => Err(e),
            }
        })
    }

    /// Selector used as the coverage key
    fn raw_locator(&self) -> Result<String> {
        Ok(self.base().target()?.raw())
    }

    fn track_coverage(&self, action: ActionType) {
        match self.raw_locator() {
            Ok(selector) => {
                let selector_type = SelectorType::of(&selector);
                self.ctx().coverage().track(&selector, action, selector_type);
            }
            Err(e) => log::warn!("Coverage skipped for '{}': {}", self.name(), e),
        }
    }

    /// Current snapshot of the resolved element
    fn snapshot(&self) -> Result<NodeSnapshot> {
        let target = self.locator()?;
        self.ctx()
            .driver()
            .inspect(&target)?
            .ok_or_else(|| E2eError::ElementNotFound(format!("Element '{}' detached: {}", self.name(), target)))
    }

    /// Wait until the element's snapshot satisfies `condition`
    fn wait_for_state(&self, expectation: &str, condition: impl Fn(&NodeSnapshot) -> bool) -> Result<NodeSnapshot> {
        let target = self.locator()?;
        let driver = self.ctx().driver();
        poll_until(
            self.ctx().timeouts().default,
            || format!("{} '{}' {}", Self::KIND, self.name(), expectation),
            || Ok(driver.inspect(&target)?.filter(|snapshot| condition(snapshot))),
        )
    }

    fn click(&self) -> Result<()> {
        let step = format!("Clicking {} '{}'", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.locator()?;
            self.ctx().driver().click(&target)
        })?;
        self.track_coverage(ActionType::Click);
        Ok(())
    }

    fn check_visible(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is visible", Self::KIND, self.name());
        self.ctx().step(&step, || self.wait_for_state("to be visible", |s| s.visible))?;
        self.track_coverage(ActionType::Visible);
        Ok(self)
    }

    /// Passes when the element is absent or not rendered
    fn check_hidden(&self) -> Result<&Self> {
        let step = format!("Checking that {} '{}' is hidden", Self::KIND, self.name());
        self.ctx().step(&step, || {
            let target = self.base().target()?;
            let driver = self.ctx().driver();
            poll_until(
                self.ctx().timeouts().default,
                || format!("{} '{}' to be hidden", Self::KIND, self.name()),
                || Ok(driver.inspect(&target)?.is_none_or(|s| !s.visible).then_some(())),
            )
        })?;
        self.track_coverage(ActionType::Hidden);
        Ok(self)
    }

    fn check_contain_text(&self, text: &str) -> Result<&Self> {
        let step = format!("Checking that {} '{}' has text '{}'", Self::KIND, self.name(), text);
        self.ctx()
            .step(&step, || self.wait_for_state(&format!("to contain text '{}'", text), |s| s.text.contains(text)))?;
        self.track_coverage(ActionType::Text);
        Ok(self)
    }

    fn check_have_attribute(&self, name: &str, value: &str) -> Result<&Self> {
        let step = format!("Checking that {} '{}' has {}='{}'", Self::KIND, self.name(), name, value);
        self.ctx().step(&step, || {
            self.wait_for_state(&format!("to have {}='{}'", name, value), |s| s.attribute(name) == Some(value))
        })?;
        Ok(self)
    }

    fn inner_text(&self) -> Result<String> {
        Ok(self.snapshot()?.text)
    }

    fn attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.snapshot()?.attribute(name).map(str::to_string))
    }

    /// Immediate visibility probe, no waiting
    fn is_visible(&self) -> Result<bool> {
        let target = self.base().target()?;
        Ok(self.ctx().driver().inspect(&target)?.is_some_and(|s| s.visible))
    }

    /// Number of nodes matching the selector, ignoring the index
    fn count(&self) -> Result<usize> {
        let target = self.base().target()?;
        self.ctx().driver().count(&target)
    }
}
