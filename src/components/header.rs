use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Element, Text};
use crate::error::Result;
use crate::locators::HeaderPageLocators;

/// Page title and subtitle; `location` names the page in reports
pub struct HeaderComponent {
    ctx: PageContext,
    pub title: Text,
    pub subtitle: Text,
}

impl HeaderComponent {
    pub fn new(ctx: &PageContext, location: &str) -> Self {
        Self {
            ctx: ctx.clone(),
            title: Text::named(ctx, HeaderPageLocators::TITLE).with("location", location),
            subtitle: Text::named(ctx, HeaderPageLocators::SUBTITLE).with("location", location),
        }
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.title.check_visible()?;
        self.subtitle.check_visible()?;
        Ok(self)
    }

    pub fn check_title(&self, text: &str) -> Result<&Self> {
        crate::components::check_locator(&self.title, Some(text))?;
        Ok(self)
    }
}

impl Component for HeaderComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
