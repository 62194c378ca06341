use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Container, Element, Text};
use crate::error::Result;
use crate::locators::VacanciesListLocators;

/// "Nothing found" placeholder shown instead of the vacancy list
pub struct EmptyViewComponent {
    ctx: PageContext,
    pub container: Container,
    pub title: Text,
    pub description: Text,
}

impl EmptyViewComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            container: Container::named(ctx, VacanciesListLocators::EMPTY_VIEW_CONTAINER),
            title: Text::named(ctx, VacanciesListLocators::EMPTY_VIEW_TITLE),
            description: Text::named(ctx, VacanciesListLocators::EMPTY_VIEW_DESCRIPTION),
        }
    }

    pub fn should_be_visible(&self) -> Result<&Self> {
        self.container.check_visible()?;
        Ok(self)
    }

    pub fn should_not_be_visible(&self) -> Result<&Self> {
        self.container.check_hidden()?;
        Ok(self)
    }

    pub fn should_have_title(&self, expected: Option<&str>) -> Result<&Self> {
        crate::components::check_locator(&self.title, expected)?;
        Ok(self)
    }

    pub fn should_have_description(&self, expected: Option<&str>) -> Result<&Self> {
        crate::components::check_locator(&self.description, expected)?;
        Ok(self)
    }

    pub fn should_contain_text(&self, text: &str) -> Result<&Self> {
        self.container.check_contain_text(text)?;
        Ok(self)
    }

    /// Title text, empty when the placeholder is not rendered
    pub fn get_title_text(&self) -> Result<String> {
        text_or_empty(&self.title)
    }

    pub fn get_description_text(&self) -> Result<String> {
        text_or_empty(&self.description)
    }

    pub fn get_full_text(&self) -> Result<String> {
        text_or_empty(&self.container)
    }

    pub fn is_displayed(&self) -> Result<bool> {
        self.container.is_visible()
    }

    /// Attach a screenshot to the report when the placeholder is shown
    pub fn take_screenshot(&self, name: &str) -> Result<&Self> {
        if self.is_displayed()? {
            self.ctx.attach_screenshot(name);
        }
        Ok(self)
    }

    pub fn verify_complete_empty_state(&self, title: Option<&str>, description: Option<&str>) -> Result<&Self> {
        self.ctx.step("Checking the empty state", || {
            self.should_be_visible()?.should_have_title(title)?.should_have_description(description)?;
            Ok(())
        })?;
        Ok(self)
    }
}

fn text_or_empty<E: Element>(element: &E) -> Result<String> {
    if element.count()? == 0 {
        return Ok(String::new());
    }
    Ok(element.inner_text()?.trim().to_string())
}

impl Component for EmptyViewComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
