use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Container, Element, Link, Text};
use crate::error::{E2eError, Result};
use crate::locators::BreadcrumbsLocators;
use crate::wait::poll_until;

pub const HOME_LABEL: &str = "Главная";

pub struct BreadcrumbsComponent {
    ctx: PageContext,
    count_of_elements: usize,
    pub items: Text,
    pub container: Container,
    pub home_link: Link,
    pub current_page: Text,
}

impl BreadcrumbsComponent {
    /// `count_of_elements` is the trail length expected on this page
    pub fn new(ctx: &PageContext, count_of_elements: usize) -> Self {
        Self {
            ctx: ctx.clone(),
            count_of_elements,
            items: Text::named(ctx, BreadcrumbsLocators::ITEMS),
            container: Container::named(ctx, BreadcrumbsLocators::CONTAINER),
            home_link: Link::named(ctx, BreadcrumbsLocators::HOME_LINK),
            current_page: Text::named(ctx, BreadcrumbsLocators::CURRENT_PAGE),
        }
    }

    pub fn check_visible(&self, page_name: &str) -> Result<&Self> {
        self.ctx.step(&format!("Checking breadcrumbs of '{}'", page_name), || {
            self.should_be_visible()?
                .should_contain_home_link()?
                .should_have_items_count(self.count_of_elements)?
                .should_contain_current_page(page_name)?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn should_be_visible(&self) -> Result<&Self> {
        self.container.check_visible()?;
        Ok(self)
    }

    /// Wait until the trail has exactly `count` items
    pub fn should_have_items_count(&self, count: usize) -> Result<&Self> {
        let step = format!("Checking that breadcrumbs have {} items", count);
        self.ctx.step(&step, || {
            poll_until(self.ctx.timeouts().default, || format!("{} breadcrumb items", count), || {
                Ok((self.items.count()? == count).then_some(()))
            })
        })?;
        Ok(self)
    }

    pub fn should_contain_home_link(&self) -> Result<&Self> {
        self.home_link.check_visible()?.check_contain_text(HOME_LABEL)?;
        Ok(self)
    }

    pub fn should_contain_current_page(&self, page_name: &str) -> Result<&Self> {
        self.current_page.check_visible()?.check_contain_text(page_name)?;
        Ok(self)
    }

    /// The last crumb is plain text, not a link
    pub fn should_current_page_not_be_clickable(&self) -> Result<&Self> {
        self.ctx.step("Checking that the current page crumb is not a link", || {
            let snapshot = self.current_page.snapshot()?;
            if snapshot.tag == "a" || snapshot.attribute("href").is_some() {
                return Err(E2eError::AssertionFailed(format!(
                    "Current page crumb '{}' is clickable",
                    snapshot.text.trim()
                )));
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Trimmed text of every crumb, in order
    pub fn get_items_text(&self) -> Result<Vec<String>> {
        (0..self.items.count()?)
            .map(|i| Ok(self.items.clone().nth(i).inner_text()?.trim().to_string()))
            .collect()
    }
}

impl Component for BreadcrumbsComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
