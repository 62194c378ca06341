use crate::components::{BreadcrumbsComponent, FooterComponent, NavbarComponent, VacancyResponseFormComponent};
use crate::context::PageContext;
use crate::elements::{Button, Container, Element, Text};
use crate::error::Result;
use crate::locators::VacancyItemLocators;
use crate::pages::base::{BasePage, Page};

/// Detail page of a single vacancy with the response form
pub struct VacancyDetailPage {
    base: BasePage,
    pub navbar: NavbarComponent,
    pub breadcrumbs: BreadcrumbsComponent,
    pub footer: FooterComponent,
    pub container: Container,
    pub vacancy_name: Text,
    pub publication_date: Text,
    pub requirements_heading: Text,
    pub expectations_heading: Text,
    pub response_button: Button,
    pub vacancy_response_form: VacancyResponseFormComponent,
}

impl VacancyDetailPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            base: BasePage::new(ctx),
            navbar: NavbarComponent::new(ctx),
            breadcrumbs: BreadcrumbsComponent::new(ctx, 3),
            footer: FooterComponent::new(ctx),
            container: Container::named(ctx, VacancyItemLocators::CONTAINER),
            vacancy_name: Text::named(ctx, VacancyItemLocators::VACANCY_NAME),
            publication_date: Text::named(ctx, VacancyItemLocators::PUBLICATION_DATE),
            requirements_heading: Text::named(ctx, VacancyItemLocators::REQUIREMENTS_TITLE),
            expectations_heading: Text::named(ctx, VacancyItemLocators::PLUS_TITLE),
            response_button: Button::named(ctx, VacancyItemLocators::RESPONSE_BUTTON),
            vacancy_response_form: VacancyResponseFormComponent::new(ctx),
        }
    }

    /// Items of the "what we expect" list
    pub fn requirements(&self) -> Result<Vec<String>> {
        list_items(&Text::named(self.base.ctx(), VacancyItemLocators::REQUIREMENTS_ITEMS))
    }

    /// Items of the "nice to have" list
    pub fn expectations(&self) -> Result<Vec<String>> {
        list_items(&Text::named(self.base.ctx(), VacancyItemLocators::PLUS_ITEMS))
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.base.ctx().step("Checking the vacancy page", || {
            let page_name = self.vacancy_name.inner_text()?.trim().to_string();
            self.navbar.check_visible()?;
            self.breadcrumbs.check_visible(&page_name)?;
            self.footer.check_visible()?;
            self.container.check_visible()?;
            self.vacancy_response_form.check_visible()?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn check_vacancy_title(&self, title: &str) -> Result<&Self> {
        self.base.ctx().step("Checking the vacancy title", || self.vacancy_name.check_contain_text(title).map(|_| ()))?;
        Ok(self)
    }
}

fn list_items(items: &Text) -> Result<Vec<String>> {
    (0..items.count()?).map(|i| Ok(items.clone().nth(i).inner_text()?.trim().to_string())).collect()
}

impl Page for VacancyDetailPage {
    fn base(&self) -> &BasePage {
        &self.base
    }
}
