use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Container, Element, Icon, Link, Text};
use crate::error::{E2eError, Result};
use crate::locators::VacanciesListLocators;
use crate::verify::{self, SortOrder};
use crate::wait::poll_until;

/// Data of one vacancy card
#[derive(Clone)]
pub struct Vacancy {
    pub title: String,
    /// `datetime` attribute of the card date, or its text
    pub date: String,
    pub link: Option<String>,
    /// Handle on the card itself
    pub element: Container,
}

pub struct VacanciesListComponent {
    ctx: PageContext,
    pub container: Container,
    pub card_title: Text,
    pub card_date: Text,
    pub card_link: Link,
    pub card_icon: Icon,
}

impl VacanciesListComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            container: Container::named(ctx, VacanciesListLocators::CONTAINER),
            card_title: Text::named(ctx, VacanciesListLocators::CARD_TITLE),
            card_date: Text::named(ctx, VacanciesListLocators::CARD_DATE),
            card_link: Link::named(ctx, VacanciesListLocators::CARD_LINK),
            card_icon: Icon::named(ctx, VacanciesListLocators::CARD_ICON),
        }
    }

    /// Handle matching every vacancy card; narrow it with `nth`
    pub fn vacancy_cards(&self) -> Container {
        Container::named(&self.ctx, VacanciesListLocators::VACANCY_CARDS)
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.container.check_visible()?;
        Ok(self)
    }

    /// Wait until at least `min_count` cards are rendered
    pub fn should_have_vacancies(&self, min_count: usize) -> Result<&Self> {
        let step = format!("Checking that at least {} vacancies are shown", min_count);
        self.ctx.step(&step, || {
            let cards = self.vacancy_cards();
            poll_until(self.ctx.timeouts().count, || format!("at least {} vacancy cards", min_count), || {
                Ok((cards.count()? >= min_count).then_some(()))
            })
        })?;
        Ok(self)
    }

    pub fn get_vacancies_count(&self) -> Result<usize> {
        self.vacancy_cards().count()
    }

    pub fn get_vacancy_by_index(&self, index: usize) -> Container {
        self.vacancy_cards().nth(index)
    }

    /// First card whose text contains `title`
    pub fn get_vacancy_by_title(&self, title: &str) -> Result<Option<Container>> {
        for index in 0..self.get_vacancies_count()? {
            let card = self.get_vacancy_by_index(index);
            if card.inner_text()?.contains(title) {
                return Ok(Some(card));
            }
        }
        Ok(None)
    }

    pub fn get_vacancy_data(&self, index: usize) -> Result<Vacancy> {
        let title = self.card_title.clone().nth(index).inner_text()?.trim().to_string();

        let date_element = self.card_date.clone().nth(index);
        let date = match date_element.attribute("datetime")? {
            Some(datetime) if !datetime.is_empty() => datetime,
            _ => date_element.inner_text()?.trim().to_string(),
        };

        let link = self.card_link.clone().nth(index).attribute("href")?;
        Ok(Vacancy { title, date, link, element: self.get_vacancy_by_index(index) })
    }

    pub fn get_all_vacancies_data(&self) -> Result<Vec<Vacancy>> {
        (0..self.get_vacancies_count()?).map(|i| self.get_vacancy_data(i)).collect()
    }

    pub fn get_vacancies_titles(&self) -> Result<Vec<String>> {
        (0..self.get_vacancies_count()?)
            .map(|i| Ok(self.card_title.clone().nth(i).inner_text()?.trim().to_string()))
            .collect()
    }

    /// Hovering a card must change both its background and text colour
    pub fn check_hover_on_vacancy(&self, index: usize) -> Result<()> {
        self.ctx.step("Checking that hovering a vacancy card changes its colours", || {
            let card = self.get_vacancy_by_index(index);
            let target = card.locator()?;
            let driver = self.ctx.driver();

            let bg_before = driver.computed_style(&target, "background-color")?;
            let color_before = driver.computed_style(&target, "color")?;
            driver.hover(&target)?;
            driver.pause(self.ctx.timeouts().hover);
            let bg_after = driver.computed_style(&target, "background-color")?;
            let color_after = driver.computed_style(&target, "color")?;

            if bg_before == bg_after {
                return Err(E2eError::AssertionFailed(format!(
                    "Vacancy card background did not change. {} == {}",
                    bg_before, bg_after
                )));
            }
            if color_before == color_after {
                return Err(E2eError::AssertionFailed(format!(
                    "Vacancy card text colour did not change. {} == {}",
                    color_before, color_after
                )));
            }
            Ok(())
        })
    }

    pub fn check_vacancies_sorted_by_date(&self, order: SortOrder) -> Result<()> {
        self.ctx.step(&format!("Checking that vacancies are sorted by publication date: {}", order), || {
            self.container.check_visible()?;
            let vacancies = self.get_all_vacancies_data()?;
            let entries: Vec<(&str, &str)> = vacancies.iter().map(|v| (v.title.as_str(), v.date.as_str())).collect();
            verify::check_sorted_by_date(&entries, order)
        })
    }
}

impl Component for VacanciesListComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
