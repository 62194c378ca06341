use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Button, Container, Element, Tab, Text};
use crate::error::{E2eError, Result};
use crate::locators::FilterVacanciesLocators;

/// Category tabs, sort button and filter menu button above the vacancy list
pub struct FilterBarComponent {
    ctx: PageContext,
    pub container: Container,
    pub sort_btn: Button,
    pub filter_menu: Button,
}

impl FilterBarComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            container: Container::named(ctx, FilterVacanciesLocators::FILTER_CONTAINER),
            sort_btn: Button::new(ctx, FilterVacanciesLocators::SORT, "Кнопка сортировки"),
            filter_menu: Button::new(ctx, FilterVacanciesLocators::FILTER_BTN, "Кнопка Фильтр"),
        }
    }

    /// Tabs currently rendered, queried afresh on every call
    pub fn tabs(&self) -> Result<Vec<Tab>> {
        let all_tabs = Text::named(&self.ctx, FilterVacanciesLocators::ALL_TABS);
        (0..all_tabs.count()?)
            .map(|i| {
                let title = all_tabs.clone().nth(i).inner_text()?.trim().to_string();
                Ok(Tab::named(&self.ctx, FilterVacanciesLocators::TAB).with("index", i + 1).with("title", title))
            })
            .collect()
    }

    /// First tab whose title contains `title`
    pub fn tab_by_title(&self, title: &str) -> Result<Tab> {
        let tabs = self.tabs()?;
        let available: Vec<String> = tabs.iter().map(|t| t.name().to_string()).collect();
        tabs.into_iter().find(|tab| tab.name().contains(title)).ok_or_else(|| {
            E2eError::ElementNotFound(format!("No tab titled '{}' among: {}", title, available.join(", ")))
        })
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx.step("Checking the filter bar", || {
            self.container.check_visible()?;
            self.sort_btn.check_visible()?;
            self.filter_menu.check_visible()?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn open_filter_menu(&self) -> Result<()> {
        self.filter_menu.check_visible()?.click()
    }

    pub fn toggle_sort(&self) -> Result<()> {
        self.sort_btn.check_visible()?.click()
    }
}

impl Component for FilterBarComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
