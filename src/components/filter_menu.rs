use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Button, Checkbox, Container, Element};
use crate::error::{E2eError, Result};
use crate::locators::VacancyFiltersMenuLocators;
use crate::wait::poll_until;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

pub const EXPERIENCE_GROUP: &str = "Опыт работы";
pub const EMPLOYMENT_GROUP: &str = "Занятость";
pub const SCHEDULE_GROUP: &str = "График работы";

pub const EMPLOYMENT_LABELS: [&str; 2] = ["Полная", "Частичная"];
pub const EXPERIENCE_LABELS: [&str; 4] = ["Нет опыта", "От 1 года до 3 лет", "От 3 до 6 лет", "Более 6 лет"];
pub const SCHEDULE_LABELS: [&str; 3] = ["Полный день", "Удаленная работа", "Гибкий график"];

/// Drop-down filter menu with three checkbox groups.
///
/// Checkbox handles are built once per group, on first use, and reused for
/// the lifetime of the component. Reopening the menu does not rebuild them.
pub struct FilterMenuComponent {
    ctx: PageContext,
    pub container: Container,
    pub reset_btn: Button,
    pub apply_btn: Button,
    checkboxes_cache: RefCell<HashMap<String, Arc<Vec<Checkbox>>>>,
    by_label: RefCell<Option<Arc<IndexMap<String, Checkbox>>>>,
}

impl FilterMenuComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            container: Container::named(ctx, VacancyFiltersMenuLocators::CONTAINER),
            reset_btn: Button::named(ctx, VacancyFiltersMenuLocators::RESET_BUTTON),
            apply_btn: Button::named(ctx, VacancyFiltersMenuLocators::APPLY_BUTTON),
            checkboxes_cache: RefCell::new(HashMap::new()),
            by_label: RefCell::new(None),
        }
    }

    pub fn experience_checkboxes(&self) -> Result<Arc<Vec<Checkbox>>> {
        self.checkboxes_by_group(EXPERIENCE_GROUP)
    }

    pub fn employment_checkboxes(&self) -> Result<Arc<Vec<Checkbox>>> {
        self.checkboxes_by_group(EMPLOYMENT_GROUP)
    }

    pub fn schedule_checkboxes(&self) -> Result<Arc<Vec<Checkbox>>> {
        self.checkboxes_by_group(SCHEDULE_GROUP)
    }

    /// Checkboxes of the group titled `group_title`, built on first request
    pub fn checkboxes_by_group(&self, group_title: &str) -> Result<Arc<Vec<Checkbox>>> {
        if let Some(cached) = self.checkboxes_cache.borrow().get(group_title) {
            return Ok(Arc::clone(cached));
        }

        let group = Container::named(&self.ctx, VacancyFiltersMenuLocators::CHECKBOX_GROUP_BY_TITLE)
            .with("group_title", group_title);
        let target = group.locator()?;
        let labels = self
            .ctx
            .driver()
            .texts_within(&target, &VacancyFiltersMenuLocators::CHECKBOX_ITEMS.selector)?;

        let checkboxes: Vec<Checkbox> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                Checkbox::named(&self.ctx, VacancyFiltersMenuLocators::CHECKBOX_ITEM)
                    .with("group_title", group_title)
                    .with("index", i + 1)
                    .with("label", label.trim())
            })
            .collect();
        log::debug!("Group '{}' has {} checkboxes", group_title, checkboxes.len());

        let checkboxes = Arc::new(checkboxes);
        self.checkboxes_cache
            .borrow_mut()
            .insert(group_title.to_string(), Arc::clone(&checkboxes));
        Ok(checkboxes)
    }

    /// Employment, experience and schedule checkboxes, in that order
    pub fn all_checkboxes(&self) -> Result<Vec<Checkbox>> {
        let mut all = Vec::new();
        all.extend(self.employment_checkboxes()?.iter().cloned());
        all.extend(self.experience_checkboxes()?.iter().cloned());
        all.extend(self.schedule_checkboxes()?.iter().cloned());
        Ok(all)
    }

    /// Every checkbox keyed by its label, built once
    pub fn all_checkboxes_by_label(&self) -> Result<Arc<IndexMap<String, Checkbox>>> {
        if let Some(cached) = self.by_label.borrow().as_ref() {
            return Ok(Arc::clone(cached));
        }

        let mut map = IndexMap::new();
        for checkbox in self.all_checkboxes()? {
            map.insert(checkbox.label_text()?, checkbox);
        }

        let map = Arc::new(map);
        *self.by_label.borrow_mut() = Some(Arc::clone(&map));
        Ok(map)
    }

    pub fn get_checkbox_by_label(&self, label: &str) -> Result<Checkbox> {
        let by_label = self.all_checkboxes_by_label()?;
        by_label.get(label).cloned().ok_or_else(|| E2eError::UnknownCheckbox {
            label: label.to_string(),
            available: by_label.keys().cloned().collect(),
        })
    }

    /// Wait for the menu to open, then check every expected checkbox
    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx.step("Checking the filter menu", || {
            let target = self.container.base().target()?;
            let driver = self.ctx.driver();
            poll_until(self.ctx.timeouts().count, || "filter menu to open".to_string(), || {
                Ok(driver.inspect(&target)?.filter(|s| s.visible).map(|_| ()))
            })?;

            self.container.check_visible()?;
            self.check_expected_checkboxes()
        })?;
        Ok(self)
    }

    pub fn check_not_visible(&self) -> Result<&Self> {
        log::info!("Checking that the filter menu is not shown");
        self.container.check_hidden()?;
        Ok(self)
    }

    /// Checkboxes show the known labels, group by group
    pub fn check_expected_checkboxes(&self) -> Result<()> {
        self.ctx.step("Checking the filter menu checkboxes", || {
            let checkboxes = self.all_checkboxes()?;
            let labels: Vec<&str> =
                EMPLOYMENT_LABELS.iter().chain(&EXPERIENCE_LABELS).chain(&SCHEDULE_LABELS).copied().collect();

            if checkboxes.len() < labels.len() {
                return Err(E2eError::AssertionFailed(format!(
                    "Filter menu has {} checkboxes, expected {}: {}",
                    checkboxes.len(),
                    labels.len(),
                    labels.join(", ")
                )));
            }

            for (checkbox, label) in checkboxes.iter().zip(labels) {
                checkbox.check_visible()?.check_contain_text(label)?;
            }
            Ok(())
        })
    }

    pub fn select_filters(&self, filters: &[&str]) -> Result<&Self> {
        self.ctx.step(&format!("Selecting filters {:?}", filters), || {
            for label in filters {
                self.get_checkbox_by_label(label)?.check()?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    pub fn are_filters_selected(&self, filters: &[&str]) -> Result<&Self> {
        self.ctx.step(&format!("Checking that filters are selected: {:?}", filters), || {
            for label in filters {
                self.get_checkbox_by_label(label)?.is_checked()?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// No checkbox of the menu is selected
    pub fn check_filter_reset(&self) -> Result<&Self> {
        self.ctx.step("Checking that 'Reset' clears every filter", || {
            for checkbox in self.all_checkboxes_by_label()?.values() {
                checkbox.is_not_checked()?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    pub fn reset(&self) -> Result<&Self> {
        self.reset_btn.check_visible()?.click()?;
        Ok(self)
    }

    pub fn apply(&self) -> Result<&Self> {
        self.apply_btn.check_visible()?.click()?;
        Ok(self)
    }
}

impl Component for FilterMenuComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
