//! In-memory driver for component and page tests.
//!
//! Nodes are keyed by their rendered selector; descendant queries are keyed by
//! `(scope selector, inner selector)`. Click and hover scripts mutate the page
//! state the way the real site would.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use vacancy_e2e::browser::{Download, Driver, NodeSnapshot, Target, WaitUntil};
use vacancy_e2e::components::filter_menu::{
    EMPLOYMENT_GROUP, EMPLOYMENT_LABELS, EXPERIENCE_GROUP, EXPERIENCE_LABELS, SCHEDULE_GROUP, SCHEDULE_LABELS,
};
use vacancy_e2e::locators::{
    FilterVacanciesLocators, FooterLocators, VacanciesListLocators, VacancyFiltersMenuLocators,
};
use vacancy_e2e::{E2eError, PageContext, Params, Result, Timeouts, UiLocator};

pub type Script = Box<dyn Fn(&mut PageState) + Send + Sync>;

pub const BASE_URL: &str = "https://cism-ms.test/";

#[derive(Default)]
pub struct PageState {
    pub url: String,
    pub title: String,
    pub content: String,
    nodes: HashMap<String, Vec<NodeSnapshot>>,
    children: HashMap<(String, String), Vec<String>>,
    styles: HashMap<(String, String), String>,
    downloads: HashMap<String, Download>,
    pub clicks: Vec<String>,
    pub visited: Vec<String>,
    pub texts_within_calls: usize,
}

impl PageState {
    pub fn set_nodes(&mut self, selector: impl Into<String>, nodes: Vec<NodeSnapshot>) {
        self.nodes.insert(selector.into(), nodes);
    }

    pub fn set_children(&mut self, scope: impl Into<String>, inner: impl Into<String>, texts: Vec<String>) {
        self.children.insert((scope.into(), inner.into()), texts);
    }

    pub fn set_style(&mut self, selector: impl Into<String>, property: &str, value: &str) {
        self.styles.insert((selector.into(), property.to_string()), value.to_string());
    }

    pub fn set_download(&mut self, selector: impl Into<String>, download: Download) {
        self.downloads.insert(selector.into(), download);
    }

    pub fn node(&self, selector: &str, nth: usize) -> Option<&NodeSnapshot> {
        self.nodes.get(selector).and_then(|nodes| nodes.get(nth))
    }

    pub fn node_mut(&mut self, selector: &str, nth: usize) -> Option<&mut NodeSnapshot> {
        self.nodes.get_mut(selector).and_then(|nodes| nodes.get_mut(nth))
    }

    pub fn set_visible(&mut self, selector: &str, visible: bool) {
        if let Some(node) = self.node_mut(selector, 0) {
            node.visible = visible;
        }
    }

    fn existing(&mut self, target: &Target) -> Result<&mut NodeSnapshot> {
        self.node_mut(&target.selector, target.nth)
            .ok_or_else(|| E2eError::ElementNotFound(format!("no node for {}", target)))
    }
}

pub struct FakeDriver {
    state: Mutex<PageState>,
    on_click: HashMap<String, Script>,
    on_hover: HashMap<String, Script>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self { state: Mutex::new(PageState::default()), on_click: HashMap::new(), on_hover: HashMap::new() }
    }

    /// Run `script` after every click on `selector`
    pub fn on_click(mut self, selector: impl Into<String>, script: impl Fn(&mut PageState) + Send + Sync + 'static) -> Self {
        self.on_click.insert(selector.into(), Box::new(script));
        self
    }

    pub fn on_hover(mut self, selector: impl Into<String>, script: impl Fn(&mut PageState) + Send + Sync + 'static) -> Self {
        self.on_hover.insert(selector.into(), Box::new(script));
        self
    }

    pub fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap()
    }
}

impl Driver for FakeDriver {
    fn goto(&self, url: &str, _wait: WaitUntil, _timeout: Duration) -> Result<()> {
        let mut state = self.state();
        state.url = url.to_string();
        state.visited.push(url.to_string());
        Ok(())
    }

    fn reload(&self, _wait: WaitUntil, _timeout: Duration) -> Result<()> {
        Ok(())
    }

    fn url(&self) -> Result<String> {
        Ok(self.state().url.clone())
    }

    fn title(&self) -> Result<String> {
        Ok(self.state().title.clone())
    }

    fn content(&self) -> Result<String> {
        Ok(self.state().content.clone())
    }

    fn screenshot(&self, _full_page: bool) -> Result<Vec<u8>> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }

    fn count(&self, target: &Target) -> Result<usize> {
        Ok(self.state().nodes.get(&target.selector).map_or(0, Vec::len))
    }

    fn inspect(&self, target: &Target) -> Result<Option<NodeSnapshot>> {
        Ok(self.state().node(&target.selector, target.nth).cloned())
    }

    fn count_within(&self, scope: &Target, inner: &str) -> Result<usize> {
        let state = self.state();
        Ok(state.children.get(&(scope.selector.clone(), inner.to_string())).map_or(0, Vec::len))
    }

    fn texts_within(&self, scope: &Target, inner: &str) -> Result<Vec<String>> {
        let mut state = self.state();
        state.texts_within_calls += 1;
        Ok(state.children.get(&(scope.selector.clone(), inner.to_string())).cloned().unwrap_or_default())
    }

    fn computed_style(&self, target: &Target, property: &str) -> Result<String> {
        let state = self.state();
        Ok(state.styles.get(&(target.selector.clone(), property.to_string())).cloned().unwrap_or_default())
    }

    fn click(&self, target: &Target) -> Result<()> {
        let mut state = self.state();
        state.existing(target)?;
        state.clicks.push(target.selector.clone());
        if let Some(script) = self.on_click.get(&target.selector) {
            script(&mut *state);
        }
        Ok(())
    }

    fn fill(&self, target: &Target, value: &str) -> Result<()> {
        self.state().existing(target)?.value = Some(value.to_string());
        Ok(())
    }

    fn clear(&self, target: &Target) -> Result<()> {
        self.state().existing(target)?.value = Some(String::new());
        Ok(())
    }

    fn type_text(&self, target: &Target, text: &str, _delay: Duration) -> Result<()> {
        let mut state = self.state();
        let node = state.existing(target)?;
        node.value.get_or_insert_with(String::new).push_str(text);
        Ok(())
    }

    fn set_checked(&self, target: &Target, checked: bool) -> Result<()> {
        self.state().existing(target)?.checked = Some(checked);
        Ok(())
    }

    fn hover(&self, target: &Target) -> Result<()> {
        let mut state = self.state();
        state.existing(target)?;
        if let Some(script) = self.on_hover.get(&target.selector) {
            script(&mut *state);
        }
        Ok(())
    }

    fn focus(&self, target: &Target) -> Result<()> {
        self.state().existing(target)?;
        Ok(())
    }

    fn download(&self, target: &Target) -> Result<Download> {
        let state = self.state();
        state
            .downloads
            .get(&target.selector)
            .cloned()
            .ok_or_else(|| E2eError::ElementNotFound(format!("no download behind {}", target)))
    }

    fn pause(&self, _duration: Duration) {}
}

/// Context over the fake driver with short waits
pub fn context(driver: &Arc<FakeDriver>) -> PageContext {
    vacancy_e2e::logging::init_for_tests();
    PageContext::new(driver.clone())
        .with_timeouts(Timeouts::uniform(Duration::from_millis(200)))
        .with_base_url(BASE_URL)
}

pub fn node(text: &str) -> NodeSnapshot {
    NodeSnapshot { tag: "div".to_string(), text: text.to_string(), visible: true, enabled: true, ..Default::default() }
}

pub fn with_attr(mut node: NodeSnapshot, name: &str, value: &str) -> NodeSnapshot {
    node.attributes.insert(name.to_string(), value.to_string());
    node
}

pub fn checkbox(label: &str) -> NodeSnapshot {
    let mut node = with_attr(node(label), "aria-label", label);
    node.checked = Some(false);
    node
}

pub fn render(locator: &UiLocator, params: &Params) -> String {
    locator.format(params).unwrap().selector.into_owned()
}

/// Checkbox groups in the order the menu lists them
pub fn groups() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (EMPLOYMENT_GROUP, EMPLOYMENT_LABELS.to_vec()),
        (EXPERIENCE_GROUP, EXPERIENCE_LABELS.to_vec()),
        (SCHEDULE_GROUP, SCHEDULE_LABELS.to_vec()),
    ]
}

pub fn checkbox_selector(group: &str, index: usize, label: &str) -> String {
    render(
        &VacancyFiltersMenuLocators::CHECKBOX_ITEM,
        &Params::new().with("group_title", group).with("index", index).with("label", label),
    )
}

pub fn all_checkbox_selectors() -> Vec<String> {
    groups()
        .into_iter()
        .flat_map(|(group, labels)| {
            labels
                .into_iter()
                .enumerate()
                .map(move |(i, label)| checkbox_selector(group, i + 1, label))
        })
        .collect()
}

/// Open filter menu with every group unchecked
pub fn seed_filter_menu(state: &mut PageState) {
    state.set_nodes(VacancyFiltersMenuLocators::CONTAINER.selector, vec![node("")]);
    state.set_nodes(VacancyFiltersMenuLocators::RESET_BUTTON.selector, vec![node("Сбросить")]);
    state.set_nodes(VacancyFiltersMenuLocators::APPLY_BUTTON.selector, vec![node("Применить")]);

    for (group, labels) in groups() {
        let group_selector =
            render(&VacancyFiltersMenuLocators::CHECKBOX_GROUP_BY_TITLE, &Params::new().with("group_title", group));
        state.set_nodes(group_selector.clone(), vec![node(&labels.join("\n"))]);
        state.set_children(
            group_selector,
            VacancyFiltersMenuLocators::CHECKBOX_ITEMS.selector,
            labels.iter().map(|label| format!(" {} ", label)).collect(),
        );
        for (i, label) in labels.iter().enumerate() {
            state.set_nodes(checkbox_selector(group, i + 1, label), vec![checkbox(label)]);
        }
    }
}

/// "Reset" unchecks every checkbox
pub fn reset_script() -> impl Fn(&mut PageState) + Send + Sync + 'static {
    let selectors = all_checkbox_selectors();
    move |state: &mut PageState| {
        for selector in &selectors {
            if let Some(node) = state.node_mut(selector, 0) {
                node.checked = Some(false);
            }
        }
    }
}

pub fn filter_menu_driver() -> Arc<FakeDriver> {
    let driver = Arc::new(FakeDriver::new().on_click(VacancyFiltersMenuLocators::RESET_BUTTON.selector, reset_script()));
    seed_filter_menu(&mut driver.state());
    driver
}

/// Vacancy list with one card per `(title, date)`
pub fn seed_vacancies(state: &mut PageState, vacancies: &[(&str, &str)]) {
    state.set_nodes(VacanciesListLocators::CONTAINER.selector, vec![node("")]);
    state.set_nodes(
        VacanciesListLocators::VACANCY_CARDS.selector,
        vacancies.iter().map(|(title, date)| node(&format!("{}\n{}", title, date))).collect(),
    );
    state.set_nodes(
        VacanciesListLocators::CARD_TITLE.selector,
        vacancies.iter().map(|(title, _)| node(&format!(" {} ", title))).collect(),
    );
    state.set_nodes(
        VacanciesListLocators::CARD_DATE.selector,
        vacancies.iter().map(|(_, date)| node(date)).collect(),
    );
    state.set_nodes(
        VacanciesListLocators::CARD_LINK.selector,
        (0..vacancies.len()).map(|i| with_attr(node(""), "href", &format!("/vakansii/{}", i + 1))).collect(),
    );
    set_visible_cards(state, vacancies.len());
}

/// Number of cards found inside the list container
pub fn set_visible_cards(state: &mut PageState, count: usize) {
    state.set_children(
        VacanciesListLocators::CONTAINER.selector,
        VacanciesListLocators::VACANCY_CARDS.selector,
        (0..count).map(|i| format!("card {}", i + 1)).collect(),
    );
}

pub fn seed_filter_bar(state: &mut PageState) {
    state.set_nodes(FilterVacanciesLocators::FILTER_CONTAINER.selector, vec![node("")]);
    state.set_nodes(FilterVacanciesLocators::SORT.selector, vec![node("")]);
    state.set_nodes(FilterVacanciesLocators::FILTER_BTN.selector, vec![node("Фильтр")]);
}

pub fn tab_selector(index: usize, title: &str) -> String {
    render(&FilterVacanciesLocators::TAB, &Params::new().with("index", index).with("title", title))
}

/// Category tabs; the first one is active
pub fn seed_tabs(state: &mut PageState, titles: &[&str]) {
    state.set_nodes(FilterVacanciesLocators::ALL_TABS.selector, titles.iter().map(|title| node(title)).collect());
    for (i, title) in titles.iter().enumerate() {
        let class = if i == 0 { "q-tab q-tab--active" } else { "q-tab" };
        state.set_nodes(tab_selector(i + 1, title), vec![with_attr(node(title), "class", class)]);
    }
}

pub fn seed_footer(state: &mut PageState) {
    state.set_nodes(FooterLocators::INFO.selector, vec![node("© 2018 - 2025 ЦИСМ\nИНН: 9709037529")]);
    state.set_nodes(FooterLocators::PRIVACY_POLICY_LINK.selector, vec![node("Политика конфиденциальности")]);
    state.set_nodes(FooterLocators::USER_AGREEMENT_LINK.selector, vec![node("Пользовательское соглашение")]);
    state.set_nodes(FooterLocators::MAIN_PAGE_LINK.selector, vec![node("Главная")]);
    state.set_nodes(FooterLocators::ICON.selector, vec![node("")]);
}
