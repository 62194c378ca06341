mod common;

use common::{
    context, reset_script, seed_filter_bar, seed_filter_menu, seed_footer, seed_tabs, seed_vacancies,
    set_visible_cards, tab_selector, FakeDriver, PageState,
};
use std::sync::Arc;
use vacancy_e2e::locators::{
    CookiesLocators, FilterVacanciesLocators, FooterLocators, VacanciesListLocators, VacancyFiltersMenuLocators,
};
use vacancy_e2e::pages::{Page, VacanciesPage};
use vacancy_e2e::report::Status;
use vacancy_e2e::{AppRoute, E2eError};

const VACANCIES: [(&str, &str); 5] = [
    ("Аналитик", "10.06.2025"),
    ("Тестировщик", "08.06.2025"),
    ("Разработчик", "05.06.2025"),
    ("Дизайнер", "03.06.2025"),
    ("Менеджер", "01.06.2025"),
];

fn seed_page(state: &mut PageState) {
    seed_filter_bar(state);
    seed_vacancies(state, &VACANCIES);
    seed_footer(state);
}

#[test]
fn test_visit_opens_route_on_base_url() {
    let driver = Arc::new(FakeDriver::new());
    let page = VacanciesPage::new(&context(&driver));

    page.visit(AppRoute::Vacancies).unwrap();
    assert_eq!(driver.state().visited, vec!["https://cism-ms.test/vakansii"]);
}

#[test]
fn test_bot_protection_page_skips_the_test() {
    let driver = Arc::new(FakeDriver::new());
    {
        let mut state = driver.state();
        state.title = "Just a moment...".to_string();
        state.content = "<p>Checking your browser before accessing cism-ms.ru</p>".to_string();
    }
    let ctx = context(&driver);
    let page = VacanciesPage::new(&ctx);

    let err = page.visit(AppRoute::Vacancies).unwrap_err();
    assert!(err.is_skip(), "{:?}", err);

    let names = ctx.reporter().attachment_names();
    assert!(names.contains(&"CAPTCHA screenshot".to_string()));
    assert!(names.contains(&"CAPTCHA HTML".to_string()));

    let result = ctx.reporter().finish("test_captcha", Err(&err), Vec::new());
    assert_eq!(result.status, Status::Skipped);
}

#[test]
fn test_cookie_dialog_is_accepted() {
    let driver = Arc::new(FakeDriver::new().on_click(CookiesLocators::ACCEPT_BUTTON.selector, |state| {
        state.set_visible(&CookiesLocators::CONTAINER.selector, false)
    }));
    {
        let mut state = driver.state();
        state.set_nodes(CookiesLocators::CONTAINER.selector, vec![common::node("Мы используем cookies")]);
        state.set_nodes(CookiesLocators::ACCEPT_BUTTON.selector, vec![common::node("Принять")]);
    }
    let page = VacanciesPage::new(&context(&driver));

    page.visit(AppRoute::Vacancies).unwrap();
    assert_eq!(driver.state().clicks, vec![CookiesLocators::ACCEPT_BUTTON.selector.to_string()]);
}

#[test]
fn test_page_visibility_passes_when_everything_renders() {
    let driver = Arc::new(FakeDriver::new());
    seed_page(&mut driver.state());
    let page = VacanciesPage::new(&context(&driver));

    page.check_visible().unwrap();
}

#[test]
fn test_page_visibility_names_first_missing_element() {
    let driver = Arc::new(FakeDriver::new());
    {
        let mut state = driver.state();
        seed_filter_bar(&mut state);
        seed_vacancies(&mut state, &VACANCIES);
    }
    let ctx = context(&driver);
    let page = VacanciesPage::new(&ctx);

    let err = match page.check_visible() {
        Err(err) => err,
        Ok(_) => panic!("Expected the footer check to fail"),
    };
    match &err {
        E2eError::ElementNotFound(msg) => assert!(msg.contains(&*FooterLocators::INFO.description), "{}", msg),
        other => panic!("Expected ElementNotFound, got {:?}", other),
    }
    assert!(ctx
        .reporter()
        .attachment_names()
        .contains(&format!("element_not_found_{}", FooterLocators::INFO.description)));

    let result = ctx.reporter().finish("test_visibility", Err(&err), Vec::new());
    assert_eq!(result.status, Status::Failed);
    assert_eq!(result.find_step("Checking the filter bar").unwrap().status, Status::Passed);
    assert_eq!(result.find_step("Checking every footer element").unwrap().status, Status::Failed);
}

#[test]
fn test_filter_on_vacancies_page_is_a_subset() {
    let driver = Arc::new(FakeDriver::new().on_click(VacancyFiltersMenuLocators::APPLY_BUTTON.selector, |state| {
        state.set_visible(&VacancyFiltersMenuLocators::CONTAINER.selector, false);
        set_visible_cards(state, 2);
    }));
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_filter_menu(&mut state);
    }
    let page = VacanciesPage::new(&context(&driver));

    page.apply_specified_filters_and_verify(&["Полная", "Удаленная работа"]).unwrap();
}

#[test]
fn test_filter_that_grows_the_list_fails() {
    let driver = Arc::new(FakeDriver::new().on_click(VacancyFiltersMenuLocators::APPLY_BUTTON.selector, |state| {
        state.set_visible(&VacancyFiltersMenuLocators::CONTAINER.selector, false);
        set_visible_cards(state, 7);
    }));
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_filter_menu(&mut state);
    }
    let page = VacanciesPage::new(&context(&driver));

    match page.apply_specified_filters_and_verify(&["Частичная"]) {
        Err(E2eError::AssertionFailed(msg)) => {
            assert!(msg.contains("has 7 elements"), "{}", msg);
            assert!(msg.contains("maximum of 5"), "{}", msg);
        }
        other => panic!("Expected AssertionFailed, got {:?}", other),
    }
}

#[test]
fn test_reset_flow_with_menu_kept_open() {
    let driver = Arc::new(FakeDriver::new().on_click(VacancyFiltersMenuLocators::RESET_BUTTON.selector, reset_script()));
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_filter_menu(&mut state);
    }
    let page = VacanciesPage::new(&context(&driver));

    page.verify_filter_reset_functionality(&["Полная", "Нет опыта"]).unwrap();

    let filter_clicks =
        driver.state().clicks.iter().filter(|s| **s == FilterVacanciesLocators::FILTER_BTN.selector).count();
    assert_eq!(filter_clicks, 1);
}

#[test]
fn test_reset_flow_reopens_closed_menu() {
    let reset = reset_script();
    let driver = Arc::new(
        FakeDriver::new()
            .on_click(VacancyFiltersMenuLocators::RESET_BUTTON.selector, move |state| {
                reset(&mut *state);
                state.set_visible(&VacancyFiltersMenuLocators::CONTAINER.selector, false);
            })
            .on_click(FilterVacanciesLocators::FILTER_BTN.selector, |state| {
                state.set_visible(&VacancyFiltersMenuLocators::CONTAINER.selector, true)
            }),
    );
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_filter_menu(&mut state);
    }
    let page = VacanciesPage::new(&context(&driver));

    page.verify_filter_reset_functionality(&["Гибкий график"]).unwrap();

    let filter_clicks =
        driver.state().clicks.iter().filter(|s| **s == FilterVacanciesLocators::FILTER_BTN.selector).count();
    assert_eq!(filter_clicks, 2);
}

fn activate_tab(index: usize, titles: &'static [&'static str], cards: usize) -> impl Fn(&mut PageState) + Send + Sync {
    move |state: &mut PageState| {
        for (i, title) in titles.iter().enumerate() {
            let class = if i + 1 == index { "q-tab q-tab--active" } else { "q-tab" };
            if let Some(node) = state.node_mut(&tab_selector(i + 1, title), 0) {
                node.attributes.insert("class".to_string(), class.to_string());
            }
        }
        set_visible_cards(state, cards);
    }
}

const TABS: [&str; 3] = ["Все", "Разработка", "Аналитика"];

#[test]
fn test_every_category_tab_filters_the_list() {
    let driver = Arc::new(
        FakeDriver::new()
            .on_click(tab_selector(1, TABS[0]), activate_tab(1, &TABS, 5))
            .on_click(tab_selector(2, TABS[1]), activate_tab(2, &TABS, 3))
            .on_click(tab_selector(3, TABS[2]), activate_tab(3, &TABS, 2)),
    );
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_tabs(&mut state, &TABS);
    }
    let page = VacanciesPage::new(&context(&driver));

    page.verify_filtering_by_all_category_tabs().unwrap();
    assert_eq!(driver.state().clicks.len(), 3);
}

#[test]
fn test_tab_that_stays_inactive_fails() {
    let driver = Arc::new(
        FakeDriver::new()
            .on_click(tab_selector(1, TABS[0]), activate_tab(1, &TABS, 5))
            .on_click(tab_selector(3, TABS[2]), activate_tab(3, &TABS, 2)),
    );
    {
        let mut state = driver.state();
        seed_page(&mut state);
        seed_tabs(&mut state, &TABS);
    }
    let page = VacanciesPage::new(&context(&driver));

    match page.verify_filtering_by_all_category_tabs() {
        Err(E2eError::AssertionFailed(msg)) => assert!(msg.contains("Вкладка Разработка"), "{}", msg),
        other => panic!("Expected AssertionFailed, got {:?}", other),
    }
}

#[test]
fn test_no_tabs_is_an_error() {
    let driver = Arc::new(FakeDriver::new());
    seed_page(&mut driver.state());
    let page = VacanciesPage::new(&context(&driver));

    assert!(matches!(page.verify_filtering_by_all_category_tabs(), Err(E2eError::AssertionFailed(_))));
}

#[test]
fn test_count_check_on_container() {
    let driver = Arc::new(FakeDriver::new());
    seed_vacancies(&mut driver.state(), &VACANCIES);
    let page = VacanciesPage::new(&context(&driver));
    let cards = &VacanciesListLocators::VACANCY_CARDS.selector;

    page.vacancies_list.container.check_less_or_equal_count_elements(cards, 5).unwrap();
    page.vacancies_list.container.check_less_or_equal_count_elements(cards, 6).unwrap();
    assert!(page.vacancies_list.container.check_less_or_equal_count_elements(cards, 4).is_err());
}
