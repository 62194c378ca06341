mod common;

use common::{context, seed_vacancies, FakeDriver};
use std::sync::Arc;
use vacancy_e2e::components::VacanciesListComponent;
use vacancy_e2e::locators::VacanciesListLocators;
use vacancy_e2e::{E2eError, Element, SortOrder};

fn list_with(vacancies: &[(&str, &str)]) -> (Arc<FakeDriver>, VacanciesListComponent) {
    let driver = Arc::new(FakeDriver::new());
    seed_vacancies(&mut driver.state(), vacancies);
    let list = VacanciesListComponent::new(&context(&driver));
    (driver, list)
}

#[test]
fn test_newest_first_passes_with_ties() {
    let (_driver, list) = list_with(&[
        ("Аналитик", "10.06.2025"),
        ("Тестировщик", "08.06.2025"),
        ("Разработчик", "08.06.2025"),
        ("Дизайнер", "01.06.2025"),
    ]);

    list.check_vacancies_sorted_by_date(SortOrder::Desc).unwrap();
    assert!(list.check_vacancies_sorted_by_date(SortOrder::Asc).is_err());
}

#[test]
fn test_out_of_order_listing_is_numbered_from_one() {
    let (_driver, list) = list_with(&[("Тестировщик", "08.06.2025"), ("Аналитик", "10.06.2025")]);

    match list.check_vacancies_sorted_by_date(SortOrder::Desc) {
        Err(E2eError::AssertionFailed(msg)) => {
            assert!(msg.contains("Current order:"));
            assert!(msg.contains("1) Тестировщик - 08.06.2025"));
            assert!(msg.contains("2) Аналитик - 10.06.2025"));
        }
        other => panic!("Expected AssertionFailed, got {:?}", other),
    }
    list.check_vacancies_sorted_by_date(SortOrder::Asc).unwrap();
}

#[test]
fn test_unparseable_date_does_not_fail_the_check() {
    let (_driver, list) =
        list_with(&[("Аналитик", "10.06.2025"), ("Стажер", "скоро"), ("Дизайнер", "01.06.2025")]);
    list.check_vacancies_sorted_by_date(SortOrder::Desc).unwrap();
}

#[test]
fn test_vacancy_records() {
    let (_driver, list) = list_with(&[("Аналитик", "10.06.2025"), ("Тестировщик", "08.06.2025")]);

    let vacancies = list.get_all_vacancies_data().unwrap();
    assert_eq!(vacancies.len(), 2);
    assert_eq!(vacancies[0].title, "Аналитик");
    assert_eq!(vacancies[1].date, "08.06.2025");
    assert_eq!(vacancies[1].link.as_deref(), Some("/vakansii/2"));
    assert_eq!(vacancies[1].element.base().index(), 1);

    assert_eq!(list.get_vacancies_titles().unwrap(), vec!["Аналитик", "Тестировщик"]);
}

#[test]
fn test_lookup_by_title() {
    let (_driver, list) = list_with(&[("Аналитик", "10.06.2025"), ("Тестировщик", "08.06.2025")]);

    let card = list.get_vacancy_by_title("Тестировщик").unwrap().expect("card should exist");
    assert_eq!(card.base().index(), 1);
    assert!(list.get_vacancy_by_title("Бухгалтер").unwrap().is_none());
}

#[test]
fn test_should_have_vacancies_is_a_lower_bound() {
    let (_driver, list) = list_with(&[("Аналитик", "10.06.2025"), ("Тестировщик", "08.06.2025")]);

    list.should_have_vacancies(1).unwrap();
    list.should_have_vacancies(2).unwrap();
    assert!(matches!(list.should_have_vacancies(3), Err(E2eError::Timeout(_))));
}

#[test]
fn test_hover_changes_card_colours() {
    let cards = VacanciesListLocators::VACANCY_CARDS.selector.to_string();
    let hovered = cards.clone();
    let driver = Arc::new(FakeDriver::new().on_hover(cards.clone(), move |state| {
        state.set_style(hovered.clone(), "background-color", "rgb(0, 84, 166)");
        state.set_style(hovered.clone(), "color", "rgb(255, 255, 255)");
    }));
    {
        let mut state = driver.state();
        seed_vacancies(&mut state, &[("Аналитик", "10.06.2025")]);
        state.set_style(cards.clone(), "background-color", "rgb(255, 255, 255)");
        state.set_style(cards, "color", "rgb(0, 0, 0)");
    }
    let list = VacanciesListComponent::new(&context(&driver));

    list.check_hover_on_vacancy(0).unwrap();
}

#[test]
fn test_hover_without_text_colour_change_fails() {
    let cards = VacanciesListLocators::VACANCY_CARDS.selector.to_string();
    let hovered = cards.clone();
    let driver = Arc::new(FakeDriver::new().on_hover(cards.clone(), move |state| {
        state.set_style(hovered.clone(), "background-color", "rgb(0, 84, 166)");
    }));
    {
        let mut state = driver.state();
        seed_vacancies(&mut state, &[("Аналитик", "10.06.2025")]);
        state.set_style(cards.clone(), "background-color", "rgb(255, 255, 255)");
        state.set_style(cards, "color", "rgb(0, 0, 0)");
    }
    let list = VacanciesListComponent::new(&context(&driver));

    match list.check_hover_on_vacancy(0) {
        Err(E2eError::AssertionFailed(msg)) => assert!(msg.contains("text colour"), "{}", msg),
        other => panic!("Expected AssertionFailed, got {:?}", other),
    }
}
