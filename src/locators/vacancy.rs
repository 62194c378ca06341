use super::UiLocator;

/// Vacancy detail page
pub struct VacancyItemLocators;

impl VacancyItemLocators {
    pub const CONTAINER: UiLocator = UiLocator::new(
        "//article[contains(@class, 'vacancy')]",
        "Контейнер детальной страницы вакансии",
    );
    pub const VACANCY_NAME: UiLocator =
        UiLocator::new("//h1[contains(@class, 'vacancy__title')]", "Название вакансии");
    pub const PUBLICATION_DATE: UiLocator =
        UiLocator::new("//div[contains(@class, 'header')]//time", "Дата публикации вакансии");
    pub const TAGS_CONTAINER: UiLocator =
        UiLocator::new("//div[contains(@class, 'vacancy__tags')]", "Контейнер тегов вакансии");
    pub const REQUIREMENTS_TITLE: UiLocator = UiLocator::new(
        "//h2[text()='Ожидаем от кандидата']",
        "Заголовок секции 'Ожидаем от кандидата'",
    );
    pub const REQUIREMENTS_ITEMS: UiLocator = UiLocator::new(
        "//div[contains(@class, 'post')]//h2[text()='Ожидаем от кандидата']/following-sibling::ul[1]/li",
        "Элементы списка требований",
    );
    pub const PLUS_TITLE: UiLocator =
        UiLocator::new("//h2[text()='Будет плюсом']", "Заголовок секции 'Будет плюсом'");
    pub const PLUS_ITEMS: UiLocator = UiLocator::new(
        "//div[contains(@class, 'post')]//h2[text()='Будет плюсом']/following-sibling::ul[1]/li",
        "Элементы списка плюсов",
    );
    pub const RESPONSE_BUTTON: UiLocator = UiLocator::new(
        "//div[contains(@class, 'vacancy__actions')]//button[.//span[text()='Откликнуться на вакансию']]",
        "Кнопка 'Откликнуться на вакансию'",
    );
}
