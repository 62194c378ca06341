use super::UiLocator;

pub struct VacanciesListLocators;

impl VacanciesListLocators {
    pub const CONTAINER: UiLocator =
        UiLocator::new("//article[@class='post']//div[@class='row']", "Блок со списком вакансий");
    pub const VACANCY_CARDS: UiLocator = UiLocator::new(
        "//article[contains(@class, 'vacancy_card')]",
        "Список карточек вакансий",
    );
    pub const CARD_TITLE: UiLocator =
        UiLocator::new("//h3[contains(@class, 'vacancy_card__title')]", "Название вакансии");
    pub const CARD_DATE: UiLocator = UiLocator::new("//time", "Дата публикации");
    pub const CARD_LINK: UiLocator =
        UiLocator::new("//a[contains(@class, 'vacancy_card__link')]", "Ссылка на вакансию");
    pub const CARD_ICON: UiLocator = UiLocator::new(
        "//i[contains(@class, 'vacancy_card__icon')]",
        "Иконка ссылки на вакансию",
    );
    pub const EMPTY_VIEW_CONTAINER: UiLocator = UiLocator::new(
        "//div[contains(@class, 'not_found')]",
        "Контейнер пустого состояния",
    );
    pub const EMPTY_VIEW_TITLE: UiLocator =
        UiLocator::new("//div[@class='not_found']//h3", "Заголовок пустого состояния");
    pub const EMPTY_VIEW_DESCRIPTION: UiLocator =
        UiLocator::new("//div[@class='not_found']//p", "Описание пустого состояния");
}
