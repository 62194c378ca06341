use super::UiLocator;

/// Top navigation bar
pub struct NavBarLocators;

impl NavBarLocators {
    pub const ABOUT_US_TAB: UiLocator =
        UiLocator::new("//a[@role='tab' and @href='/']", "Вкладка 'О нас' в навбаре");
    pub const MATERIALS_TAB: UiLocator = UiLocator::new(
        "//a[@role='tab' and @href='/poleznye-materialy']",
        "Вкладка 'Полезные материалы' в навбаре",
    );
    pub const NEWS_TAB: UiLocator =
        UiLocator::new("//a[@role='tab' and @href='/novosti']", "Вкладка 'Новости' в навбаре");
    pub const VACANCIES_TAB: UiLocator =
        UiLocator::new("//a[@role='tab' and @href='/vakansii']", "Вкладка 'Вакансии' в навбаре");
    pub const CONTACT_TAB: UiLocator =
        UiLocator::new("//a[@role='tab' and @href='/#feedback']", "Вкладка 'Контакты' в навбаре");
    pub const SEARCH_TAB: UiLocator = UiLocator::new(
        "//header//div[@class='input_search__wrapp']",
        "Контейнер поиска в навбаре",
    );
    pub const SEARCH_ICON: UiLocator = UiLocator::new(".input_search__icon_search", "Иконка поиска");
    pub const SEARCH_INPUT: UiLocator = UiLocator::new(
        "//div[contains(@class, 'input_search__wrapp')]//input",
        "Поле ввода поиска",
    );
    pub const SEARCH_ENTER_ICON: UiLocator =
        UiLocator::new("i[role='presentation']", "Иконка 'Enter' для поиска");
    pub const LOGO: UiLocator =
        UiLocator::new("//div[contains(@class, 'q-avatar')]//img", "Логотип в навбаре");
}
