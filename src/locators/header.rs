use super::UiLocator;

/// Page header; descriptions take a `{location}` parameter
pub struct HeaderPageLocators;

impl HeaderPageLocators {
    pub const TITLE: UiLocator = UiLocator::new(
        "//h1[contains(@class, 'post__title')] | //h1",
        "Заголовок страницы {location}",
    );
    pub const SUBTITLE: UiLocator = UiLocator::new(
        "//h3[contains(@class, 'post__subtitle')] | //section[contains(@class, 'header__inner')]//p",
        "Подзаголовок страницы {location}",
    );
}
