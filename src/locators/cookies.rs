use super::UiLocator;

/// Cookie consent dialog
pub struct CookiesLocators;

impl CookiesLocators {
    pub const CONTAINER: UiLocator = UiLocator::new(".cookie-dialog", "Контейнер с куками");
    pub const ACCEPT_BUTTON: UiLocator = UiLocator::new(
        "//*[contains(@class, 'cookie-dialog')]//button[contains(., 'Принять')]",
        "Кнопка 'Принять'",
    );
}
