use super::UiLocator;

pub struct BreadcrumbsLocators;

impl BreadcrumbsLocators {
    pub const CONTAINER: UiLocator =
        UiLocator::new("//div[contains(@class, 'q-breadcrumbs')]", "Контейнер хлебных крошек");
    pub const ITEMS: UiLocator = UiLocator::new(".q-breadcrumbs__el", "Элементы хлебных крошек");
    pub const HOME_LINK: UiLocator = UiLocator::new(
        "//div[contains(@class, 'q-breadcrumbs')]//a[@href='/']",
        "Ссылка на главную",
    );
    pub const CURRENT_PAGE: UiLocator = UiLocator::new(
        "//div[contains(@class, 'q-breadcrumbs')]//span[contains(@class, 'q-breadcrumbs__el')]",
        "Текущая страница",
    );
}
