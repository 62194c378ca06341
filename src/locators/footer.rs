use super::UiLocator;

pub struct FooterLocators;

impl FooterLocators {
    pub const FOOTER_CONTAINER: UiLocator = UiLocator::new("footer.container", "Контейнер футера");
    pub const INFO: UiLocator = UiLocator::new(
        "//footer[contains(@class, 'footer')]//div[contains(@class, 'footer__info')]",
        "Блок информации в футере",
    );
    pub const PRIVACY_POLICY_LINK: UiLocator = UiLocator::new(
        "//footer[contains(@class, 'footer')]//a[contains(@href, 'Политика конфиденциальности.pdf')]",
        "Ссылка на Политику конфиденциальности",
    );
    pub const USER_AGREEMENT_LINK: UiLocator = UiLocator::new(
        "//footer[contains(@class, 'footer')]//a[contains(@href, 'Пользовательское_соглашение.pdf')]",
        "Ссылка на Пользовательское соглашение",
    );
    pub const MAIN_PAGE_LINK: UiLocator = UiLocator::new(
        "//footer[contains(@class, 'footer')]//a[@href='/']",
        "Ссылка на главную страницу",
    );
    pub const ICON: UiLocator = UiLocator::new(
        "//footer[contains(@class, 'footer')]//img[@alt='logo']",
        "Логотип в футере",
    );
}
