use super::UiLocator;

/// Vacancy response form on the detail page
pub struct VacancyResponseFormLocators;

impl VacancyResponseFormLocators {
    pub const FULL_NAME_INPUT: UiLocator = UiLocator::new(
        "//input[@aria-label='Представьтесь, пожалуйста']",
        "Поле ввода 'Имя'",
    );
    pub const PHONE_INPUT: UiLocator =
        UiLocator::new("//input[@aria-label='Ваш номер телефона']", "Поле ввода 'Телефон'");
    pub const EMAIL_INPUT: UiLocator =
        UiLocator::new("//input[@aria-label='Ваш Email']", "Поле ввода 'Email'");
    pub const RESUME_LINK_INPUT: UiLocator =
        UiLocator::new("//input[@aria-label='Ваше резюме']", "Поле ввода 'Ссылка на резюме'");
    pub const SUBMIT_BUTTON: UiLocator = UiLocator::new(
        "//form[contains(@class, 'vacancy_form')]//button[@type='submit' and .//span[text()='Отправить']]",
        "Кнопка 'Отправить'",
    );
    pub const FORM_CONTAINER: UiLocator =
        UiLocator::new("//form[contains(@class, 'vacancy_form')]", "Контейнер формы отклика");
    pub const FULL_NAME_ERROR: UiLocator = UiLocator::new(
        "//input[@aria-label='Представьтесь, пожалуйста']/ancestor::label//div[@role='alert']",
        "Сообщение об ошибке под полем 'Имя'",
    );
    pub const PHONE_ERROR: UiLocator = UiLocator::new(
        "//input[@aria-label='Ваш номер телефона']/ancestor::label//div[@role='alert']",
        "Сообщение об ошибке под полем 'Телефон'",
    );
    pub const EMAIL_ERROR: UiLocator = UiLocator::new(
        "//input[@aria-label='Ваш Email']/ancestor::label//div[@role='alert']",
        "Сообщение об ошибке под полем 'Email'",
    );
    pub const RESUME_LINK_ERROR: UiLocator = UiLocator::new(
        "//input[@aria-label='Ваше резюме']/ancestor::label//div[@role='alert']",
        "Сообщение об ошибке под полем 'Резюме'",
    );
    pub const SMART_CAPTCHA_IFRAME: UiLocator =
        UiLocator::new("//iframe[@data-testid='backend-iframe']", "Iframe капчи");
}
