use super::UiLocator;

/// Drop-down menu with the experience / employment / schedule checkboxes
pub struct VacancyFiltersMenuLocators;

impl VacancyFiltersMenuLocators {
    pub const CONTAINER: UiLocator = UiLocator::new(
        "//div[contains(@class,'q-menu')]",
        "Контейнер выпадающего меню фильтров",
    );
    pub const RESET_BUTTON: UiLocator = UiLocator::new(
        "//button[contains(., 'Сбросить')]",
        "Кнопка 'Сбросить' в меню фильтров",
    );
    pub const APPLY_BUTTON: UiLocator = UiLocator::new(
        "//button[contains(., 'Применить')]",
        "Кнопка 'Применить' в меню фильтров",
    );
    pub const CHECKBOX_ROOT: UiLocator = UiLocator::new(
        ".//div[contains(@class, 'q-checkbox') and .//div[contains(@class, 'q-checkbox__label') and normalize-space() = '{label}']]",
        "Корневой элемент чекбокса по тексту метки '{label}'",
    );
    /// Evaluated relative to a group container
    pub const CHECKBOX_ITEMS: UiLocator =
        UiLocator::new("//div[contains(@role, 'checkbox')]", "Элементы чекбоксов в меню");
    /// 1-based `{index}` within the group titled `{group_title}`
    pub const CHECKBOX_ITEM: UiLocator = UiLocator::new(
        "(//div[normalize-space(text()) = '{group_title}']/following-sibling::div[@role='group'][1]//div[contains(@role, 'checkbox')])[{index}]",
        "Чекбокс из группы {group_title}: {label}",
    );
    pub const CHECKBOX_LABEL: UiLocator = UiLocator::new(
        ".//div[contains(@class, 'q-checkbox__label')]",
        "Текст метки чекбокса",
    );
    pub const CHECKBOX_GROUP_BY_TITLE: UiLocator = UiLocator::new(
        "//div[normalize-space(text()) = '{group_title}']/following-sibling::div[@role='group'][1]",
        "Группа чекбоксов, следующая за заголовком '{group_title}'",
    );
}
