use super::UiLocator;

/// Filter bar above the vacancy list: category tabs, sort and filter buttons
pub struct FilterVacanciesLocators;

impl FilterVacanciesLocators {
    pub const FILTER_CONTAINER: UiLocator =
        UiLocator::new("//div[contains(@class,'post__bar')]", "Контейнер фильтров");
    pub const FILTERS_TABS: UiLocator = UiLocator::new(".q-tabs", "Контейнер вкладок фильтров");
    pub const ALL_TABS: UiLocator = UiLocator::new(
        "//div[contains(@role, 'tablist')]//div[contains(@role, 'tab')]",
        "Все вкладки фильтров",
    );
    pub const SORT: UiLocator =
        UiLocator::new("//button[contains(@class, 'btn_sort')]", "Кнопка сортировки");
    pub const ICON_SORTING_UP: UiLocator = UiLocator::new(
        "//button[contains(@class, 'btn_sort')]//i[contains(@class, 'icon-sorting-up')]",
        "Иконка сортировки по возрастанию",
    );
    pub const ICON_SORTING_DOWN: UiLocator = UiLocator::new(
        "//button[contains(@class, 'btn_sort')]//i[contains(@class, 'icon-sorting-down')]",
        "Иконка сортировки по убыванию",
    );
    pub const FILTER_BTN: UiLocator =
        UiLocator::new("//button[contains(@class, 'btn_filters')]", "Кнопка 'Фильтр'");
    /// 1-based `{index}`, `{title}` is only used in the description
    pub const TAB: UiLocator = UiLocator::new(
        "(//div[contains(@role, 'tablist')]//div[contains(@role, 'tab')])[{index}]",
        "Вкладка {title}",
    );
    pub const TAB_ALL_VACANCIES: UiLocator = UiLocator::new(
        "//div[contains(@class, 'q-tab')]//div[contains(text(), 'Все')]",
        "Вкладка 'Все'",
    );
}
