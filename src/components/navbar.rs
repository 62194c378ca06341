use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Element, Icon, Input, Label, Link};
use crate::error::Result;
use crate::locators::NavBarLocators;
use crate::routes::AppRoute;

/// Site search in the navigation bar
pub struct SearchComponent {
    ctx: PageContext,
    pub search_tab: Label,
    pub icon: Icon,
    pub input: Input,
    pub enter_icon: Icon,
}

impl SearchComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            search_tab: Label::new(ctx, NavBarLocators::SEARCH_TAB, "Поиск"),
            icon: Icon::new(ctx, NavBarLocators::SEARCH_ICON, "Иконка поиска"),
            input: Input::new(ctx, NavBarLocators::SEARCH_INPUT, "Поле ввода поиска"),
            enter_icon: Icon::new(ctx, NavBarLocators::SEARCH_ENTER_ICON, "Иконка стрелки вправо"),
        }
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.search_tab.check_visible()?;
        self.icon.check_visible()?;
        Ok(self)
    }

    /// Open the search field, type the query and submit it
    pub fn search(&self, query: &str) -> Result<&Self> {
        self.ctx.step(&format!("Searching for '{}'", query), || {
            self.search_tab.click()?;
            self.input.check_visible()?.fill(query)?;
            self.enter_icon.click()
        })?;
        Ok(self)
    }
}

impl Component for SearchComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}

pub struct NavbarComponent {
    ctx: PageContext,
    pub logo: Icon,
    pub about_tab: Link,
    pub materials_tab: Link,
    pub news_tab: Link,
    pub vacancies_tab: Link,
    pub contacts_tab: Link,
    pub search: SearchComponent,
}

impl NavbarComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            logo: Icon::new(ctx, NavBarLocators::LOGO, "Логотип сайта"),
            about_tab: Link::new(ctx, NavBarLocators::ABOUT_US_TAB, "О нас"),
            materials_tab: Link::new(ctx, NavBarLocators::MATERIALS_TAB, "Материалы"),
            news_tab: Link::new(ctx, NavBarLocators::NEWS_TAB, "Новости"),
            vacancies_tab: Link::new(ctx, NavBarLocators::VACANCIES_TAB, "Вакансии"),
            contacts_tab: Link::new(ctx, NavBarLocators::CONTACT_TAB, "Контакты"),
            search: SearchComponent::new(ctx),
        }
    }

    /// Logo, every section tab and the search, in that order
    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx.step("Checking the navigation bar", || {
            self.logo.check_visible()?;
            for tab in self.tabs() {
                tab.check_visible()?;
            }
            self.search.check_visible()?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn tabs(&self) -> [&Link; 5] {
        [&self.about_tab, &self.materials_tab, &self.news_tab, &self.vacancies_tab, &self.contacts_tab]
    }

    pub fn tab_for(&self, route: AppRoute) -> &Link {
        match route {
            AppRoute::About => &self.about_tab,
            AppRoute::Materials => &self.materials_tab,
            AppRoute::News => &self.news_tab,
            AppRoute::Vacancies => &self.vacancies_tab,
            AppRoute::Contacts => &self.contacts_tab,
        }
    }

    /// Click the tab of a section and wait for its URL
    pub fn go_to(&self, route: AppRoute) -> Result<()> {
        self.ctx.step(&format!("Opening '{}' from the navigation bar", route), || {
            self.tab_for(route).click()?;
            let pattern = regex::Regex::new(&regex::escape(route.path()))?;
            self.check_current_url(&pattern)
        })
    }
}

impl Component for NavbarComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
