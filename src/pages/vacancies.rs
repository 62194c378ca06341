use crate::components::{
    BreadcrumbsComponent, EmptyViewComponent, FilterBarComponent, FilterMenuComponent, FooterComponent,
    HeaderComponent, NavbarComponent, VacanciesListComponent,
};
use crate::context::PageContext;
use crate::elements::Element;
use crate::error::{E2eError, Result};
use crate::locators::VacanciesListLocators;
use crate::pages::base::{BasePage, Page};

/// `/vakansii`: the vacancy list with its filters
pub struct VacanciesPage {
    base: BasePage,
    pub nav_bar: NavbarComponent,
    pub header: HeaderComponent,
    pub breadcrumbs: BreadcrumbsComponent,
    pub filter_bar: FilterBarComponent,
    pub vacancies_list: VacanciesListComponent,
    pub empty_view: EmptyViewComponent,
    pub filter_menu: FilterMenuComponent,
    pub footer: FooterComponent,
}

impl VacanciesPage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            base: BasePage::new(ctx),
            nav_bar: NavbarComponent::new(ctx),
            header: HeaderComponent::new(ctx, "Вакансии"),
            breadcrumbs: BreadcrumbsComponent::new(ctx, 2),
            filter_bar: FilterBarComponent::new(ctx),
            vacancies_list: VacanciesListComponent::new(ctx),
            empty_view: EmptyViewComponent::new(ctx),
            filter_menu: FilterMenuComponent::new(ctx),
            footer: FooterComponent::new(ctx),
        }
    }

    fn ctx(&self) -> &PageContext {
        self.base.ctx()
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx().step("Checking the vacancies page", || {
            self.filter_bar.check_visible()?;
            self.vacancies_list.check_visible()?;
            self.footer.check_visible()?;
            Ok(())
        })?;
        Ok(self)
    }

    /// Select `labels`, press "Reset" and check that nothing stays selected
    pub fn verify_filter_reset_functionality(&self, labels: &[&str]) -> Result<()> {
        self.ctx().step(&format!("Checking the filter reset with {:?}", labels), || {
            self.filter_bar.open_filter_menu()?;
            self.filter_menu.check_visible()?.select_filters(labels)?.are_filters_selected(labels)?.reset()?;

            if !self.filter_menu.container.is_visible()? {
                log::info!("Filter menu closed after reset, reopening");
                self.filter_bar.open_filter_menu()?;
                self.filter_menu.check_visible()?;
            }

            self.filter_menu.check_filter_reset()?;
            Ok(())
        })
    }

    /// Apply `labels` and check that the list did not grow
    pub fn apply_specified_filters_and_verify(&self, labels: &[&str]) -> Result<()> {
        self.ctx().step(&format!("Applying filters {:?}", labels), || {
            let baseline = self.vacancies_list.get_vacancies_count()?;
            log::info!("Vacancies before filtering: {}", baseline);

            self.filter_bar.open_filter_menu()?;
            self.filter_menu.check_visible()?.select_filters(labels)?.apply()?.check_not_visible()?;

            self.vacancies_list
                .container
                .check_less_or_equal_count_elements(&VacanciesListLocators::VACANCY_CARDS.selector, baseline)?;
            Ok(())
        })
    }

    /// Click through every category tab; each must become active and show
    /// no more vacancies than the initial, unfiltered list
    pub fn verify_filtering_by_all_category_tabs(&self) -> Result<()> {
        self.ctx().step("Checking filtering by every category tab", || {
            let tabs = self.filter_bar.tabs()?;
            if tabs.is_empty() {
                return Err(E2eError::AssertionFailed("Filter bar has no category tabs".to_string()));
            }

            let baseline = self.vacancies_list.get_vacancies_count()?;
            log::info!("Vacancies on '{}': {}", tabs[0].name(), baseline);

            for tab in &tabs {
                tab.click()?;
                if !tab.is_active()? {
                    return Err(E2eError::AssertionFailed(format!("Tab '{}' did not become active", tab.name())));
                }
                self.vacancies_list
                    .container
                    .check_less_or_equal_count_elements(&VacanciesListLocators::VACANCY_CARDS.selector, baseline)?;
            }
            Ok(())
        })
    }
}

impl Page for VacanciesPage {
    fn base(&self) -> &BasePage {
        &self.base
    }
}
