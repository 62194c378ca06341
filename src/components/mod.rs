//! Page widgets built from element handles

pub mod base;
pub mod breadcrumbs;
pub mod empty_view;
pub mod filter_bar;
pub mod filter_menu;
pub mod footer;
pub mod header;
pub mod navbar;
pub mod response_form;
pub mod vacancies_list;

pub use base::{Component, check_current_url, check_input_locator, check_locator};
pub use breadcrumbs::BreadcrumbsComponent;
pub use empty_view::EmptyViewComponent;
pub use filter_bar::FilterBarComponent;
pub use filter_menu::FilterMenuComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use navbar::{NavbarComponent, SearchComponent};
pub use response_form::VacancyResponseFormComponent;
pub use vacancies_list::{VacanciesListComponent, Vacancy};
