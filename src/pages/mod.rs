pub mod base;
pub mod vacancies;
pub mod vacancy_detail;

pub use base::{BasePage, Page, is_captcha_page};
pub use vacancies::VacanciesPage;
pub use vacancy_detail::VacancyDetailPage;
