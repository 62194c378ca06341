//! # vacancy-e2e
//!
//! A page-object end-to-end test framework for the vacancy listing site, driving Chrome over the
//! Chrome DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Locator registry**: static CSS/XPath locators with human-readable descriptions and
//!   validated `{placeholder}` templates
//! - **Element wrappers**: typed handles (button, link, input, checkbox, tab, container, text)
//!   whose actions run as report steps and feed the coverage tracker
//! - **Components and page objects**: navbar, breadcrumbs, filter bar, filter menu, vacancy list,
//!   footer and the pages built from them
//! - **Verification**: publication-date ordering and count-at-most checks
//! - **HTTP helpers**: blocking and async clients with request/response hooks and cURL attachments
//! - **Reports**: Allure-compatible result files, environment properties and selector coverage
//!
//! ## Running a suite
//!
//! ```bash
//! # Smoke check of the vacancies page, headless
//! cargo run --bin vacancy-e2e -- smoke
//!
//! # Apply two filters with a visible browser
//! cargo run --bin vacancy-e2e -- --headed filters --label "Полная" --label "Удаленная работа"
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vacancy_e2e::pages::{Page, VacanciesPage};
//! use vacancy_e2e::{AppRoute, BrowserSession, PageContext, Settings, SortOrder};
//!
//! # fn main() -> vacancy_e2e::Result<()> {
//! let settings = Settings::load()?;
//! let session = BrowserSession::launch(settings.launch_options())?;
//! let ctx = PageContext::from_settings(Arc::new(session), &settings);
//!
//! let page = VacanciesPage::new(&ctx);
//! page.visit(AppRoute::Vacancies)?;
//! page.check_visible()?;
//! page.vacancies_list.check_vacancies_sorted_by_date(SortOrder::Desc)?;
//! # Ok(())
//! # }
//! ```
//!
//! Tests that hit bot protection return [`E2eError::Skipped`]; check [`E2eError::is_skip`] to
//! report them as skipped instead of failed.
//!
//! ## Module Overview
//!
//! - [`browser`]: the [`Driver`] trait and its Chrome implementation
//! - [`locators`]: locator tables per widget
//! - [`elements`]: element wrappers
//! - [`components`]: reusable page fragments
//! - [`pages`]: page objects and navigation
//! - [`verify`]: pure sort and count checks
//! - [`api`]: HTTP clients, hooks and assertions
//! - [`report`] / [`coverage`]: test results and selector coverage
//! - [`config`]: settings loaded from TOML and the environment

pub mod api;
pub mod browser;
pub mod components;
pub mod config;
pub mod context;
pub mod coverage;
pub mod elements;
pub mod error;
pub mod locators;
pub mod logging;
pub mod pages;
pub mod report;
pub mod routes;
pub mod verify;
pub mod wait;

pub use browser::{BrowserSession, ConnectionOptions, Driver, LaunchOptions};
pub use config::{Settings, Timeouts};
pub use context::PageContext;
pub use coverage::CoverageTracker;
pub use elements::Element;
pub use error::{E2eError, Result};
pub use locators::{Params, UiLocator};
pub use report::Reporter;
pub use routes::AppRoute;
pub use verify::SortOrder;
