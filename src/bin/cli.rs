//! vacancy-e2e runner
//!
//! Runs one end-to-end scenario against the vacancy site and writes an
//! Allure result for it. A bot-protection page turns the run into a skip
//! (exit code 0); any other failure exits with 1.

use anyhow::Context;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use vacancy_e2e::api::{self, assert_status_code};
use vacancy_e2e::browser::{BrowserSession, ConnectionOptions};
use vacancy_e2e::config::Settings;
use vacancy_e2e::context::PageContext;
use vacancy_e2e::coverage::CoverageTracker;
use vacancy_e2e::error::E2eError;
use vacancy_e2e::pages::{Page, VacanciesPage};
use vacancy_e2e::report::{self, Label, Reporter, Severity, Status};
use vacancy_e2e::routes::AppRoute;
use vacancy_e2e::verify::SortOrder;

#[derive(Parser)]
#[command(name = "vacancy-e2e")]
#[command(version)]
#[command(about = "End-to-end checks for the vacancy listing site", long_about = None)]
struct Cli {
    /// Settings file (TOML); defaults to $E2E_CONFIG or ./e2e.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    executable_path: Option<PathBuf>,

    /// WebSocket endpoint of an already running browser
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the vacancies page and check every critical element
    Smoke,
    /// Check the ordering of vacancies by publication date
    Sort {
        #[arg(long, default_value = "desc")]
        order: String,
    },
    /// Select filters, reset them, then apply them and compare counts
    Filters {
        #[arg(long = "label", required = true)]
        labels: Vec<String>,
    },
    /// Check footer contents and document downloads
    Footer,
    /// Request an API path and expect a status code
    Api {
        path: String,
        #[arg(long, default_value_t = 200)]
        status: u16,
    },
    /// Print the run environment and write environment.properties
    Env,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_sources(Some(path.as_path()), std::env::vars()),
        None => Settings::load(),
    }
    .context("Failed to load settings")?;
    if cli.headed {
        settings.ui.headless = false;
    }
    if let Some(path) = &cli.executable_path {
        settings.ui.chrome_path = Some(path.clone());
    }

    vacancy_e2e::logging::init(&settings.log_level);
    settings.ensure_dirs().context("Failed to create report directories")?;
    report::write_environment(&settings.reporting.results_dir, &settings.env_properties())?;

    if let Command::Env = cli.command {
        for (key, value) in settings.env_properties() {
            println!("{}={}", key, value);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let reporter = Reporter::new();
    let (name, labels, outcome) = match &cli.command {
        Command::Api { path, status } => {
            let outcome = run_api(&settings, &reporter, path, *status);
            ("api_status", vec![Label::epic("API"), Label::tag("API")], outcome)
        }
        command => {
            let session = match &cli.ws_endpoint {
                Some(url) => BrowserSession::connect(ConnectionOptions::new(url.clone())),
                None => BrowserSession::launch(settings.launch_options()),
            }
            .context("Failed to start browser")?;

            let coverage = CoverageTracker::new("vacancies");
            let ctx = PageContext::from_settings(Arc::new(session), &settings)
                .with_reporter(reporter.clone())
                .with_coverage(coverage.clone());

            let run = run_ui(&ctx, command);
            if run.2.as_ref().is_err_and(|e| !e.is_skip()) {
                ctx.attach_page_source("Page source on failure");
            }
            coverage.save(&settings.reporting.coverage_dir);
            run
        }
    };

    let result = reporter.finish(name, outcome.as_ref().map(|_| ()), labels);
    let path = reporter.save(&result, &settings.reporting.results_dir)?;
    log::info!("Result written to {}", path.display());

    match (result.status, outcome) {
        (Status::Passed, _) => Ok(ExitCode::SUCCESS),
        (Status::Skipped, Err(e)) => {
            eprintln!("{}", e);
            Ok(ExitCode::SUCCESS)
        }
        (_, Err(e)) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        (_, Ok(())) => Ok(ExitCode::FAILURE),
    }
}

fn run_ui(ctx: &PageContext, command: &Command) -> (&'static str, Vec<Label>, Result<(), E2eError>) {
    let page = VacanciesPage::new(ctx);
    let vacancies = vec![Label::epic("Vacancies"), Label::tag("UI")];

    match command {
        Command::Smoke => {
            let outcome = page.visit(AppRoute::Vacancies).and_then(|_| {
                page.nav_bar.check_visible()?;
                page.breadcrumbs.check_visible("Все вакансии")?;
                page.header.check_visible()?;
                page.check_visible()?;
                Ok(())
            });
            let mut labels = vacancies;
            labels.extend([Label::feature("Vacancy list"), Label::severity(Severity::Critical), Label::tag("SMOKE")]);
            ("vacancies_page_loads", labels, outcome)
        }
        Command::Sort { order } => {
            let outcome = order.parse::<SortOrder>().and_then(|order| {
                page.visit(AppRoute::Vacancies)?;
                if order == SortOrder::Asc {
                    page.filter_bar.toggle_sort()?;
                }
                page.vacancies_list.check_vacancies_sorted_by_date(order)
            });
            let mut labels = vacancies;
            labels.push(Label::feature("Sorting"));
            ("vacancies_sort_order", labels, outcome)
        }
        Command::Filters { labels: filters } => {
            let filters: Vec<&str> = filters.iter().map(String::as_str).collect();
            let outcome = page.visit(AppRoute::Vacancies).and_then(|_| {
                page.verify_filter_reset_functionality(&filters)?;
                page.reload()?;
                page.apply_specified_filters_and_verify(&filters)
            });
            let mut labels = vacancies;
            labels.push(Label::feature("Extended filter"));
            ("vacancies_filter_menu", labels, outcome)
        }
        Command::Footer => {
            let outcome = page.visit(AppRoute::Vacancies).and_then(|_| {
                page.footer.check_visible()?;
                page.footer.check_download_privacy_policy(vacancy_e2e::components::footer::PRIVACY_POLICY_FILE)?;
                page.footer.check_download_user_agreement(vacancy_e2e::components::footer::USER_AGREEMENT_FILE)?;
                page.footer.navigate_to_main_page()?;
                page.check_current_url(&Regex::new(".*/")?)
            });
            ("footer_visibility_and_downloads", vec![Label::epic("CISM"), Label::feature("Footer")], outcome)
        }
        Command::Api { .. } | Command::Env => unreachable!("handled before the browser starts"),
    }
}

fn run_api(settings: &Settings, reporter: &Reporter, path: &str, status: u16) -> Result<(), E2eError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let client = api::public_async_http_client(settings, reporter)?;
    runtime.block_on(async {
        let response = client.get(path, &[]).await?;
        assert_status_code(response.status().as_u16(), status)
    })
}
