use crate::browser::WaitUntil;
use crate::components::check_current_url;
use crate::context::PageContext;
use crate::elements::{Button, Container, Element};
use crate::error::{E2eError, Result};
use crate::locators::CookiesLocators;
use crate::routes::AppRoute;
use crate::wait::poll_until;
use regex::Regex;
use std::time::Duration;

/// Markers of the bot-protection interstitial served instead of the site
pub const CAPTCHA_CONTENT_PATTERNS: [&str; 3] = [
    "Checking your browser before accessing cism-ms.ru",
    "Sorry, we could not verify your browser automatically",
    "Complete the manual check to continue",
];

/// Lowercase fragments of interstitial page titles
pub const CAPTCHA_TITLE_PATTERNS: [&str; 3] = ["just a moment", "captcha", "checking your browser"];

/// Pause after accepting cookies while the dialog animates away
const COOKIES_SETTLE: Duration = Duration::from_secs(1);

const SKIP_MESSAGE: &str = "bot protection page detected, the site blocks automated requests from this network";

/// Navigation and page-wide checks shared by every page object
pub struct BasePage {
    ctx: PageContext,
    cookies_dialog: Container,
    accept_cookies: Button,
}

impl BasePage {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            cookies_dialog: Container::named(ctx, CookiesLocators::CONTAINER),
            accept_cookies: Button::named(ctx, CookiesLocators::ACCEPT_BUTTON),
        }
    }

    pub fn ctx(&self) -> &PageContext {
        &self.ctx
    }

    /// Open a route of the site
    pub fn visit(&self, route: AppRoute) -> Result<()> {
        self.visit_url(&route.url(self.ctx.base_url()))
    }

    /// Open `url`, skip on bot protection, then dismiss the cookie dialog
    pub fn visit_url(&self, url: &str) -> Result<()> {
        self.ctx.step(&format!("Opening page: '{}'", url), || {
            let timeouts = self.ctx.timeouts();
            self.ctx.driver().goto(url, WaitUntil::NetworkIdle, timeouts.navigation)?;
            self.check_for_captcha_page()?;
            self.accept_cookies_if_present()
        })
    }

    /// Fail with `Skipped` when the bot-protection interstitial is shown
    pub fn check_for_captcha_page(&self) -> Result<()> {
        let driver = self.ctx.driver();
        let content = driver.content()?;
        let title = driver.title()?;

        if !is_captcha_page(&title, &content) {
            return Ok(());
        }

        log::warn!("CAPTCHA page detected at {}", driver.url().unwrap_or_default());
        log::warn!("Page title: {}", title);
        match driver.screenshot(true) {
            Ok(png) => self.ctx.reporter().attach_bytes("CAPTCHA screenshot", png, crate::report::mime::PNG, "png"),
            Err(e) => log::warn!("Failed to capture CAPTCHA screenshot: {}", e),
        }
        self.ctx.reporter().attach_text("CAPTCHA HTML", &content, crate::report::mime::HTML);
        Err(E2eError::Skipped(SKIP_MESSAGE.to_string()))
    }

    /// Click "accept" if the cookie dialog shows up within the cookies timeout
    pub fn accept_cookies_if_present(&self) -> Result<()> {
        let target = self.cookies_dialog.base().target()?;
        let driver = self.ctx.driver();
        let shown = poll_until(self.ctx.timeouts().cookies, || "cookie dialog".to_string(), || {
            Ok(driver.inspect(&target)?.filter(|s| s.visible).map(|_| ()))
        });

        match shown {
            Ok(()) => {}
            Err(E2eError::Timeout(_)) => {
                log::debug!("No cookie dialog shown");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        if self.accept_cookies.is_visible()? {
            self.accept_cookies.click()?;
            log::info!("Cookies accepted");
            driver.pause(COOKIES_SETTLE);
        }
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let driver = self.ctx.driver();
        self.ctx.step(&format!("Reloading page: '{}'", driver.url()?), || {
            driver.reload(WaitUntil::DomContentLoaded, self.ctx.timeouts().navigation)
        })
    }

    pub fn check_current_url(&self, pattern: &Regex) -> Result<()> {
        check_current_url(&self.ctx, pattern)
    }
}

/// Heuristic match on the interstitial's title or body text
pub fn is_captcha_page(title: &str, content: &str) -> bool {
    let title = title.to_lowercase();
    CAPTCHA_CONTENT_PATTERNS.iter().any(|pattern| content.contains(pattern))
        || CAPTCHA_TITLE_PATTERNS.iter().any(|pattern| title.contains(pattern))
}

/// A page object: components plus the shared navigation helpers
pub trait Page {
    fn base(&self) -> &BasePage;

    fn visit(&self, route: AppRoute) -> Result<()> {
        self.base().visit(route)
    }

    fn reload(&self) -> Result<()> {
        self.base().reload()
    }

    fn check_current_url(&self, pattern: &Regex) -> Result<()> {
        self.base().check_current_url(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captcha_heuristic() {
        assert!(is_captcha_page("Just a moment...", "<html></html>"));
        assert!(is_captcha_page("ЦИСМ", "<p>Complete the manual check to continue</p>"));
        assert!(!is_captcha_page("Вакансии | ЦИСМ", "<h1>Присоединяйся к команде Центра</h1>"));
    }
}
