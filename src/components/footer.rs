use crate::browser::Download;
use crate::components::Component;
use crate::context::PageContext;
use crate::elements::{Element, Icon, Link, Text};
use crate::error::Result;
use crate::locators::FooterLocators;
use regex::Regex;

pub const COPYRIGHT_YEARS: &str = "2018 - 2025";
pub const INN: &str = "9709037529";
pub const PRIVACY_POLICY_FILE: &str = "Политика конфиденциальности.pdf";
pub const USER_AGREEMENT_FILE: &str = "Пользовательское_соглашение.pdf";

pub struct FooterComponent {
    ctx: PageContext,
    pub info: Text,
    pub user_agreement_link: Link,
    pub privacy_policy_link: Link,
    pub main_page_link: Link,
    pub footer_icon: Icon,
}

impl FooterComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            info: Text::named(ctx, FooterLocators::INFO),
            user_agreement_link: Link::named(ctx, FooterLocators::USER_AGREEMENT_LINK),
            privacy_policy_link: Link::named(ctx, FooterLocators::PRIVACY_POLICY_LINK),
            main_page_link: Link::named(ctx, FooterLocators::MAIN_PAGE_LINK),
            footer_icon: Icon::named(ctx, FooterLocators::ICON),
        }
    }

    pub fn should_contain_copyright(&self, years: &str) -> Result<&Self> {
        self.info.check_contain_text(&format!("© {}", years))?;
        Ok(self)
    }

    pub fn should_contain_inn(&self, inn: &str) -> Result<&Self> {
        self.info.check_contain_text(&format!("ИНН: {}", inn))?;
        Ok(self)
    }

    pub fn should_have_all_links(&self) -> Result<&Self> {
        self.user_agreement_link.check_visible()?;
        self.privacy_policy_link.check_visible()?;
        self.main_page_link.check_visible()?;
        Ok(self)
    }

    pub fn should_have_icon(&self) -> Result<&Self> {
        self.footer_icon.check_visible()?;
        Ok(self)
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx.step("Checking every footer element", || {
            self.should_contain_copyright(COPYRIGHT_YEARS)?
                .should_contain_inn(INN)?
                .should_have_all_links()?
                .should_have_icon()?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn navigate_to_main_page(&self) -> Result<()> {
        self.ctx.step("Navigating to the main page from the footer", || {
            self.main_page_link.check_visible()?.click()?;
            self.check_current_url(&Regex::new("/")?)
        })
    }

    pub fn check_download_privacy_policy(&self, file_name: &str) -> Result<Download> {
        self.ctx
            .step("Downloading the privacy policy", || self.privacy_policy_link.check_download_file(file_name))
    }

    pub fn check_download_user_agreement(&self, file_name: &str) -> Result<Download> {
        self.ctx
            .step("Downloading the user agreement", || self.user_agreement_link.check_download_file(file_name))
    }
}

impl Component for FooterComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
