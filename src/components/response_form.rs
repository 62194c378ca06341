use crate::components::{Component, check_input_locator};
use crate::context::PageContext;
use crate::elements::{Button, Element, Icon, Input, Text};
use crate::error::Result;
use crate::locators::VacancyResponseFormLocators;

/// Application form on the vacancy detail page
pub struct VacancyResponseFormComponent {
    ctx: PageContext,
    pub full_name_input: Input,
    pub email_input: Input,
    pub phone_input: Input,
    pub resume_link_input: Input,
    pub submit_button: Button,
    pub full_name_error: Text,
    pub email_error: Text,
    pub phone_error: Text,
    pub resume_link_error: Text,
    pub captcha_frame: Icon,
}

impl VacancyResponseFormComponent {
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            ctx: ctx.clone(),
            full_name_input: Input::named(ctx, VacancyResponseFormLocators::FULL_NAME_INPUT),
            email_input: Input::named(ctx, VacancyResponseFormLocators::EMAIL_INPUT),
            phone_input: Input::named(ctx, VacancyResponseFormLocators::PHONE_INPUT),
            resume_link_input: Input::named(ctx, VacancyResponseFormLocators::RESUME_LINK_INPUT),
            submit_button: Button::named(ctx, VacancyResponseFormLocators::SUBMIT_BUTTON),
            full_name_error: Text::named(ctx, VacancyResponseFormLocators::FULL_NAME_ERROR),
            email_error: Text::named(ctx, VacancyResponseFormLocators::EMAIL_ERROR),
            phone_error: Text::named(ctx, VacancyResponseFormLocators::PHONE_ERROR),
            resume_link_error: Text::named(ctx, VacancyResponseFormLocators::RESUME_LINK_ERROR),
            captcha_frame: Icon::named(ctx, VacancyResponseFormLocators::SMART_CAPTCHA_IFRAME),
        }
    }

    pub fn fill_full_name(&self, value: &str) -> Result<&Self> {
        self.full_name_input.fill(value)?;
        Ok(self)
    }

    pub fn fill_phone(&self, value: &str) -> Result<&Self> {
        self.phone_input.fill(value)?;
        Ok(self)
    }

    pub fn fill_email(&self, value: &str) -> Result<&Self> {
        self.email_input.fill(value)?;
        Ok(self)
    }

    pub fn fill_resume_link(&self, value: &str) -> Result<&Self> {
        self.resume_link_input.fill(value)?;
        Ok(self)
    }

    /// Fill the form; an empty `resume_link` leaves that field untouched
    pub fn fill_form(&self, full_name: &str, phone: &str, email: &str, resume_link: &str) -> Result<&Self> {
        self.ctx.step("Filling the vacancy response form", || {
            self.fill_full_name(full_name)?.fill_phone(phone)?.fill_email(email)?;
            if !resume_link.is_empty() {
                self.fill_resume_link(resume_link)?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    pub fn submit(&self) -> Result<()> {
        self.ctx.step("Submitting the vacancy response form", || self.submit_button.click())
    }

    pub fn check_visible(&self) -> Result<&Self> {
        self.ctx.step("Checking that the vacancy response form is visible", || {
            self.full_name_input.check_visible()?;
            self.phone_input.check_visible()?;
            self.email_input.check_visible()?;
            self.resume_link_input.check_visible()?;
            self.submit_button.check_visible()?;
            Ok(())
        })?;
        Ok(self)
    }

    pub fn check_all_fields_are_empty(&self) -> Result<&Self> {
        self.ctx.step("Checking that every form field is empty", || {
            for input in [&self.full_name_input, &self.phone_input, &self.email_input, &self.resume_link_input] {
                input.check_have_value("")?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Field holds `value` after filling
    pub fn check_field_value(&self, input: &Input, value: &str) -> Result<&Self> {
        check_input_locator(input, Some(value))?;
        Ok(self)
    }

    pub fn wait_for_captcha_iframe(&self) -> Result<&Self> {
        self.ctx.step("Waiting for the SmartCaptcha iframe to load", || {
            self.captcha_frame.check_visible().map(|_| ())
        })?;
        Ok(self)
    }

    pub fn check_full_name_error_message(&self, expected: &str) -> Result<&Self> {
        self.check_error(&self.full_name_input, &self.full_name_error, expected)
    }

    pub fn check_email_error_message(&self, expected: &str) -> Result<&Self> {
        self.check_error(&self.email_input, &self.email_error, expected)
    }

    pub fn check_phone_error_message(&self, expected: &str) -> Result<&Self> {
        self.check_error(&self.phone_input, &self.phone_error, expected)
    }

    pub fn check_resume_link_error_message(&self, expected: &str) -> Result<&Self> {
        self.check_error(&self.resume_link_input, &self.resume_link_error, expected)
    }

    fn check_error(&self, input: &Input, error: &Text, expected: &str) -> Result<&Self> {
        let step = format!("Checking the error under field '{}': '{}'", input.name(), expected);
        self.ctx.step(&step, || {
            error.check_visible()?.check_contain_text(expected)?;
            Ok(())
        })?;
        Ok(self)
    }
}

impl Component for VacancyResponseFormComponent {
    fn ctx(&self) -> &PageContext {
        &self.ctx
    }
}
