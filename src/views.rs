use handlebars::Handlebars;

use crate::types::error::AppError;
use crate::types::profile::UserProfile;

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string("login", include_str!("../resources/views/login.hbs"))?;
        registry
            .register_template_string("profile", include_str!("../resources/views/profile.hbs"))?;
        Ok(Self { registry })
    }

    pub fn login_page(&self) -> Result<String, AppError> {
        Ok(self.registry.render("login", &serde_json::json!({}))?)
    }

    pub fn profile_page(&self, profile: &UserProfile) -> Result<String, AppError> {
        Ok(self.registry.render("profile", profile)?)
    }
}
