use reqwest::{Client, ClientBuilder};

use crate::config::EnvConfig;
use crate::types::error::AppError;
use crate::types::profile::{AccountsRes, ProfileRes, UserProfile};

const API_VERSION: &str = "6.0";

pub struct ProfileService {
    http: Client,
    base: String,
}

impl ProfileService {
    pub fn new(config: &EnvConfig) -> Result<Self, AppError> {
        let http = ClientBuilder::new()
            .user_agent("azdo-auth/0.1 (+reqwest)")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { http, base: config.devops_api_base.trim_end_matches('/').to_string() })
    }

    // The accounts call needs the member id from the profile call, so the
    // two requests are strictly sequential.
    pub async fn get_user_profile(&self, token: &str) -> Result<UserProfile, AppError> {
        let profile: ProfileRes = self
            .http
            .get(format!("{}/_apis/profile/profiles/me?api-version={}", self.base, API_VERSION))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let accounts: AccountsRes = self
            .http
            .get(format!(
                "{}/_apis/accounts?memberId={}&api-version={}",
                self.base, profile.id, API_VERSION
            ))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        log::debug!("Fetched {} organizations for {}", accounts.count, profile.id);

        Ok(UserProfile {
            display_name: profile.display_name,
            id: profile.id,
            email_address: profile.email_address,
            organizations: accounts.value.into_iter().map(|account| account.account_name).collect(),
        })
    }
}
