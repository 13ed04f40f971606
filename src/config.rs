use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub redirect_uri: String,
    pub authority: String,
    pub devops_api_base: String,
}

impl EnvConfig {
    // Each setting can live under more than one env name (the bot-framework
    // names are the fallbacks). First name that is set wins.
    fn first_of(names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| env::var(name).ok())
    }

    fn get_env(names: &[&str]) -> String {
        Self::first_of(names).unwrap_or_else(|| panic!("Environment variable {} not set", names[0]))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::first_of(&["PORT"])
                .and_then(|port| port.parse().ok())
                .unwrap_or(3978),
            client_id: Self::get_env(&["AZURE_CLIENT_ID", "MicrosoftAppId"]),
            client_secret: Self::get_env(&["AZURE_CLIENT_SECRET", "MicrosoftAppPassword"]),
            tenant_id: Self::get_env(&["AZURE_TENANT_ID", "MicrosoftAppTenantId"]),
            redirect_uri: Self::first_of(&["REDIRECT_URI"])
                .unwrap_or_else(|| "http://localhost:3978/auth/callback".to_string()),
            authority: Self::first_of(&["AZURE_AUTHORITY"])
                .unwrap_or_else(|| "https://login.microsoftonline.com".to_string()),
            devops_api_base: Self::first_of(&["DEVOPS_API_BASE"])
                .unwrap_or_else(|| "https://app.vssps.visualstudio.com".to_string()),
        }
    }
}
