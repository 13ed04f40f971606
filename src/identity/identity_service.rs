use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use url::Url;

use crate::config::EnvConfig;
use crate::types::error::AppError;

// The callback exchange must present the exact scope and redirect URI the
// login redirect was issued with.
const DEVOPS_SCOPE: &str = "https://app.vssps.visualstudio.com/.default";

type OauthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

pub struct IdentityService {
    oauth: OauthClient,
    http: reqwest::Client,
}

impl IdentityService {
    pub fn new(config: &EnvConfig) -> Result<Self, AppError> {
        let authorize_endpoint =
            format!("{}/{}/oauth2/v2.0/authorize", config.authority, config.tenant_id);
        let token_endpoint = format!("{}/{}/oauth2/v2.0/token", config.authority, config.tenant_id);

        let oauth = BasicClient::new(ClientId::new(config.client_id.clone()))
            .set_client_secret(ClientSecret::new(config.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(authorize_endpoint)?)
            .set_token_uri(TokenUrl::new(token_endpoint)?)
            .set_redirect_uri(RedirectUrl::new(config.redirect_uri.clone())?);

        // The exchange client must not follow redirects (oauth2 crate
        // requirement for confidential clients).
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { oauth, http })
    }

    pub fn authorize_url(&self) -> Url {
        let (url, _state) = self
            .oauth
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(DEVOPS_SCOPE.to_string()))
            .url();
        url
    }

    pub async fn redeem_code(&self, code: &str) -> Result<String, AppError> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AppError::Exchange(e.to_string()))?;

        Ok(token.access_token().secret().clone())
    }
}
