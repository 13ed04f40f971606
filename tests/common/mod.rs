use std::sync::Arc;

use azdo_auth::config::EnvConfig;
use azdo_auth::devops::profile_service::ProfileService;
use azdo_auth::identity::identity_service::IdentityService;
use azdo_auth::views::Views;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestContext {
    pub identity_provider: MockServer,
    pub devops_api: MockServer,
    pub identity: Arc<IdentityService>,
    pub profiles: Arc<ProfileService>,
    pub views: Arc<Views>,
    pub config: EnvConfig,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let identity_provider = MockServer::start().await;
        let devops_api = MockServer::start().await;

        let config = EnvConfig {
            port: 3978,
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            tenant_id: "test-tenant".to_string(),
            redirect_uri: "http://localhost:3978/auth/callback".to_string(),
            authority: identity_provider.uri(),
            devops_api_base: devops_api.uri(),
        };

        let identity = Arc::new(
            IdentityService::new(&config).expect("Failed to initialize IdentityService"),
        );
        let profiles = Arc::new(
            ProfileService::new(&config).expect("Failed to initialize ProfileService"),
        );
        let views = Arc::new(Views::new().expect("Failed to register view templates"));

        TestContext { identity_provider, devops_api, identity, profiles, views, config }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        actix_web::App::new()
            .app_data(actix_web::web::Data::new(Arc::clone(&self.identity)))
            .app_data(actix_web::web::Data::new(Arc::clone(&self.profiles)))
            .app_data(actix_web::web::Data::new(Arc::clone(&self.views)))
            .configure(azdo_auth::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn mock_token_success(&self, access_token: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/{}/oauth2/v2.0/token", self.config.tenant_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token_type": "Bearer",
                "expires_in": 3600,
                "access_token": access_token,
            })))
            .mount(&self.identity_provider)
            .await;
    }

    #[allow(dead_code)]
    pub async fn mock_token_failure(&self) {
        Mock::given(method("POST"))
            .and(path(format!("/{}/oauth2/v2.0/token", self.config.tenant_id)))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "AADSTS70008: The provided authorization code is expired.",
            })))
            .mount(&self.identity_provider)
            .await;
    }

    #[allow(dead_code)]
    pub async fn mock_profile_success(&self) {
        Mock::given(method("GET"))
            .and(path("/_apis/profile/profiles/me"))
            .and(query_param("api-version", "6.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "displayName": "Jamie Example",
                "id": "member-123",
                "emailAddress": "jamie@example.com",
                "coreRevision": 1,
            })))
            .mount(&self.devops_api)
            .await;

        Mock::given(method("GET"))
            .and(path("/_apis/accounts"))
            .and(query_param("memberId", "member-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "value": [
                    { "accountId": "org-1", "accountName": "fabrikam" },
                    { "accountId": "org-2", "accountName": "contoso" },
                ],
            })))
            .mount(&self.devops_api)
            .await;
    }

    #[allow(dead_code)]
    pub async fn mock_profile_unauthorized(&self) {
        Mock::given(method("GET"))
            .and(path("/_apis/profile/profiles/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&self.devops_api)
            .await;
    }

    #[allow(dead_code)]
    pub async fn mock_accounts_unauthorized(&self) {
        Mock::given(method("GET"))
            .and(path("/_apis/profile/profiles/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "displayName": "Jamie Example",
                "id": "member-123",
                "emailAddress": "jamie@example.com",
            })))
            .mount(&self.devops_api)
            .await;

        Mock::given(method("GET"))
            .and(path("/_apis/accounts"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&self.devops_api)
            .await;
    }
}
