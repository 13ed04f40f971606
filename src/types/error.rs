use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // standard web stuffs
    #[error("authorization code is missing")]
    MissingCode,

    // upstream things
    #[error("authentication failed: {0}")]
    Exchange(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    // infra things
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("template render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::MissingCode => "MISSING_CODE",
            Self::Exchange(_) => "AUTH_FAILED",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::Endpoint(_) => "BAD_ENDPOINT",
            Self::Render(_) => "RENDER_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCode => StatusCode::BAD_REQUEST,
            Self::Exchange(_) | Self::Upstream(_) | Self::Endpoint(_) | Self::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: &self.to_string() })
    }
}
