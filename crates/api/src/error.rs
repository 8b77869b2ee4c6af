use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const MISSING_QUERY: &str = "Query é obrigatória";
pub const PROCESSING_FAILED: &str = "Erro ao processar consulta";

/// Failures a handler can turn into an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// `query` absent, empty, or not a string. The provider was not called.
    MissingQuery,
    /// The completion call failed or returned something unusable.
    Provider(anyhow::Error),
}

#[derive(Serialize)]
struct ValidationBody {
    error: &'static str,
}

#[derive(Serialize)]
struct ProviderBody {
    error: &'static str,
    message: String,
    details: String,
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Provider(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    error: MISSING_QUERY,
                }),
            )
                .into_response(),
            ApiError::Provider(err) => {
                let details = format!("{:#}", err);
                tracing::error!(error = %details, "Failed to process query");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProviderBody {
                        error: PROCESSING_FAILED,
                        message: err.root_cause().to_string(),
                        details,
                    }),
                )
                    .into_response()
            }
        }
    }
}
