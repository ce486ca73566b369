use std::path::PathBuf;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompanionError>;

#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid problem url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("No language is registered for {0}")]
    UnsupportedLanguage(String),

    #[error("Submitting to {0} is not supported")]
    UnsupportedJudge(String),

    #[error("No stored problem for {}", .0.display())]
    ProblemNotFound(PathBuf),

    #[error("Please ensure .kattisrc and submit.py are present in {}", .0.display())]
    MissingKattisFiles(PathBuf),

    #[error("Editor failed to open {}: {reason}", .path.display())]
    Editor { path: PathBuf, reason: String },
}

impl CompanionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompanionError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ResponseError for CompanionError {
    fn status_code(&self) -> StatusCode {
        match self {
            CompanionError::Json(_)
            | CompanionError::InvalidUrl { .. }
            | CompanionError::UnsupportedLanguage(_)
            | CompanionError::UnsupportedJudge(_) => StatusCode::BAD_REQUEST,
            CompanionError::ProblemNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
