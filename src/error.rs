use thiserror::Error;

use crate::model::response::ApiStatus;
use crate::util::message;

pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Missing valorantName or valorantTag")]
    InvalidRequest,

    #[error("Valorant API key not configured")]
    Configuration,

    #[error("Player not found. Please check your Valorant name and tag.")]
    NotFound,

    #[error("Valorant API returned status {0}")]
    Upstream(u16),

    #[error("Valorant API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    pub fn status(&self) -> ApiStatus {
        match self {
            ProfileError::InvalidRequest => ApiStatus::BadRequest,
            ProfileError::NotFound => ApiStatus::NotFound,
            ProfileError::Upstream(_) | ProfileError::Transport(_) => ApiStatus::BadGateway,
            ProfileError::Configuration | ProfileError::Internal(_) => {
                ApiStatus::InternalServerError
            }
        }
    }

    /// Message safe to send to the caller. Transport and internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ProfileError::Transport(_) => message::MESSAGE_UPSTREAM_UNAVAILABLE.to_string(),
            ProfileError::Internal(_) => message::MESSAGE_INTERNAL_SERVER_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}
