use log::error;
use serde_json::json;

use crate::api::henrik::HenrikClient;
use crate::api::profile;
use crate::config::Config;
use crate::error::ProfileError;
use crate::model::profile::ProfileRequest;
use crate::model::response::ResponseWithStatus;
use crate::util::message;

pub async fn validate_profile(
    request: ProfileRequest,
    config: &Config,
    client: &HenrikClient,
) -> ResponseWithStatus {
    match profile::validate_profile(&request, config, client).await {
        Ok(profile) => {
            let msg = message::MESSAGE_PROFILE_VALIDATED.to_string();
            ResponseWithStatus::success(msg, json!(profile))
        }
        Err(err) => {
            match &err {
                ProfileError::InvalidRequest | ProfileError::NotFound => {},
                _ => error!("validate-profile {}#{} failed: {}", request.name, request.tag, err),
            }
            ResponseWithStatus::failure(err.status(), err.public_message())
        }
    }
}
