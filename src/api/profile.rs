use log::info;

use crate::api::extract::{
    extract_lifetime_stats, extract_profile_image_url, extract_rank_from_api_data,
};
use crate::api::henrik::HenrikClient;
use crate::config::Config;
use crate::error::{ProfileError, ProfileResult};
use crate::model::profile::{NormalizedProfile, ProfileRequest};

/// Validates the identifier, looks the player up once, and normalizes the result.
pub async fn validate_profile(
    request: &ProfileRequest,
    config: &Config,
    client: &HenrikClient,
) -> ProfileResult<NormalizedProfile> {
    if request.name.is_empty() || request.tag.is_empty() {
        return Err(ProfileError::InvalidRequest);
    }
    let api_key = config.api_key.as_deref().ok_or(ProfileError::Configuration)?;

    info!("Looking up {}#{}", request.name, request.tag);
    let raw = client.get_mmr(api_key, &request.name, &request.tag).await?;

    let stats = extract_lifetime_stats(&raw);
    Ok(NormalizedProfile {
        rank: extract_rank_from_api_data(&raw),
        profile_photo_url: extract_profile_image_url(&raw),
        lifetime_wins: stats.lifetime_wins,
        lifetime_games_played: stats.lifetime_games_played,
    })
}
