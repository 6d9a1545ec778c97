use rocket::serde::{Deserialize, Serialize};
use rocket::FromForm;

/// Wire body of `POST /validate-profile`, as JSON or a urlencoded form.
/// Either field may be missing.
#[derive(Deserialize, Serialize, FromForm, Debug, Default, Clone)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ValidateProfileBody {
    #[serde(default)]
    #[field(name = "valorantName")]
    pub valorant_name: Option<String>,
    #[serde(default)]
    #[field(name = "valorantTag")]
    pub valorant_tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub name: String,
    pub tag: String,
}

impl From<ValidateProfileBody> for ProfileRequest {
    fn from(body: ValidateProfileBody) -> Self {
        ProfileRequest {
            name: body.valorant_name.unwrap_or_default(),
            tag: body.valorant_tag.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub rank: Option<String>,
    pub profile_photo_url: Option<String>,
    pub lifetime_wins: u64,
    pub lifetime_games_played: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct SeasonRecord {
    pub season: String,
    pub wins: u64,
    pub number_of_games: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct LifetimeStats {
    pub lifetime_wins: u64,
    pub lifetime_games_played: u64,
}
