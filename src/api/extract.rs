//! Tolerant field lookup over the HenrikDev MMR payload.
//!
//! The upstream has shipped several response shapes over time (fields at the
//! top level, under `current_data`, or wrapped in `data`). Each extractor walks
//! an ordered list of JSON pointers and takes the first usable value. None of
//! them fail: missing or mistyped input gives `None` or zero totals.

use serde_json::{Map, Value};

use crate::model::profile::{LifetimeStats, SeasonRecord};

const IMAGE_PATHS: &[&str] = &[
    "/card/small",
    "/card/large",
    "/current_data/images/small",
    "/current_data/images/large",
    "/images/small",
    "/images/large",
    "/data/card/small",
    "/data/card/large",
    "/data/current_data/images/small",
    "/data/current_data/images/large",
    "/data/images/small",
    "/data/images/large",
];

const RANK_PATHS: &[&str] = &[
    "/current_data/currenttierpatched",
    "/currenttierpatched",
    "/data/current_data/currenttierpatched",
    "/data/currenttierpatched",
];

const SEASON_PATHS: &[&str] = &["/by_season", "/data/by_season"];

fn first_match<'a, T>(
    raw: &'a Value,
    paths: &[&str],
    accept: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .filter_map(|path| raw.pointer(path))
        .find_map(accept)
}

pub fn extract_profile_image_url(raw: &Value) -> Option<String> {
    first_match(raw, IMAGE_PATHS, |v| {
        v.as_str()
            .filter(|url| url.starts_with("http"))
            .map(str::to_string)
    })
}

pub fn extract_rank_from_api_data(raw: &Value) -> Option<String> {
    first_match(raw, RANK_PATHS, |v| v.as_str().map(str::to_string))
}

fn by_season(raw: &Value) -> Option<&Map<String, Value>> {
    first_match(raw, SEASON_PATHS, Value::as_object)
}

/// Lenient integer coercion: truncates floats, reads the leading digits of a
/// string, and maps anything negative or unreadable to 0.
fn coerce_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim_start();
            let s = s.strip_prefix('+').unwrap_or(s);
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            s[..end].parse::<u64>().unwrap_or(0)
        }
        _ => 0,
    }
}

fn season_error(entry: &Value) -> Option<String> {
    match entry.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Per-season tallies ordered by season key. Seasons whose entry is not an
/// object are skipped.
pub fn season_records(raw: &Value) -> Vec<SeasonRecord> {
    let Some(seasons) = by_season(raw) else {
        return Vec::new();
    };

    seasons
        .iter()
        .filter(|(_, entry)| entry.is_object())
        .map(|(season, entry)| SeasonRecord {
            season: season.clone(),
            wins: coerce_count(entry.get("wins")),
            number_of_games: coerce_count(entry.get("number_of_games")),
            error: season_error(entry),
        })
        .collect()
}

pub fn extract_lifetime_stats(raw: &Value) -> LifetimeStats {
    season_records(raw)
        .iter()
        .filter(|record| record.error.is_none())
        .fold(LifetimeStats::default(), |acc, record| LifetimeStats {
            lifetime_wins: acc.lifetime_wins.saturating_add(record.wins),
            lifetime_games_played: acc
                .lifetime_games_played
                .saturating_add(record.number_of_games),
        })
}
