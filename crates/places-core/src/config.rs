use std::path::{Path, PathBuf};

use crate::app_config::{AppConfig, MapSettings};
use crate::geo::{Coordinates, SearchArea};
use crate::ConfigError;

const DEFAULT_LOCATION: &str = "50.061947,19.936856";
const DEFAULT_KEYWORDS: &str = "restaurant,food,bar,coffee,point_of_interest";

/// Load collector configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; the defaults reproduce the stock Kraków run.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from environment variables already in the process,
/// without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Read the API key from a plaintext file, trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`ConfigError::ApiKeyFileIo`] if the file cannot be read and
/// [`ConfigError::EmptyApiKey`] if it contains only whitespace.
pub fn load_api_key(path: &Path) -> Result<String, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ApiKeyFileIo {
        path: path.to_path_buf(),
        source: e,
    })?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyApiKey(path.to_path_buf()));
    }
    Ok(key.to_owned())
}

/// Build configuration using the provided env-var lookup function, so the
/// parsing rules can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        or_default(var, default)
            .parse::<u8>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_coordinates = |var: &str, default: &str| -> Result<Coordinates, ConfigError> {
        or_default(var, default)
            .parse::<Coordinates>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let api_key_path = PathBuf::from(or_default("PLACES_API_KEY_PATH", "api_key.txt"));
    let api_base_url = or_default(
        "PLACES_API_BASE_URL",
        "https://maps.googleapis.com/maps/api/place/",
    );

    let center = parse_coordinates("PLACES_LOCATION", DEFAULT_LOCATION)?;
    let radius_m = parse_u32("PLACES_RADIUS_M", "2000")?;
    if radius_m == 0 {
        return Err(invalid("PLACES_RADIUS_M", "radius must be positive".to_owned()));
    }

    let keywords = parse_keywords(&or_default("PLACES_KEYWORDS", DEFAULT_KEYWORDS));
    if keywords.is_empty() {
        return Err(invalid(
            "PLACES_KEYWORDS",
            "at least one keyword is required".to_owned(),
        ));
    }

    let min_rating = parse_min_rating(&or_default("PLACES_MIN_RATING", "4.5"))
        .map_err(|reason| invalid("PLACES_MIN_RATING", reason))?;

    let min_reviews = parse_u32("PLACES_MIN_REVIEWS", "0")?;
    let bayes_prior_reviews = parse_u32("PLACES_BAYES_PRIOR_REVIEWS", "50")?;
    let limit = match lookup("PLACES_LIMIT") {
        Ok(raw) => Some(parse_limit(&raw).map_err(|reason| invalid("PLACES_LIMIT", reason))?),
        Err(_) => None,
    };

    let page_delay_ms = parse_u64("PLACES_PAGE_DELAY_MS", "1000")?;
    let output_path = PathBuf::from(or_default("PLACES_OUTPUT_PATH", "places_krakow.csv"));
    let request_timeout_secs = parse_u64("PLACES_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACES_USER_AGENT", "places-collector/0.1");
    let log_level = or_default("PLACES_LOG_LEVEL", "info");

    let map = MapSettings {
        center: parse_coordinates("PLACES_MAP_CENTER", DEFAULT_LOCATION)?,
        zoom: parse_u8("PLACES_MAP_ZOOM", "13")?,
        output_path: PathBuf::from(or_default("PLACES_MAP_OUTPUT_PATH", "interactive_map.html")),
        export_filename: or_default("PLACES_DRAW_EXPORT_FILENAME", "area.geojson"),
    };

    Ok(AppConfig {
        api_key_path,
        api_base_url,
        area: SearchArea { center, radius_m },
        keywords,
        min_rating,
        min_reviews,
        bayes_prior_reviews,
        limit,
        page_delay_ms,
        output_path,
        request_timeout_secs,
        user_agent,
        log_level,
        map,
    })
}

/// Split a comma-separated keyword list, dropping blanks.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a minimum rating on the service's 0–5 scale.
///
/// # Errors
///
/// Returns a human-readable reason if `raw` is not a number in `[0, 5]`.
pub fn parse_min_rating(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !(0.0..=5.0).contains(&value) {
        return Err(format!("rating {value} is outside [0, 5]"));
    }
    Ok(value)
}

/// Parse a maximum record count; zero is rejected.
///
/// # Errors
///
/// Returns a human-readable reason if `raw` is not a positive integer.
pub fn parse_limit(raw: &str) -> Result<usize, String> {
    let value = raw.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if value == 0 {
        return Err("limit must be positive".to_owned());
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
