//! Geographic primitives for nearby-search queries.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// A WGS84 point. The external API and the map renderer both take it as
/// `lat,lng`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds a point, rejecting values outside the valid latitude/longitude ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCoordinates`] if either component is out
    /// of range or not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ConfigError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ConfigError::InvalidCoordinates {
                input: format!("{lat},{lng}"),
                reason: "latitude must be within [-90, 90]".to_owned(),
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ConfigError::InvalidCoordinates {
                input: format!("{lat},{lng}"),
                reason: "longitude must be within [-180, 180]".to_owned(),
            });
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidCoordinates {
            input: s.to_owned(),
            reason: reason.to_owned(),
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"lat,lng\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("latitude is not a number"))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("longitude is not a number"))?;

        Self::new(lat, lng)
    }
}

/// Center and radius shared by every nearby-search request of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub center: Coordinates,
    pub radius_m: u32,
}
