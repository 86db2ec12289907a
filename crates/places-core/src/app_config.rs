use std::path::PathBuf;

use crate::geo::{Coordinates, SearchArea};

/// Settings for the collector and the map renderer.
///
/// The API key is deliberately not part of this struct; it is read from
/// `api_key_path` by [`crate::load_api_key`] only when a collection starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key_path: PathBuf,
    pub api_base_url: String,
    pub area: SearchArea,
    pub keywords: Vec<String>,
    pub min_rating: f64,
    /// Places with fewer reviews than this are not admitted.
    pub min_reviews: u32,
    /// Prior weight, in reviews, of the Bayesian rating column.
    pub bayes_prior_reviews: u32,
    /// Stop the run once this many places have been admitted.
    pub limit: Option<usize>,
    pub page_delay_ms: u64,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub map: MapSettings,
}

/// Inputs for the standalone map renderer.
#[derive(Debug, Clone)]
pub struct MapSettings {
    pub center: Coordinates,
    pub zoom: u8,
    pub output_path: PathBuf,
    /// Filename offered by the draw control's GeoJSON export button.
    pub export_filename: String,
}
