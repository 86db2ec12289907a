pub mod app_config;
pub mod config;
pub mod error;
pub mod geo;
pub mod record;
pub mod run;

pub use app_config::{AppConfig, MapSettings};
pub use config::{load_api_key, load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::{Coordinates, SearchArea};
pub use record::{bayesian_rating, format_opening_hours, PlaceCandidate, PlaceDetails, PlaceRecord};
pub use run::{Admission, CollectionRun};
