pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use source::PlaceSource;
pub use types::SearchPage;
