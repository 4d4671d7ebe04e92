//! Place resolution: free text to coordinates.
//!
//! Queries go to a Nominatim-compatible `/search` endpoint. Before the
//! lookup the text is normalised (known misspellings corrected) and checked
//! against a [`LocaleBiasPolicy`] that may restrict results to one country.

mod client;
mod error;
mod locale;
mod types;

pub use client::{GeocodeConfig, NominatimClient};
pub use error::ResolutionError;
pub use locale::{LocaleBias, LocaleBiasPolicy, normalize_place};
pub use types::{Candidate, select_candidate};
