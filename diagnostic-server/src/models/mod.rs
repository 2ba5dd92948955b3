//! API data models

pub mod predict;
pub mod state;

pub use predict::{MetadataResponse, PredictAllRequest, PredictRequest};
pub use state::ModelState;
