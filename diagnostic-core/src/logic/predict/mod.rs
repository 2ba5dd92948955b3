//! Predict Module - single and multi model prediction

pub mod result;
pub mod single;
pub mod multi;
pub mod engine;

pub use result::{ClassProbabilities, PredictionResult};
pub use single::predict_one;
pub use multi::predict_all;
pub use engine::InferenceEngine;
