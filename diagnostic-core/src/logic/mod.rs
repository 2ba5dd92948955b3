//! Logic Module - Inference pipeline
//!
//! ## Architecture
//! - `features/` - Feature schema, statistics and vector construction
//! - `model/` - Fitted predictor families and the immutable registry
//! - `explain/` - Explanation extraction across predictor families
//! - `predict/` - Single/multi model prediction
//! - `artifacts/` - Loading fitted artifacts at startup

pub mod features;
pub mod model;
pub mod explain;
pub mod predict;
pub mod artifacts;
