//! Artifacts Module - startup loading of fitted models and dataset files

pub mod loader;
pub mod types;

pub use loader::{load_from_dir, required_files, LoadError};
pub use types::{Dataset, DatasetMetadata, LoadedArtifacts};
