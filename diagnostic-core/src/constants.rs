//! Central Configuration Constants
//!
//! Single source of truth for artifact names and numeric defaults.

/// Model used by `/api/predict` when the request names none
pub const DEFAULT_MODEL: &str = "logistic_regression";

/// Registered models, in registration (and listing) order
pub const MODEL_NAMES: &[&str] = &["logistic_regression", "random_forest", "gradient_boosting"];

/// Dataset metadata (feature order, target names, class counts)
pub const METADATA_FILE: &str = "metadata.json";

/// Per-feature min/max/mean/std
pub const FEATURE_STATS_FILE: &str = "feature_stats.json";

/// Optional: precomputed top features
pub const TOP_FEATURES_FILE: &str = "top_features.json";

/// Optional: full dataset table for visualization
pub const DATASET_FILE: &str = "dataset.json";

/// Number of top features derived from the linear model when
/// `top_features.json` is absent
pub const TOP_FEATURE_COUNT: usize = 10;

/// Class index of the malignant label (dataset target encoding)
pub const CLASS_MALIGNANT: u8 = 0;

/// Class index of the benign label (dataset target encoding)
pub const CLASS_BENIGN: u8 = 1;

/// Allowed deviation of `p(malignant) + p(benign)` from 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;
