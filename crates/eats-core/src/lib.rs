//! Domain types and configuration shared by every Whatever Eats crate.
//!
//! The restaurant catalog, filter criteria, and filter-option types live
//! here; selection logic lives in `eats-picker` and session state in
//! `eats-session`.

mod app_config;
mod config;
pub mod filters;
pub mod options;
pub mod restaurants;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{
    distance_label, FilterCriteria, PriceRange, DEFAULT_CUISINE_TYPES, DISTANCE_OPTIONS_M,
};
pub use options::{normalize_options, FilterOption, OptionValue};
pub use restaurants::{load_catalog, Catalog, PriceLevel, Restaurant, RestaurantsFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
