pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::ManifestConfig;
pub use crate::core::generator::ManifestGenerator;
pub use crate::domain::model::{Manifest, Repository, Requirements};
pub use crate::utils::error::{ManifestError, Result};
