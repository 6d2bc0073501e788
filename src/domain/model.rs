use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MANIFEST_NAME: &str = "rubedo/extensions";
pub const MINIMUM_STABILITY: &str = "dev";
pub const PROCESS_TIMEOUT: u64 = 600;
pub const VENDOR_DIR: &str = "extensions";

/// Package name to version constraint, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements(IndexMap<String, String>);

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later values win; the key keeps its original position.
    pub fn insert(&mut self, name: String, constraint: String) {
        self.0.insert(name, constraint);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn items(&self) -> &IndexMap<String, String> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Requirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, constraint)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", name, constraint)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub r#type: String,
    pub url: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.r#type, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSettings {
    #[serde(rename = "process-timeout")]
    pub process_timeout: u64,
    #[serde(rename = "vendor-dir")]
    pub vendor_dir: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            process_timeout: PROCESS_TIMEOUT,
            vendor_dir: VENDOR_DIR.to_string(),
        }
    }
}

/// The emitted document. Field order here is the key order on the wire.
///
/// `require` and `repositories` are `None` when their input string was empty
/// and serialize as `null`, which is distinct from an empty container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub require: Option<Requirements>,
    #[serde(rename = "require-dev")]
    pub require_dev: IndexMap<String, String>,
    pub repositories: Option<Vec<Repository>>,
    #[serde(rename = "minimum-stability")]
    pub minimum_stability: String,
    pub config: ManifestSettings,
}

impl Manifest {
    pub fn new(require: Option<Requirements>, repositories: Option<Vec<Repository>>) -> Self {
        Self {
            name: MANIFEST_NAME.to_string(),
            require,
            require_dev: IndexMap::new(),
            repositories,
            minimum_stability: MINIMUM_STABILITY.to_string(),
            config: ManifestSettings::default(),
        }
    }
}
