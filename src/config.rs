use std::{
    fs,
    path::{Path, PathBuf},
};

use fractic_server_error::ServerError;

use crate::errors::{InvalidConfig, ReadError};

pub const DEFAULT_DATA_PATH: &str = "absences.csv";

/// Dashboard settings. Every field is optional in the RON file.
///
/// ```ron
/// (data_path: "absences.csv")
/// ```
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Absence store location, relative to the working directory unless
    /// absolute.
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        Self::from_ron(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
