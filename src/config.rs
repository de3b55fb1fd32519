//! Loading the JSON training config that carries the `pretrain` field.
//!
//! Only the `pretrain` key is read. Every other key in the document is
//! ignored, but the document itself must be a JSON object.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PretrainError;
use crate::pretrain::{parse_pretrain, PretrainReference};

/// Config key holding the pretrain path.
pub const PRETRAIN_KEY: &str = "pretrain";

/// The part of a training config this tool cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PretrainConfig {
    /// Raw pretrain path; empty when the key is missing.
    pub pretrain: String,
}

impl TryFrom<Map<String, Value>> for PretrainConfig {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        // A present key must hold a string; null is not treated as missing.
        let pretrain = map
            .remove(PRETRAIN_KEY)
            .map(serde_json::from_value::<String>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self { pretrain })
    }
}

impl PretrainConfig {
    /// Parses the configured pretrain path.
    ///
    /// # Errors
    /// Returns [`PretrainError::InvalidPath`] if the path is malformed.
    pub fn pretrain_reference(&self) -> Result<Option<PretrainReference>, PretrainError> {
        parse_pretrain(&self.pretrain)
    }
}

/// Reads a config from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not a JSON object
/// with an optional string `pretrain` field.
pub fn read_config(path: &Path) -> Result<PretrainConfig, PretrainError> {
    let file = File::open(path).map_err(|source| PretrainError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| PretrainError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a config from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<PretrainConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a config from raw JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<PretrainConfig, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Reads the config at `path` and parses its pretrain reference.
///
/// Returns `Ok(None)` when no pretrain is configured.
#[tracing::instrument(level = "debug")]
pub fn load_pretrain(path: &Path) -> Result<Option<PretrainReference>, PretrainError> {
    let config = read_config(path)?;
    tracing::debug!(pretrain = %config.pretrain, "loaded config");

    let reference = config.pretrain_reference()?;
    if reference.is_none() {
        tracing::debug!("no pretrain configured");
    }

    Ok(reference)
}
