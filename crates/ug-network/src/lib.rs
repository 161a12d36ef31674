//! ug-network: network definition files and model population.
//!
//! A network definition lists stations with their district, zones and
//! lines. Definitions are read from YAML or JSON and applied to a
//! [`ug_model::Model`] through its ordinary mutation calls, so every model
//! invariant holds while loading.

pub mod loader;
pub mod schema;
pub mod validate;

pub use loader::{MergePolicy, NetworkLoader, build_model};
pub use schema::*;
pub use validate::{ValidationError, validate_network};

use ug_model::{ErrorKind, Model, ModelError};

pub const LATEST_VERSION: u32 = 1;

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Station '{name}' is in district '{existing}' but a later source puts it in '{incoming}'")]
    ConflictingStation {
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    /// The model error kind behind this failure, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            NetworkError::Model(e) => Some(e.kind()),
            NetworkError::ConflictingStation { .. } => Some(ErrorKind::DuplicateEntity),
            NetworkError::Validation(_) => Some(ErrorKind::InvalidArgument),
            NetworkError::Io(_) | NetworkError::Yaml(_) | NetworkError::Json(_) => None,
        }
    }
}

pub fn from_yaml_str(content: &str) -> NetworkResult<NetworkDef> {
    let network: NetworkDef = serde_yaml::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn from_json_str(content: &str) -> NetworkResult<NetworkDef> {
    let network: NetworkDef = serde_json::from_str(content)?;
    validate_network(&network)?;
    Ok(network)
}

pub fn load_yaml(path: &std::path::Path) -> NetworkResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, network: &NetworkDef) -> NetworkResult<()> {
    validate_network(network)?;
    let content = serde_yaml::to_string(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> NetworkResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &std::path::Path, network: &NetworkDef) -> NetworkResult<()> {
    validate_network(network)?;
    let content = serde_json::to_string_pretty(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load each file (YAML or JSON by extension) and build one model.
pub fn load_model(paths: &[&std::path::Path], policy: MergePolicy) -> NetworkResult<Model> {
    let mut loader = NetworkLoader::new(policy);
    for path in paths {
        let network = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => load_json(path)?,
            _ => load_yaml(path)?,
        };
        loader.apply(&network)?;
    }
    loader.finish()
}
