//! Network definition file schema.

use serde::{Deserialize, Serialize};

/// A network source: a named list of stations with their lines.
///
/// Several sources (e.g. one per operator) can be loaded into a single
/// model; a station may appear in more than one of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<StationDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationDef {
    pub name: String,
    pub district: String,
    pub zones: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
}

impl NetworkDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            stations: Vec::new(),
        }
    }
}

impl StationDef {
    pub fn new(name: impl Into<String>, district: impl Into<String>, zones: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            district: district.into(),
            zones,
            lines: Vec::new(),
        }
    }

    pub fn on_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }
}
