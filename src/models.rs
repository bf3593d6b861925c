use serde::{Deserialize, Serialize};

/// One declared dependency found in a manifest.
///
/// Field order is the CSV column order: `ecosystem,package,version,file`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub ecosystem: Ecosystem,
    /// Ecosystem-specific name, e.g. `serde` or `org.slf4j:slf4j-api`.
    pub package: String,
    /// Raw version specifier as written in the manifest, `*` when absent.
    pub version: String,
    /// Manifest path relative to the scan root.
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Npm,
    Pip,
    Go,
    Gem,
    Cargo,
    Maven,
    Gradle,
    Composer,
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Npm => write!(f, "npm"),
            Ecosystem::Pip => write!(f, "pip"),
            Ecosystem::Go => write!(f, "go"),
            Ecosystem::Gem => write!(f, "gem"),
            Ecosystem::Cargo => write!(f, "cargo"),
            Ecosystem::Maven => write!(f, "maven"),
            Ecosystem::Gradle => write!(f, "gradle"),
            Ecosystem::Composer => write!(f, "composer"),
        }
    }
}
