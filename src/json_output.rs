//! JSON output format for definition introspection
//!
//! Mirror structs with stable field order so tooling can diff dumps
//! across runs. Members are emitted through a `BTreeMap`, sorted by
//! short name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::namespace::Namespace;
use crate::registry::Definitions;

/// Ordered list of every publicly exposed name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonManifest {
    /// Names in registration order, ad-hoc namespaces last
    pub exports: Vec<String>,
}

/// One enumeration category binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRegistryEntry {
    /// Public name the category is registered under
    pub name: String,
    /// Native category handle
    pub kind: String,
}

/// A published namespace and its members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonNamespace {
    /// Public name of the namespace
    pub name: String,
    /// Type filter recorded at construction (absent when unfiltered)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Short name to value bindings, sorted by name
    pub members: BTreeMap<String, u64>,
}

impl JsonManifest {
    /// Capture the export manifest of a definition set
    pub fn from_definitions(definitions: &Definitions) -> Self {
        Self {
            exports: definitions
                .export_manifest()
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

impl JsonRegistryEntry {
    /// Capture every registry binding, in registration order
    pub fn from_definitions(definitions: &Definitions) -> Vec<Self> {
        definitions
            .registry()
            .iter()
            .map(|(name, kind)| Self {
                name: name.to_string(),
                kind: format!("{kind:?}"),
            })
            .collect()
    }
}

impl JsonNamespace {
    /// Capture a namespace under its public name
    pub fn new(name: &str, namespace: &Namespace) -> Self {
        Self {
            name: name.to_string(),
            filter: namespace.type_filter().map(|tag| tag.as_str().to_string()),
            members: namespace
                .iter()
                .map(|(short, value)| (short.to_string(), value))
                .collect(),
        }
    }
}
