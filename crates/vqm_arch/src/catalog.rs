//! In-memory architecture catalog with by-name lookup.

use serde::{Deserialize, Serialize};

/// One primitive model from the architecture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchModel {
    /// The model name, e.g. `stratixiv_ram_block.opmode{single_port}.port_a_address_width{7}`.
    pub name: String,
    /// Input port names, carried through for the emitter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    /// Output port names, carried through for the emitter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}

impl ArchModel {
    /// Creates a model with no port lists.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// An insertion-ordered sequence of architecture models.
///
/// Lookup is a linear scan by exact name; catalogs are small and lookups
/// happen once per instance, not per bit. Duplicate names are tolerated and
/// the first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    models: Vec<ArchModel>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from models in the given order.
    pub fn from_models(models: Vec<ArchModel>) -> Self {
        Self { models }
    }

    /// Creates a catalog of bare models from a list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: names.into_iter().map(ArchModel::new).collect(),
        }
    }

    /// Appends a model.
    pub fn push(&mut self, model: ArchModel) {
        self.models.push(model);
    }

    /// Returns the first model whose name equals `name` exactly.
    pub fn find_model(&self, name: &str) -> Option<&ArchModel> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Returns `true` if a model named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find_model(name).is_some()
    }

    /// Returns the number of models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the catalog has no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterates over the models in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchModel> {
        self.models.iter()
    }
}
