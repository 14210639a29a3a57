#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub version: String,
    #[serde(default)]
    pub descriptors: Vec<Descriptor>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Descriptor {
    pub id: i64,
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}
