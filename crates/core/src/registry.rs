#![forbid(unsafe_code)]

/// Catalog of entity descriptors. Its id namespace is independent and never
/// shares remap state with the other document kinds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistryDocument {
    pub version: String,
    pub descriptors: Vec<Descriptor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor {
    pub id: i64,
    pub package: String,
    pub name: String,
    pub namespace: Option<String>,
}
