#![forbid(unsafe_code)]

/// Lookup into the entity-descriptor catalog. The real catalog lives with
/// the execution engine; translation only asks whether an upgraded entity
/// still exists and reports absences as warnings.
pub trait DescriptorCatalog {
    fn has_descriptor(&self, package: &str, name: &str) -> bool;
}

/// Catalog that accepts every descriptor. Stands in when no catalog is
/// wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenCatalog;

impl DescriptorCatalog for OpenCatalog {
    fn has_descriptor(&self, _package: &str, _name: &str) -> bool {
        true
    }
}
