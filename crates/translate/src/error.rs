#![forbid(unsafe_code)]

use fv_core::EntityType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    History,
    Snapshot,
    Log,
    Registry,
    Abstraction,
    Mashup,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Snapshot => "snapshot",
            Self::Log => "log",
            Self::Registry => "registry",
            Self::Abstraction => "abstraction",
            Self::Mashup => "mashup",
        }
    }
}

/// Fatal translation failure. Aborts the enclosing document; no partial
/// document is ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum TranslateError {
    SchemaRuleMissing {
        kind: DocumentKind,
        version: String,
    },
    IdentifierTypeMismatch {
        entity: EntityType,
        old_id: i64,
        message: &'static str,
    },
    CycleDetected {
        group_id: i64,
        depth: usize,
    },
    InvalidInput(&'static str),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SchemaRuleMissing { kind, version } => write!(
                f,
                "no schema rule for {} document version {version}",
                kind.as_str()
            ),
            Self::IdentifierTypeMismatch {
                entity,
                old_id,
                message,
            } => write!(
                f,
                "identifier mismatch on {} old_id={old_id}: {message}",
                entity.as_str()
            ),
            Self::CycleDetected { group_id, depth } => write!(
                f,
                "group nesting exceeded depth {depth} at group old_id={group_id}"
            ),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Non-fatal finding accumulated during a pass; translation of the rest of
/// the bundle continues.
#[derive(Clone, Debug, PartialEq)]
pub enum TranslateWarning {
    UnsupportedEntity { kind: DocumentKind, name: String },
    MissingDescriptor { package: String, name: String },
}

impl std::fmt::Display for TranslateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedEntity { kind, name } => {
                write!(f, "{} {name} has no translation and was left out", kind.as_str())
            }
            Self::MissingDescriptor { package, name } => {
                write!(f, "no descriptor for {package}::{name} in the catalog")
            }
        }
    }
}
