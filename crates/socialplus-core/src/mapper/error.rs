//! Errors produced while mapping values against their wire descriptions.

use thiserror::Error;

/// Render an empty path as the document root.
fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

/// A value did not match its declared wire description.
///
/// Every variant carries the path of the offending field, e.g.
/// `actorUsers[1].visibility`. The root value has an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("required field '{}' is missing or null", display_path(.path))]
    MissingRequired {
        /// Path of the missing field
        path: String,
    },

    /// A value has the wrong JSON kind.
    #[error("field '{}' expected {expected}, found {found}", display_path(.path))]
    TypeMismatch {
        /// Path of the mistyped field
        path: String,
        /// Description of the declared type
        expected: String,
        /// JSON kind actually found
        found: &'static str,
    },

    /// An enum field holds a literal outside its allowed set.
    #[error(
        "field '{}' has value '{value}' which is not one of [{}]",
        display_path(.path),
        .allowed.join(", ")
    )]
    InvalidEnumValue {
        /// Path of the enum field
        path: String,
        /// The rejected value
        value: String,
        /// Literals the field accepts
        allowed: &'static [&'static str],
    },

    /// A timestamp field holds a string that is not a timestamp.
    #[error("field '{}' has value '{value}' which is not a valid timestamp", display_path(.path))]
    InvalidTimestamp {
        /// Path of the timestamp field
        path: String,
        /// The rejected value
        value: String,
    },

    /// A composite reference names a type the registry does not know.
    #[error("field '{}' references unknown type '{class_name}'", display_path(.path))]
    UnknownType {
        /// Path of the field holding the reference
        path: String,
        /// The unresolved class name
        class_name: String,
    },
}

impl ValidationError {
    /// Path of the field that failed validation.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequired { path }
            | Self::TypeMismatch { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::InvalidTimestamp { path, .. }
            | Self::UnknownType { path, .. } => path,
        }
    }
}

/// Failure converting between a typed model and its wire form.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The value broke its mapper's rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The validated JSON could not be converted to or from the Rust type.
    #[error("JSON mapping error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MappingError {
    /// The validation failure, if this is one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Json(_) => None,
        }
    }
}

/// Inconsistency found while checking a mapper registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two mappers share a class name.
    #[error("class '{class_name}' is registered more than once")]
    DuplicateClass {
        /// The repeated class name
        class_name: &'static str,
    },

    /// Two fields of one mapper share a wire name.
    #[error("class '{class_name}' uses wire name '{wire_name}' more than once")]
    DuplicateWireName {
        /// Mapper with the collision
        class_name: &'static str,
        /// The repeated wire name
        wire_name: &'static str,
    },

    /// A field references a class that is not registered.
    #[error("field '{class_name}.{field}' references unregistered class '{target}'")]
    UnresolvedReference {
        /// Mapper holding the reference
        class_name: &'static str,
        /// Field holding the reference
        field: &'static str,
        /// The missing class
        target: &'static str,
    },

    /// Composite references form a cycle.
    #[error("composite references form a cycle: {}", .path.join(" -> "))]
    Cycle {
        /// Class names along the cycle, first repeated at the end
        path: Vec<&'static str>,
    },
}
