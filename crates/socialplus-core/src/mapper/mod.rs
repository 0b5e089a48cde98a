//! Declarative wire mapping for model types.
//!
//! Every model is described by a [`CompositeMapper`]: its fields, their wire
//! names, requiredness and [`TypeDescriptor`]. A [`Serializer`] walks those
//! descriptions to validate and convert values in either direction, reporting
//! the first violation as a [`ValidationError`] with the offending field path.

mod descriptor;
mod error;
mod registry;
mod serializer;

pub use descriptor::{CompositeMapper, FieldMapper, TypeDescriptor};
pub use error::{MappingError, RegistryError, ValidationError};
pub use registry::Registry;
pub use serializer::{Serializer, parse_timestamp};
