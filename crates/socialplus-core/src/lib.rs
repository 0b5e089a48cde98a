#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod blob;
pub mod mapper;
pub mod models;

mod model;

// ============================================================================
// Public API
// ============================================================================

pub use blob::{BlobHandle, ImageSize};
pub use mapper::{MappingError, Registry, Serializer, TypeDescriptor, ValidationError};
pub use model::{Model, decode_as, encode_as};
pub use models::*;
