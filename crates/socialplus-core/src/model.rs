//! Typed access to the wire mapping.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::mapper::{CompositeMapper, MappingError, Serializer, TypeDescriptor};

/// A record type with a registered wire mapper.
///
/// `to_wire` serializes through serde and then validates the result against
/// the mapper. `from_wire` validates first, so a bad payload is reported with
/// its field path rather than as a serde error.
pub trait Model: Serialize + DeserializeOwned {
    /// The mapper describing this type.
    fn mapper() -> &'static CompositeMapper;

    /// Descriptor referencing this type by class name.
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Composite(Self::mapper().class_name)
    }

    /// Convert to validated wire JSON.
    fn to_wire(&self) -> Result<Value, MappingError> {
        let raw = serde_json::to_value(self)?;
        Ok(Serializer::default().serialize_composite(Self::mapper(), &raw)?)
    }

    /// Build from decoded wire JSON, validating it first.
    fn from_wire(wire: &Value) -> Result<Self, MappingError> {
        let mapped = Serializer::default().deserialize_composite(Self::mapper(), wire)?;
        Ok(serde_json::from_value(mapped)?)
    }
}

/// Encode any serializable value against an explicit descriptor.
pub fn encode_as<T: Serialize>(descriptor: &TypeDescriptor, value: &T) -> Result<Value, MappingError> {
    let raw = serde_json::to_value(value)?;
    Ok(Serializer::default().serialize(descriptor, &raw)?)
}

/// Decode wire JSON against an explicit descriptor, e.g. a sequence of models.
pub fn decode_as<T: DeserializeOwned>(
    descriptor: &TypeDescriptor,
    wire: &Value,
) -> Result<T, MappingError> {
    let mapped = Serializer::default().deserialize(descriptor, wire)?;
    Ok(serde_json::from_value(mapped)?)
}
