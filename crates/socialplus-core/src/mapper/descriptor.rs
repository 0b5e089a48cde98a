//! Declarative wire descriptions for model types.
//!
//! A [`CompositeMapper`] lists the fields of one model together with their
//! wire names, requiredness and [`TypeDescriptor`]. Mappers are plain
//! `static` data; the serializer walks them, nothing dispatches on them.

use std::fmt;

/// Shape of a single value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// JSON string.
    String,
    /// JSON number.
    Number,
    /// JSON number without a fractional part that fits in an `i64`.
    Integer,
    /// JSON boolean.
    Boolean,
    /// RFC 3339 timestamp carried as a JSON string.
    DateTime,
    /// JSON string restricted to a closed set of literals.
    Enum(&'static [&'static str]),
    /// Nested record, resolved by class name through a [`super::Registry`].
    Composite(&'static str),
    /// Ordered sequence of values of the element type.
    Sequence(&'static TypeDescriptor),
}

impl TypeDescriptor {
    /// Class name of the composite this descriptor ultimately refers to,
    /// looking through sequences.
    #[must_use]
    pub const fn composite_target(&self) -> Option<&'static str> {
        match self {
            Self::Composite(class_name) => Some(*class_name),
            Self::Sequence(element) => element.composite_target(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Integer => f.write_str("integer"),
            Self::Boolean => f.write_str("boolean"),
            Self::DateTime => f.write_str("timestamp"),
            Self::Enum(allowed) => write!(f, "one of [{}]", allowed.join(", ")),
            Self::Composite(class_name) => write!(f, "object {class_name}"),
            Self::Sequence(element) => write!(f, "sequence of {element}"),
        }
    }
}

/// Wire description of one model property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapper {
    /// In-memory property name
    pub name: &'static str,
    /// JSON key used on the wire
    pub serialized_name: &'static str,
    /// Whether the property must be present and non-null
    pub required: bool,
    /// Expected shape of the value
    pub descriptor: TypeDescriptor,
}

impl FieldMapper {
    /// A required property whose wire name equals its property name.
    #[must_use]
    pub const fn required(name: &'static str, descriptor: TypeDescriptor) -> Self {
        Self {
            name,
            serialized_name: name,
            required: true,
            descriptor,
        }
    }

    /// An optional property whose wire name equals its property name.
    #[must_use]
    pub const fn optional(name: &'static str, descriptor: TypeDescriptor) -> Self {
        Self {
            name,
            serialized_name: name,
            required: false,
            descriptor,
        }
    }

    /// Override the wire name.
    #[must_use]
    pub const fn wire_name(mut self, serialized_name: &'static str) -> Self {
        self.serialized_name = serialized_name;
        self
    }
}

/// Wire description of a composite model type.
#[derive(Debug, PartialEq, Eq)]
pub struct CompositeMapper {
    /// Name other mappers use to reference this type
    pub class_name: &'static str,
    /// Name of the type in the API description (e.g. `FeedResponse[ActivityView]`)
    pub serialized_name: &'static str,
    /// Properties in declaration order
    pub fields: &'static [FieldMapper],
}

impl CompositeMapper {
    /// Look up a property by its in-memory name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldMapper> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Properties that must be present.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldMapper> {
        self.fields.iter().filter(|field| field.required)
    }

    /// Composite class names referenced by this mapper's fields.
    pub fn references(&self) -> impl Iterator<Item = (&FieldMapper, &'static str)> {
        self.fields
            .iter()
            .filter_map(|field| field.descriptor.composite_target().map(|target| (field, target)))
    }
}
