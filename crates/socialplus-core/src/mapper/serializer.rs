//! Schema-driven conversion between in-memory JSON values and wire JSON.
//!
//! Both directions walk the same [`TypeDescriptor`] tree and apply the same
//! checks; they differ only in which key (property name or wire name) a
//! composite field is read from and written to.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use super::descriptor::{CompositeMapper, TypeDescriptor};
use super::error::ValidationError;
use super::registry::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Property names in, wire names out
    Serialize,
    /// Wire names in, property names out
    Deserialize,
}

/// Validating converter parameterized by a mapper registry.
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'r> {
    registry: &'r Registry,
}

impl Default for Serializer<'static> {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl<'r> Serializer<'r> {
    /// Create a serializer that resolves composites through `registry`.
    #[must_use]
    pub const fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Convert an in-memory value to its wire form.
    pub fn serialize(
        &self,
        descriptor: &TypeDescriptor,
        value: &Value,
    ) -> Result<Value, ValidationError> {
        self.map_value(descriptor, value, "", Direction::Serialize)
    }

    /// Convert a decoded wire value to its in-memory form.
    pub fn deserialize(
        &self,
        descriptor: &TypeDescriptor,
        value: &Value,
    ) -> Result<Value, ValidationError> {
        self.map_value(descriptor, value, "", Direction::Deserialize)
    }

    /// Serialize against a mapper directly, without a registry lookup for the root.
    pub fn serialize_composite(
        &self,
        mapper: &CompositeMapper,
        value: &Value,
    ) -> Result<Value, ValidationError> {
        self.map_composite(mapper, value, "", Direction::Serialize)
    }

    /// Deserialize against a mapper directly, without a registry lookup for the root.
    pub fn deserialize_composite(
        &self,
        mapper: &CompositeMapper,
        value: &Value,
    ) -> Result<Value, ValidationError> {
        self.map_composite(mapper, value, "", Direction::Deserialize)
    }

    fn map_value(
        &self,
        descriptor: &TypeDescriptor,
        value: &Value,
        path: &str,
        direction: Direction,
    ) -> Result<Value, ValidationError> {
        match (descriptor, value) {
            (TypeDescriptor::String, Value::String(_))
            | (TypeDescriptor::Number, Value::Number(_))
            | (TypeDescriptor::Boolean, Value::Bool(_)) => Ok(value.clone()),

            (TypeDescriptor::Integer, Value::Number(number)) if number.is_i64() => {
                Ok(value.clone())
            }

            (TypeDescriptor::DateTime, Value::String(raw)) => normalize_timestamp(raw)
                .map(Value::String)
                .ok_or_else(|| ValidationError::InvalidTimestamp {
                    path: path.to_string(),
                    value: raw.clone(),
                }),

            (TypeDescriptor::Enum(allowed), Value::String(raw)) => allowed
                .iter()
                .find(|literal| literal.eq_ignore_ascii_case(raw))
                .map(|literal| Value::String((*literal).to_string()))
                .ok_or_else(|| ValidationError::InvalidEnumValue {
                    path: path.to_string(),
                    value: raw.clone(),
                    allowed: *allowed,
                }),

            (TypeDescriptor::Composite(class_name), _) => {
                let mapper = self.registry.lookup(class_name).ok_or_else(|| {
                    ValidationError::UnknownType {
                        path: path.to_string(),
                        class_name: (*class_name).to_string(),
                    }
                })?;
                self.map_composite(mapper, value, path, direction)
            }

            (TypeDescriptor::Sequence(element), Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    self.map_value(element, item, &format!("{path}[{index}]"), direction)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),

            (expected, found) => Err(mismatch(path, expected, found)),
        }
    }

    fn map_composite(
        &self,
        mapper: &CompositeMapper,
        value: &Value,
        path: &str,
        direction: Direction,
    ) -> Result<Value, ValidationError> {
        let Value::Object(source) = value else {
            return Err(mismatch(
                path,
                &TypeDescriptor::Composite(mapper.class_name),
                value,
            ));
        };

        let mut target = Map::new();
        for field in mapper.fields {
            let (read_key, write_key) = match direction {
                Direction::Serialize => (field.name, field.serialized_name),
                Direction::Deserialize => (field.serialized_name, field.name),
            };
            let field_path = if path.is_empty() {
                field.name.to_string()
            } else {
                format!("{path}.{}", field.name)
            };

            match source.get(read_key) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(ValidationError::MissingRequired { path: field_path });
                    }
                }
                Some(raw) => {
                    let mapped = self.map_value(&field.descriptor, raw, &field_path, direction)?;
                    target.insert(write_key.to_string(), mapped);
                }
            }
        }

        Ok(Value::Object(target))
    }
}

fn mismatch(path: &str, expected: &TypeDescriptor, found: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        found: json_kind(found),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an RFC 3339 timestamp; a timestamp without an offset is taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn normalize_timestamp(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|parsed| parsed.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::descriptor::FieldMapper;
    use serde_json::json;

    static USER: CompositeMapper = CompositeMapper {
        class_name: "User",
        serialized_name: "User",
        fields: &[
            FieldMapper::required("userHandle", TypeDescriptor::String),
            FieldMapper::optional("visibility", TypeDescriptor::Enum(&["Public", "Private"])),
        ],
    };

    static POST: CompositeMapper = CompositeMapper {
        class_name: "Post",
        serialized_name: "Post",
        fields: &[
            FieldMapper::required("postHandle", TypeDescriptor::String).wire_name("handle"),
            FieldMapper::required("createdTime", TypeDescriptor::DateTime),
            FieldMapper::required(
                "likers",
                TypeDescriptor::Sequence(&TypeDescriptor::Composite("User")),
            ),
            FieldMapper::optional("author", TypeDescriptor::Composite("User")),
            FieldMapper::optional("score", TypeDescriptor::Number),
            FieldMapper::optional("views", TypeDescriptor::Integer),
            FieldMapper::optional("pinned", TypeDescriptor::Boolean),
        ],
    };

    static REGISTRY: Registry = Registry::new(&[&USER, &POST]);

    const POST_TYPE: TypeDescriptor = TypeDescriptor::Composite("Post");

    fn serializer() -> Serializer<'static> {
        Serializer::new(&REGISTRY)
    }

    fn post() -> Value {
        json!({
            "postHandle": "p1",
            "createdTime": "2016-10-19T12:00:00Z",
            "likers": [{"userHandle": "u1"}, {"userHandle": "u2", "visibility": "Private"}],
        })
    }

    #[test]
    fn test_serialize_renames_to_wire_names() {
        let wire = serializer().serialize(&POST_TYPE, &post()).unwrap();
        assert_eq!(wire["handle"], "p1");
        assert!(wire.get("postHandle").is_none());

        let back = serializer().deserialize(&POST_TYPE, &wire).unwrap();
        assert_eq!(back, post());
    }

    #[test]
    fn test_missing_required_field() {
        let mut value = post();
        value.as_object_mut().unwrap().remove("createdTime");
        let err = serializer().serialize(&POST_TYPE, &value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired {
                path: "createdTime".to_string()
            }
        );
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let mut value = post();
        value["postHandle"] = Value::Null;
        let err = serializer().serialize(&POST_TYPE, &value).unwrap_err();
        assert_eq!(err.path(), "postHandle");
    }

    #[test]
    fn test_null_optional_field_is_omitted() {
        let mut value = post();
        value["author"] = Value::Null;
        let wire = serializer().serialize(&POST_TYPE, &value).unwrap();
        assert!(wire.get("author").is_none());
    }

    #[test]
    fn test_sequence_element_error_has_index_path() {
        let mut value = post();
        value["likers"][1]["visibility"] = json!("Hidden");
        let err = serializer().serialize(&POST_TYPE, &value).unwrap_err();
        match err {
            ValidationError::InvalidEnumValue {
                path,
                value,
                allowed,
            } => {
                assert_eq!(path, "likers[1].visibility");
                assert_eq!(value, "Hidden");
                assert_eq!(allowed, &["Public", "Private"]);
            }
            other => panic!("Expected InvalidEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_missing_field_path() {
        let mut value = post();
        value["author"] = json!({"visibility": "Public"});
        let err = serializer().deserialize(&POST_TYPE, &value).unwrap_err();
        assert_eq!(err.path(), "author.userHandle");
    }

    #[test]
    fn test_enum_match_is_case_insensitive_and_canonical() {
        let mut value = post();
        value["author"] = json!({"userHandle": "u9", "visibility": "public"});
        let wire = serializer().serialize(&POST_TYPE, &value).unwrap();
        assert_eq!(wire["author"]["visibility"], "Public");
    }

    #[test]
    fn test_type_mismatch_reports_kinds() {
        let mut value = post();
        value["score"] = json!("high");
        match serializer().serialize(&POST_TYPE, &value).unwrap_err() {
            ValidationError::TypeMismatch {
                path,
                expected,
                found,
            } => {
                assert_eq!(path, "score");
                assert_eq!(expected, "number");
                assert_eq!(found, "string");
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_rejects_fractional_numbers() {
        let mut value = post();
        value["views"] = json!(12);
        value["score"] = json!(0.5);
        let wire = serializer().serialize(&POST_TYPE, &value).unwrap();
        assert_eq!(wire["views"], 12);
        assert_eq!(wire["score"], 0.5);

        value["views"] = json!(3.5);
        match serializer().serialize(&POST_TYPE, &value).unwrap_err() {
            ValidationError::TypeMismatch { path, expected, .. } => {
                assert_eq!(path, "views");
                assert_eq!(expected, "integer");
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_sequence_must_be_array() {
        let mut value = post();
        value["likers"] = json!({"userHandle": "u1"});
        let err = serializer().serialize(&POST_TYPE, &value).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TypeMismatch { ref path, found: "object", .. } if path == "likers"
        ));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = serializer().serialize(&POST_TYPE, &json!([])).unwrap_err();
        assert_eq!(err.path(), "");
    }

    #[test]
    fn test_timestamps_are_normalized_to_utc() {
        let mut value = post();
        value["createdTime"] = json!("2016-10-19T14:00:00+02:00");
        let wire = serializer().serialize(&POST_TYPE, &value).unwrap();
        assert_eq!(wire["createdTime"], "2016-10-19T12:00:00Z");
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let mut value = post();
        value["createdTime"] = json!("2016-10-19T12:00:00.5");
        let wire = serializer().deserialize(&POST_TYPE, &value).unwrap();
        assert_eq!(wire["createdTime"], "2016-10-19T12:00:00.500Z");
    }

    #[test]
    fn test_invalid_timestamp() {
        let mut value = post();
        value["createdTime"] = json!("yesterday");
        let err = serializer().serialize(&POST_TYPE, &value).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTimestamp {
                path: "createdTime".to_string(),
                value: "yesterday".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_properties_are_dropped() {
        let mut value = post();
        value["extra"] = json!(1);
        let wire = serializer().serialize(&POST_TYPE, &value).unwrap();
        assert!(wire.get("extra").is_none());
    }

    #[test]
    fn test_unknown_composite() {
        let err = serializer()
            .serialize(&TypeDescriptor::Composite("Missing"), &json!({}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownType { .. }));
    }

    #[test]
    fn test_sequence_of_strings() {
        let tags = TypeDescriptor::Sequence(&TypeDescriptor::String);
        let wire = serializer().deserialize(&tags, &json!(["#a", "#b"])).unwrap();
        assert_eq!(wire, json!(["#a", "#b"]));

        let err = serializer().deserialize(&tags, &json!(["#a", 2])).unwrap_err();
        assert_eq!(err.path(), "[1]");
    }
}
