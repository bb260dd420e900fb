//! JSON object contract
//!
//! Every domain type implements [`JsonObject`]: it declares its serializable
//! fields as [`Attributes`] and its constraints through `validate_json`. The
//! shared engine then validates, walks the declared fields depth-first and
//! drops absent values, producing the plain mapping sent over the wire.

use crate::error::FormationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// Plain nested mapping produced by serialization
pub type JsonMap = serde_json::Map<String, Value>;

/// Namespace shown in the display form of every object
pub const DISPLAY_NAMESPACE: &str = "slack";

/// Serialization mode threaded through nested objects
///
/// Only option-like objects render differently; everything else ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Block-kit form: labels as nested text objects
    #[default]
    Block,

    /// Legacy flattened form: labels as plain strings
    Text,
}

/// A domain object that validates itself and serializes to a mapping
///
/// Object safe: containers hold children as `&dyn JsonObject` while walking.
pub trait JsonObject {
    /// Type name used in the display form
    fn object_name(&self) -> &'static str;

    /// Declared serializable fields, in emission order
    fn attributes(&self) -> Attributes<'_>;

    /// Run this object's validators
    ///
    /// # Errors
    /// The first failing validator's [`FormationError`].
    fn validate_json(&self) -> Result<(), FormationError> {
        Ok(())
    }

    /// Validate, then serialize in [`Format::Block`]
    ///
    /// # Errors
    /// Any [`FormationError`] raised by this object or a nested one.
    fn to_dict(&self) -> Result<JsonMap, FormationError> {
        self.to_dict_as(Format::Block)
    }

    /// Validate, then serialize in the given format
    ///
    /// Nothing is cached: every call re-validates current state.
    ///
    /// # Errors
    /// Any [`FormationError`] raised by this object or a nested one.
    fn to_dict_as(&self, format: Format) -> Result<JsonMap, FormationError> {
        self.validate_json()?;
        let map = self.attributes().resolve(format)?;
        tracing::trace!(object = self.object_name(), keys = map.len(), "serialized");
        Ok(map)
    }

    /// Display adapter: `<slack.Name>` or `<slack.Name: {...}>`
    fn display(&self) -> JsonDisplay<'_, Self>
    where
        Self: Sized,
    {
        JsonDisplay { object: self }
    }
}

/// One declared field value before resolution
pub enum Attribute<'a> {
    /// Absent; the key is dropped
    Null,

    /// Scalar (or already-plain) JSON value
    Value(Value),

    /// Nested object, serialized recursively
    Object(&'a dyn JsonObject),

    /// Sequence, resolved element-wise
    List(Vec<Attribute<'a>>),
}

impl<'a> Attribute<'a> {
    /// Wrap a nested object
    #[inline]
    #[must_use]
    pub fn object<T: JsonObject>(object: &'a T) -> Self {
        Self::Object(object)
    }

    /// Resolve to a JSON value; `None` means "drop this key"
    fn resolve(self, format: Format) -> Result<Option<Value>, FormationError> {
        match self {
            Self::Null | Self::Value(Value::Null) => Ok(None),
            Self::Value(value) => Ok(Some(value)),
            Self::Object(object) => object.to_dict_as(format).map(|map| Some(Value::Object(map))),
            Self::List(items) => {
                let values = items
                    .into_iter()
                    .map(|item| item.resolve(format).map(|v| v.unwrap_or(Value::Null)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Some(Value::Array(values)))
            }
        }
    }
}

impl fmt::Debug for Attribute<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Object(o) => f.debug_tuple("Object").field(&o.object_name()).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

impl From<&str> for Attribute<'_> {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl From<&String> for Attribute<'_> {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&Option<String>> for Attribute<'_> {
    fn from(value: &Option<String>) -> Self {
        value.as_deref().map_or(Self::Null, Self::from)
    }
}

impl From<Option<&str>> for Attribute<'_> {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<bool> for Attribute<'_> {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl From<Option<bool>> for Attribute<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<u32> for Attribute<'_> {
    fn from(value: u32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Option<u32>> for Attribute<'_> {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<i64> for Attribute<'_> {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Option<i64>> for Attribute<'_> {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<&[String]> for Attribute<'_> {
    fn from(values: &[String]) -> Self {
        Self::List(values.iter().map(Self::from).collect())
    }
}

impl From<&Option<Vec<String>>> for Attribute<'_> {
    fn from(values: &Option<Vec<String>>) -> Self {
        values.as_deref().map_or(Self::Null, Self::from)
    }
}

/// Ordered declaration of an object's serializable fields
///
/// Names are unique; redeclaring a name replaces the earlier value in place.
///
/// # Example
/// ```rust
/// use blockkit_core::{Attributes, Format};
///
/// let map = Attributes::new()
///     .field("type", "divider")
///     .field("block_id", &None::<String>)
///     .resolve(Format::Block)
///     .unwrap();
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Attributes<'a> {
    entries: IndexMap<&'static str, Attribute<'a>>,
}

impl<'a> Attributes<'a> {
    /// Create empty declaration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Declare a scalar field
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Into<Attribute<'a>>) -> Self {
        self.entries.insert(name, value.into());
        self
    }

    /// Declare a nested object field
    #[must_use]
    pub fn object<T: JsonObject>(mut self, name: &'static str, object: &'a T) -> Self {
        self.entries.insert(name, Attribute::Object(object));
        self
    }

    /// Declare an optional nested object field
    #[must_use]
    pub fn optional_object<T: JsonObject>(self, name: &'static str, object: Option<&'a T>) -> Self {
        match object {
            Some(object) => self.object(name, object),
            None => self.field(name, Attribute::Null),
        }
    }

    /// Declare a sequence of nested objects (always emitted)
    #[must_use]
    pub fn objects<T: JsonObject>(mut self, name: &'static str, objects: &'a [T]) -> Self {
        let items = objects
            .iter()
            .map(|o| Attribute::Object(o as &dyn JsonObject))
            .collect();
        self.entries.insert(name, Attribute::List(items));
        self
    }

    /// Declare a sequence of nested objects, emitted only when non-empty
    #[must_use]
    pub fn non_empty_objects<T: JsonObject>(self, name: &'static str, objects: &'a [T]) -> Self {
        if objects.is_empty() {
            self.field(name, Attribute::Null)
        } else {
            self.objects(name, objects)
        }
    }

    /// Declare an optional sequence of nested objects
    #[must_use]
    pub fn optional_objects<T: JsonObject>(
        self,
        name: &'static str,
        objects: Option<&'a [T]>,
    ) -> Self {
        match objects {
            Some(objects) => self.objects(name, objects),
            None => self.field(name, Attribute::Null),
        }
    }

    /// Declared field names, including ones that will resolve to null
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of declared fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is declared
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every declared field into a plain mapping
    ///
    /// Nested objects are serialized (and validated) first; keys whose value
    /// resolves to null are then dropped. A present child with no fields
    /// stays as `{}`.
    ///
    /// # Errors
    /// The first [`FormationError`] raised by a nested object.
    pub fn resolve(self, format: Format) -> Result<JsonMap, FormationError> {
        let mut map = JsonMap::new();
        for (name, attribute) in self.entries {
            if let Some(value) = attribute.resolve(format)? {
                map.insert(name.to_string(), value);
            }
        }
        Ok(map)
    }
}

/// Display adapter returned by [`JsonObject::display`]
pub struct JsonDisplay<'a, T: ?Sized> {
    object: &'a T,
}

impl<T: JsonObject + ?Sized> Display for JsonDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = self.object.object_name();
        match self.object.to_dict() {
            Ok(map) if !map.is_empty() => {
                write!(f, "<{DISPLAY_NAMESPACE}.{name}: {}>", Value::Object(map))
            }
            _ => write!(f, "<{DISPLAY_NAMESPACE}.{name}>"),
        }
    }
}
