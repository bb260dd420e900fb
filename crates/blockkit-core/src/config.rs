//! Serialization configuration
//!
//! Controls how a validated object is rendered to JSON text. Constraint
//! limits are fixed per type and are deliberately not part of this config.

use crate::error::FormationError;
use crate::object::{Format, JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendering options for [`to_json_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeConfig {
    /// Serialization mode passed to nested objects
    pub format: Format,
    /// Pretty-print the JSON text
    pub pretty: bool,
}

impl SerializeConfig {
    /// Create default configuration (block format, compact)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With serialization format
    #[inline]
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// With pretty printing
    #[inline]
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Validate `object` and render it as JSON text
///
/// # Errors
/// Any [`FormationError`] raised while validating the object tree.
pub fn to_json_string<T: JsonObject + ?Sized>(
    object: &T,
    config: &SerializeConfig,
) -> Result<String, FormationError> {
    let value = Value::Object(object.to_dict_as(config.format)?);
    if config.pretty {
        Ok(format!("{value:#}"))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Attributes;

    struct Divider;

    impl JsonObject for Divider {
        fn object_name(&self) -> &'static str {
            "Divider"
        }

        fn attributes(&self) -> Attributes<'_> {
            Attributes::new().field("type", "divider")
        }
    }

    #[test]
    fn compact_by_default() {
        let text = to_json_string(&Divider, &SerializeConfig::new()).unwrap();
        assert_eq!(text, r#"{"type":"divider"}"#);
    }

    #[test]
    fn pretty_output() {
        let config = SerializeConfig::new().with_pretty(true);
        let text = to_json_string(&Divider, &config).unwrap();
        assert_eq!(text, "{\n  \"type\": \"divider\"\n}");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SerializeConfig = serde_json::from_str(r#"{"format": "text"}"#).unwrap();
        assert_eq!(config.format, Format::Text);
        assert!(!config.pretty);
    }

    #[test]
    fn builder_methods() {
        let config = SerializeConfig::new()
            .with_format(Format::Text)
            .with_pretty(true);
        assert_eq!(config.format, Format::Text);
        assert!(config.pretty);
    }
}
