//! Declarative helpers for the domain layer.
//!
//! - [`delegate_json_object!`] - implement `JsonObject` for a sum type by
//!   forwarding to the wrapped variant, plus `From` for each variant
//! - [`validator_table!`] - build a type's static validator table once

/// Implement `JsonObject` for an enum whose variants each wrap one object.
///
/// Validation, attributes, naming and serialization all forward to the
/// wrapped value, so the enum adds no keys and no constraints of its own.
///
/// # Syntax
///
/// ```rust,ignore
/// delegate_json_object!(TextObject {
///     Plain(PlainText),
///     Markdown(MarkdownText),
/// });
/// ```
macro_rules! delegate_json_object {
    ($enum:ident { $($variant:ident($inner:ty)),+ $(,)? }) => {
        impl ::blockkit_core::JsonObject for $enum {
            fn object_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(inner) => ::blockkit_core::JsonObject::object_name(inner),)+
                }
            }

            fn attributes(&self) -> ::blockkit_core::Attributes<'_> {
                match self {
                    $(Self::$variant(inner) => ::blockkit_core::JsonObject::attributes(inner),)+
                }
            }

            fn validate_json(&self) -> Result<(), ::blockkit_core::FormationError> {
                match self {
                    $(Self::$variant(inner) => ::blockkit_core::JsonObject::validate_json(inner),)+
                }
            }

            fn to_dict_as(
                &self,
                format: ::blockkit_core::Format,
            ) -> Result<::blockkit_core::JsonMap, ::blockkit_core::FormationError> {
                match self {
                    $(Self::$variant(inner) => ::blockkit_core::JsonObject::to_dict_as(inner, format),)+
                }
            }
        }

        $(
            impl From<$inner> for $enum {
                fn from(inner: $inner) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
}

/// Static, ordered validator table for one type.
///
/// Expands to a `once_cell` lazy static so messages that interpolate limit
/// constants are formatted exactly once.
///
/// # Syntax
///
/// ```rust,ignore
/// validator_table!(VALIDATORS: ConfirmObject => [
///     Validator::new("title_length", "...", |c: &ConfirmObject| ...),
/// ]);
/// ```
macro_rules! validator_table {
    ($name:ident: $ty:ty => [$($validator:expr),* $(,)?]) => {
        static $name: ::once_cell::sync::Lazy<Vec<::blockkit_core::Validator<$ty>>> =
            ::once_cell::sync::Lazy::new(|| vec![$($validator),*]);
    };
}
