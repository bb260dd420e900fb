//! Blockkit Core
//!
//! Validation-annotated serialization framework shared by every block
//! payload object.
//!
//! # Core Concepts
//!
//! - [`JsonObject`]: declares serializable [`Attributes`] and validators
//! - [`Validator`]: named predicate plus the fixed message it fails with
//! - [`FormationError`]: the only error kind; raised by the first failing validator
//! - [`Format`]: serialization mode threaded through nested objects
//!
//! # Example
//!
//! ```rust
//! use blockkit_core::{run_validators, Attributes, FormationError, JsonObject, Validator};
//!
//! struct Divider {
//!     block_id: Option<String>,
//! }
//!
//! impl JsonObject for Divider {
//!     fn object_name(&self) -> &'static str {
//!         "DividerBlock"
//!     }
//!
//!     fn attributes(&self) -> Attributes<'_> {
//!         Attributes::new()
//!             .field("type", "divider")
//!             .field("block_id", &self.block_id)
//!     }
//!
//!     fn validate_json(&self) -> Result<(), FormationError> {
//!         let validators = [Validator::new(
//!             "block_id_length",
//!             "block_id cannot exceed 255 characters",
//!             |d: &Divider| d.block_id.as_ref().map_or(true, |id| id.len() <= 255),
//!         )];
//!         run_validators(self, &validators)
//!     }
//! }
//!
//! let map = Divider { block_id: None }.to_dict().unwrap();
//! assert_eq!(map.len(), 1);
//! ```

#![warn(unreachable_pub)]

mod config;
mod error;
mod object;
mod validator;

pub use config::{to_json_string, SerializeConfig};
pub use error::FormationError;
pub use object::{Attribute, Attributes, Format, JsonDisplay, JsonMap, JsonObject, DISPLAY_NAMESPACE};
pub use validator::{
    enum_message, optional_within_length, run_validators, within_length, Validator,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for implementing and serializing objects
    pub use crate::{Attributes, Format, FormationError, JsonMap, JsonObject, Validator};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
