//! Select menus
//!
//! Static menus carry their own options; external menus load them from the
//! app; user, conversation and channel menus are populated by the platform.
//! Each comes in a single and a multi-select flavor.

use super::{action_id_length, placeholder_length, to_block_form, InteractiveElement, Placeholder};
use crate::objects::{ConfirmObject, OptionGroup, OptionObject, PlainText};
use blockkit_core::{
    run_validators, Attributes, Format, FormationError, JsonMap, JsonObject, Validator,
};
use once_cell::sync::Lazy;

/// Maximum number of options in a static menu
const OPTIONS_MAX_LENGTH: usize = 100;

/// Maximum number of option groups in a static menu
const OPTION_GROUPS_MAX_LENGTH: usize = 100;

fn options_within_limit(options: Option<&Vec<OptionObject>>) -> bool {
    options.map_or(true, |o| o.len() <= OPTIONS_MAX_LENGTH)
}

fn option_groups_within_limit(groups: Option<&Vec<OptionGroup>>) -> bool {
    groups.map_or(true, |g| g.len() <= OPTION_GROUPS_MAX_LENGTH)
}

/// Options source shared by the two static menus
trait StaticOptions {
    fn options(&self) -> Option<&Vec<OptionObject>>;
    fn option_groups(&self) -> Option<&Vec<OptionGroup>>;
}

/// Cardinality and exclusivity checks shared by the two static menus
fn static_option_validators<T: StaticOptions>() -> [Validator<T>; 4] {
    [
        Validator::new(
            "options_length",
            format!("options attribute cannot exceed {OPTIONS_MAX_LENGTH} elements"),
            |s: &T| options_within_limit(s.options()),
        ),
        Validator::new(
            "option_groups_length",
            format!("option_groups attribute cannot exceed {OPTION_GROUPS_MAX_LENGTH} elements"),
            |s: &T| option_groups_within_limit(s.option_groups()),
        ),
        Validator::new(
            "options_and_option_groups_both_specified",
            "options and option_groups cannot both be specified",
            |s: &T| !(s.options().is_some() && s.option_groups().is_some()),
        ),
        Validator::new(
            "neither_options_or_option_groups_is_specified",
            "options or option_groups must be specified",
            |s: &T| s.options().is_some() || s.option_groups().is_some(),
        ),
    ]
}

/// Single-select menu with a fixed option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSelectElement {
    /// Text shown before anything is picked
    pub placeholder: PlainText,
    /// Interaction identifier
    pub action_id: String,
    /// Flat option list; exclusive with `option_groups`
    pub options: Option<Vec<OptionObject>>,
    /// Grouped option list; exclusive with `options`
    pub option_groups: Option<Vec<OptionGroup>>,
    /// Option selected on load
    pub initial_option: Option<OptionObject>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl StaticSelectElement {
    /// Create menu; add options or option groups before serializing
    #[inline]
    #[must_use]
    pub fn new(placeholder: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            action_id: action_id.into(),
            options: None,
            option_groups: None,
            initial_option: None,
            confirm: None,
        }
    }

    /// With flat options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    /// With grouped options
    #[inline]
    #[must_use]
    pub fn with_option_groups(mut self, option_groups: Vec<OptionGroup>) -> Self {
        self.option_groups = Some(option_groups);
        self
    }

    /// With initially selected option
    #[inline]
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionObject) -> Self {
        self.initial_option = Some(option);
        self
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for StaticSelectElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for StaticSelectElement {
    fn placeholder(&self) -> Option<&PlainText> {
        Some(&self.placeholder)
    }
}

impl StaticOptions for StaticSelectElement {
    fn options(&self) -> Option<&Vec<OptionObject>> {
        self.options.as_ref()
    }

    fn option_groups(&self) -> Option<&Vec<OptionGroup>> {
        self.option_groups.as_ref()
    }
}

static STATIC_VALIDATORS: Lazy<Vec<Validator<StaticSelectElement>>> = Lazy::new(|| {
    let mut validators = vec![action_id_length(), placeholder_length()];
    validators.extend(static_option_validators());
    validators
});

impl JsonObject for StaticSelectElement {
    fn object_name(&self) -> &'static str {
        "StaticSelectElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "static_select")
            .object("placeholder", &self.placeholder)
            .field("action_id", &self.action_id)
            .optional_objects("options", self.options.as_deref())
            .optional_objects("option_groups", self.option_groups.as_deref())
            .optional_object("initial_option", self.initial_option.as_ref())
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &STATIC_VALIDATORS)
    }

    fn to_dict_as(&self, _format: Format) -> Result<JsonMap, FormationError> {
        to_block_form(self)
    }
}

/// Multi-select menu with a fixed option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMultiSelectElement {
    /// Text shown before anything is picked
    pub placeholder: PlainText,
    /// Interaction identifier
    pub action_id: String,
    /// Flat option list; exclusive with `option_groups`
    pub options: Option<Vec<OptionObject>>,
    /// Grouped option list; exclusive with `options`
    pub option_groups: Option<Vec<OptionGroup>>,
    /// Options selected on load
    pub initial_options: Option<Vec<OptionObject>>,
    /// Upper bound on simultaneous picks
    pub max_selected_items: Option<u32>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl StaticMultiSelectElement {
    /// Create menu; add options or option groups before serializing
    #[inline]
    #[must_use]
    pub fn new(placeholder: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            action_id: action_id.into(),
            options: None,
            option_groups: None,
            initial_options: None,
            max_selected_items: None,
            confirm: None,
        }
    }

    /// With flat options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: Vec<OptionObject>) -> Self {
        self.options = Some(options);
        self
    }

    /// With grouped options
    #[inline]
    #[must_use]
    pub fn with_option_groups(mut self, option_groups: Vec<OptionGroup>) -> Self {
        self.option_groups = Some(option_groups);
        self
    }

    /// With initially selected options
    #[inline]
    #[must_use]
    pub fn with_initial_options(mut self, options: Vec<OptionObject>) -> Self {
        self.initial_options = Some(options);
        self
    }

    /// With pick limit
    #[inline]
    #[must_use]
    pub fn with_max_selected_items(mut self, max: u32) -> Self {
        self.max_selected_items = Some(max);
        self
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for StaticMultiSelectElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for StaticMultiSelectElement {
    fn placeholder(&self) -> Option<&PlainText> {
        Some(&self.placeholder)
    }
}

impl StaticOptions for StaticMultiSelectElement {
    fn options(&self) -> Option<&Vec<OptionObject>> {
        self.options.as_ref()
    }

    fn option_groups(&self) -> Option<&Vec<OptionGroup>> {
        self.option_groups.as_ref()
    }
}

static MULTI_STATIC_VALIDATORS: Lazy<Vec<Validator<StaticMultiSelectElement>>> = Lazy::new(|| {
    let mut validators = vec![action_id_length(), placeholder_length()];
    validators.extend(static_option_validators());
    validators.push(Validator::new(
        "max_selected_items_positive",
        "max_selected_items must be at least 1",
        |s: &StaticMultiSelectElement| s.max_selected_items.map_or(true, |max| max >= 1),
    ));
    validators
});

impl JsonObject for StaticMultiSelectElement {
    fn object_name(&self) -> &'static str {
        "StaticMultiSelectElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "multi_static_select")
            .object("placeholder", &self.placeholder)
            .field("action_id", &self.action_id)
            .optional_objects("options", self.options.as_deref())
            .optional_objects("option_groups", self.option_groups.as_deref())
            .optional_objects("initial_options", self.initial_options.as_deref())
            .field("max_selected_items", self.max_selected_items)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &MULTI_STATIC_VALIDATORS)
    }

    fn to_dict_as(&self, _format: Format) -> Result<JsonMap, FormationError> {
        to_block_form(self)
    }
}

/// Single-select menu whose options are loaded from the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDataSelectElement {
    /// Text shown before anything is picked
    pub placeholder: PlainText,
    /// Interaction identifier
    pub action_id: String,
    /// Option selected on load
    pub initial_option: Option<OptionObject>,
    /// Characters typed before the options request is sent
    pub min_query_length: Option<u32>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl ExternalDataSelectElement {
    /// Create menu
    #[inline]
    #[must_use]
    pub fn new(placeholder: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            action_id: action_id.into(),
            initial_option: None,
            min_query_length: None,
            confirm: None,
        }
    }

    /// With initially selected option
    #[inline]
    #[must_use]
    pub fn with_initial_option(mut self, option: OptionObject) -> Self {
        self.initial_option = Some(option);
        self
    }

    /// With minimum query length
    #[inline]
    #[must_use]
    pub fn with_min_query_length(mut self, length: u32) -> Self {
        self.min_query_length = Some(length);
        self
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for ExternalDataSelectElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for ExternalDataSelectElement {
    fn placeholder(&self) -> Option<&PlainText> {
        Some(&self.placeholder)
    }
}

validator_table!(EXTERNAL_VALIDATORS: ExternalDataSelectElement => [
    action_id_length(),
    placeholder_length(),
]);

impl JsonObject for ExternalDataSelectElement {
    fn object_name(&self) -> &'static str {
        "ExternalDataSelectElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "external_select")
            .object("placeholder", &self.placeholder)
            .field("action_id", &self.action_id)
            .optional_object("initial_option", self.initial_option.as_ref())
            .field("min_query_length", self.min_query_length)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &EXTERNAL_VALIDATORS)
    }

    fn to_dict_as(&self, _format: Format) -> Result<JsonMap, FormationError> {
        to_block_form(self)
    }
}

/// Multi-select menu whose options are loaded from the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDataMultiSelectElement {
    /// Text shown before anything is picked
    pub placeholder: PlainText,
    /// Interaction identifier
    pub action_id: String,
    /// Options selected on load
    pub initial_options: Option<Vec<OptionObject>>,
    /// Characters typed before the options request is sent
    pub min_query_length: Option<u32>,
    /// Confirmation dialog shown after a pick
    pub confirm: Option<ConfirmObject>,
}

impl ExternalDataMultiSelectElement {
    /// Create menu
    #[inline]
    #[must_use]
    pub fn new(placeholder: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            action_id: action_id.into(),
            initial_options: None,
            min_query_length: None,
            confirm: None,
        }
    }

    /// With initially selected options
    #[inline]
    #[must_use]
    pub fn with_initial_options(mut self, options: Vec<OptionObject>) -> Self {
        self.initial_options = Some(options);
        self
    }

    /// With minimum query length
    #[inline]
    #[must_use]
    pub fn with_min_query_length(mut self, length: u32) -> Self {
        self.min_query_length = Some(length);
        self
    }

    /// With confirmation dialog
    #[inline]
    #[must_use]
    pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

impl InteractiveElement for ExternalDataMultiSelectElement {
    fn action_id(&self) -> &str {
        &self.action_id
    }
}

impl Placeholder for ExternalDataMultiSelectElement {
    fn placeholder(&self) -> Option<&PlainText> {
        Some(&self.placeholder)
    }
}

validator_table!(MULTI_EXTERNAL_VALIDATORS: ExternalDataMultiSelectElement => [
    action_id_length(),
    placeholder_length(),
]);

impl JsonObject for ExternalDataMultiSelectElement {
    fn object_name(&self) -> &'static str {
        "ExternalDataMultiSelectElement"
    }

    fn attributes(&self) -> Attributes<'_> {
        Attributes::new()
            .field("type", "multi_external_select")
            .object("placeholder", &self.placeholder)
            .field("action_id", &self.action_id)
            .optional_objects("initial_options", self.initial_options.as_deref())
            .field("min_query_length", self.min_query_length)
            .optional_object("confirm", self.confirm.as_ref())
    }

    fn validate_json(&self) -> Result<(), FormationError> {
        run_validators(self, &MULTI_EXTERNAL_VALIDATORS)
    }

    fn to_dict_as(&self, _format: Format) -> Result<JsonMap, FormationError> {
        to_block_form(self)
    }
}

/// Menu populated by the platform with users, conversations or channels
///
/// `$initial` holds one id for single selects and a list of ids for multi
/// selects; both forms serialize through the scalar attribute conversions.
macro_rules! platform_select {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $initial:ident: $initial_ty:ty, $with_initial:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            /// Text shown before anything is picked
            pub placeholder: PlainText,
            /// Interaction identifier
            pub action_id: String,
            /// Selection on load
            pub $initial: Option<$initial_ty>,
            /// Confirmation dialog shown after a pick
            pub confirm: Option<ConfirmObject>,
        }

        impl $name {
            /// Create menu
            #[inline]
            #[must_use]
            pub fn new(placeholder: impl Into<PlainText>, action_id: impl Into<String>) -> Self {
                Self {
                    placeholder: placeholder.into(),
                    action_id: action_id.into(),
                    $initial: None,
                    confirm: None,
                }
            }

            /// With initial selection
            #[inline]
            #[must_use]
            pub fn $with_initial(mut self, initial: impl Into<$initial_ty>) -> Self {
                self.$initial = Some(initial.into());
                self
            }

            /// With confirmation dialog
            #[inline]
            #[must_use]
            pub fn with_confirm(mut self, confirm: ConfirmObject) -> Self {
                self.confirm = Some(confirm);
                self
            }
        }

        impl InteractiveElement for $name {
            fn action_id(&self) -> &str {
                &self.action_id
            }
        }

        impl Placeholder for $name {
            fn placeholder(&self) -> Option<&PlainText> {
                Some(&self.placeholder)
            }
        }

        impl JsonObject for $name {
            fn object_name(&self) -> &'static str {
                stringify!($name)
            }

            fn attributes(&self) -> Attributes<'_> {
                Attributes::new()
                    .field("type", $kind)
                    .object("placeholder", &self.placeholder)
                    .field("action_id", &self.action_id)
                    .field(stringify!($initial), &self.$initial)
                    .optional_object("confirm", self.confirm.as_ref())
            }

            fn validate_json(&self) -> Result<(), FormationError> {
                validator_table!(VALIDATORS: $name => [
                    action_id_length(),
                    placeholder_length(),
                ]);
                run_validators(self, &VALIDATORS)
            }
        }
    };
}

platform_select!(
    /// Single-select menu of workspace users
    UserSelectElement, "users_select", initial_user: String, with_initial_user
);

platform_select!(
    /// Multi-select menu of workspace users
    UserMultiSelectElement, "multi_users_select", initial_users: Vec<String>, with_initial_users
);

platform_select!(
    /// Single-select menu of conversations (channels, DMs, group DMs)
    ConversationSelectElement, "conversations_select", initial_conversation: String,
    with_initial_conversation
);

platform_select!(
    /// Multi-select menu of conversations
    ConversationMultiSelectElement, "multi_conversations_select",
    initial_conversations: Vec<String>, with_initial_conversations
);

platform_select!(
    /// Single-select menu of public channels
    ChannelSelectElement, "channels_select", initial_channel: String, with_initial_channel
);

platform_select!(
    /// Multi-select menu of public channels
    ChannelMultiSelectElement, "multi_channels_select", initial_channels: Vec<String>,
    with_initial_channels
);
