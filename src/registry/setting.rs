use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flag bits attached to a setting declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SettingFlags: u8 {
        /// The setting is deprecated and may be removed in a future release.
        const DEPRECATED = 1;
        /// The setting is internal to the server and unsupported for end users.
        const INTERNAL = 1 << 1;
        /// The setting can be changed at runtime without a restart.
        const DYNAMIC = 1 << 2;
        /// The setting only exists in the commercial edition.
        const ENTERPRISE = 1 << 3;
    }
}

/// Accepted value syntax for a setting.
///
/// Each variant renders the human-readable validation message shown in the
/// "Valid values" row of the generated reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `true` or `false`.
    Boolean,
    /// A whole number.
    Integer,
    /// A floating point number.
    Float,
    /// Free-form text.
    String,
    /// A filesystem path.
    Path,
    /// A time interval with an optional unit suffix.
    Duration,
    /// A memory or storage amount with an optional multiplier suffix.
    ByteSize,
    /// One value out of a fixed set of literals.
    Enum(&'static [&'static str]),
    /// A comma-separated list of elements of the inner type.
    ListOf(&'static ValueType),
}

impl ValueType {
    /// Renders the validation message describing the accepted value syntax.
    pub fn validation_message(&self) -> String {
        match self {
            ValueType::Boolean => "a boolean".to_string(),
            ValueType::Integer => "an integer".to_string(),
            ValueType::Float => "a floating point number".to_string(),
            ValueType::String => "a string".to_string(),
            ValueType::Path => "a filesystem path".to_string(),
            ValueType::Duration => {
                "a duration (valid units are `ms`, `s`, `m`, `h` and `d`; default unit is `s`)"
                    .to_string()
            }
            ValueType::ByteSize => {
                "a byte size (valid multipliers are `k`, `m`, `g` and `t`; default is bytes)"
                    .to_string()
            }
            ValueType::Enum(values) => format!("one of [{}]", values.join(", ")),
            ValueType::ListOf(inner) => format!(
                "a comma-separated list where each element is {}",
                inner.validation_message()
            ),
        }
    }
}

/// Programmatic default value of a setting.
///
/// Rendered with `Display` when no documented-default override is supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// Floating point default.
    Float(f64),
    /// Textual default, also used for durations and byte sizes.
    Str(&'static str),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{value}"),
            SettingValue::Int(value) => write!(f, "{value}"),
            SettingValue::Float(value) => write!(f, "{value}"),
            SettingValue::Str(value) => write!(f, "{value}"),
        }
    }
}

/// Declaration of a single configuration setting.
///
/// Settings are declared in constant manifests, so every field borrows
/// `'static` data. Construction goes through the `const` builder methods:
///
/// ```rust
/// use confdoc::registry::{Setting, SettingFlags, SettingValue, ValueType};
///
/// const TIMEOUT: Setting = Setting::new("db.transaction.timeout", ValueType::Duration)
///     .description("The maximum time interval of a transaction.")
///     .default_value(SettingValue::Str("0s"))
///     .flags(SettingFlags::DYNAMIC);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setting {
    /// The dotted setting key as users would write it.
    pub name: &'static str,
    /// Free-text explanation; absent when the validation message says it all.
    pub description: Option<&'static str>,
    /// Accepted value syntax.
    pub value_type: ValueType,
    /// Programmatic default value.
    pub default: Option<SettingValue>,
    /// Prose override for the default, preferred over the computed rendering.
    pub documented_default: Option<&'static str>,
    /// Deprecation, visibility, and edition flags.
    pub flags: SettingFlags,
    /// Names of the settings replacing this one; only meaningful when deprecated.
    pub replaced_by: &'static [&'static str],
}

impl Setting {
    /// Creates a setting declaration with no description, default, or flags.
    pub const fn new(name: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            description: None,
            value_type,
            default: None,
            documented_default: None,
            flags: SettingFlags::empty(),
            replaced_by: &[],
        }
    }

    /// Attaches a free-text description.
    pub const fn description(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    /// Attaches a programmatic default value.
    pub const fn default_value(mut self, value: SettingValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Overrides the rendered default with a documented form.
    pub const fn documented_default(mut self, text: &'static str) -> Self {
        self.documented_default = Some(text);
        self
    }

    /// Sets the flag bits for this setting.
    pub const fn flags(mut self, flags: SettingFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Names the replacement settings for a deprecated setting.
    pub const fn replaced_by(mut self, names: &'static [&'static str]) -> Self {
        self.replaced_by = names;
        self
    }

    /// Whether the setting is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.flags.contains(SettingFlags::DEPRECATED)
    }

    /// Whether the setting is internal/unsupported.
    pub fn is_internal(&self) -> bool {
        self.flags.contains(SettingFlags::INTERNAL)
    }

    /// Whether the setting can be changed at runtime.
    pub fn is_dynamic(&self) -> bool {
        self.flags.contains(SettingFlags::DYNAMIC)
    }

    /// Whether the setting only exists in the commercial edition.
    pub fn is_enterprise(&self) -> bool {
        self.flags.contains(SettingFlags::ENTERPRISE)
    }
}
