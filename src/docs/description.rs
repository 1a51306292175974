use crate::registry::Setting;

/// Immutable documentation record for one configuration setting.
///
/// Built once per generation run by projecting a [`Setting`] declaration.
/// Prose transformations never mutate a record; [`SettingDescription::formatted`]
/// derives a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDescription {
    /// Anchor-safe identifier derived from the name.
    pub id: String,
    /// The dotted setting key as users would write it.
    pub name: String,
    /// Free-text explanation, absent when only the validation message exists.
    pub description: Option<String>,
    /// Rendering of the accepted value syntax; always present.
    pub validation_message: String,
    /// Rendering of the default, documented override preferred.
    pub default_value: Option<String>,
    /// Whether the setting is deprecated.
    pub deprecated: bool,
    /// Replacement setting names, comma-joined; only set when deprecated.
    pub replaced_by: Option<String>,
    /// Whether the setting is internal/unsupported.
    pub internal: bool,
    /// Whether the setting is changeable at runtime.
    pub dynamic: bool,
    /// Whether the setting only exists in the commercial edition.
    pub enterprise: bool,
}

impl SettingDescription {
    /// Projects a registry declaration into a documentation record.
    pub fn from_setting(setting: &Setting) -> Self {
        let default_value = setting
            .documented_default
            .map(str::to_string)
            .or_else(|| setting.default.map(|value| value.to_string()));

        Self {
            id: anchor_id(setting.name),
            name: setting.name.to_string(),
            description: setting.description.map(str::to_string),
            validation_message: setting.value_type.validation_message(),
            default_value,
            deprecated: setting.is_deprecated(),
            replaced_by: if setting.replaced_by.is_empty() {
                None
            } else {
                Some(setting.replaced_by.join(", "))
            },
            internal: setting.is_internal(),
            dynamic: setting.is_dynamic(),
            enterprise: setting.is_enterprise(),
        }
    }

    /// Derives a new record with `prose` applied to the sentence-shaped
    /// fields (description and validation message) and `references` applied
    /// to the replacement list, which is a bare list of names rather than a
    /// sentence. All other fields are copied unchanged; the original record
    /// is left untouched.
    pub fn formatted<F, G>(&self, prose: F, references: G) -> Self
    where
        F: Fn(&str) -> String,
        G: Fn(&str) -> String,
    {
        Self {
            description: self.description.as_deref().map(&prose),
            validation_message: prose(&self.validation_message),
            replaced_by: self.replaced_by.as_deref().map(&references),
            ..self.clone()
        }
    }

    /// The prose shown in the Description row.
    ///
    /// Falls back to the validation message when the setting has no distinct
    /// description.
    pub fn effective_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(&self.validation_message)
    }

    /// The fixed sentence synthesized for deprecated settings.
    pub fn deprecation_sentence(&self) -> String {
        format!(
            "The +{}+ configuration setting has been deprecated.",
            self.name
        )
    }
}

/// Derives an anchor-safe identifier from a setting name.
///
/// Angle brackets from templated names like `internal.block_cache.size.<pool>`
/// would corrupt AsciiDoc anchors and are replaced with underscores.
pub fn anchor_id(name: &str) -> String {
    name.chars()
        .map(|c| if c == '<' || c == '>' { '_' } else { c })
        .collect()
}
