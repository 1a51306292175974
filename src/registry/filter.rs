use std::collections::BTreeSet;

use super::setting::Setting;

/// Filter predicate over setting metadata.
///
/// All populated fields must match for a setting to be included; the fields
/// are combined by logical AND in [`SettingFilter::matches`]. An overly
/// restrictive combination yields an empty result rather than an error.
///
/// Internal settings are excluded unless `include_internal` is set. This is
/// the implicit default for every generation run.
#[derive(Debug, Clone, Default)]
pub struct SettingFilter {
    /// Restrict to exactly one named setting.
    pub name: Option<String>,
    /// Restrict to a set of named settings.
    pub names: Option<BTreeSet<String>>,
    /// Restrict to settings whose name starts with this namespace prefix.
    pub prefix: Option<String>,
    /// Restrict to settings changeable at runtime.
    pub dynamic_only: bool,
    /// Include internal/unsupported settings.
    pub include_internal: bool,
}

impl SettingFilter {
    /// Evaluates the conjunction of all populated filter fields.
    ///
    /// Pure function of the setting's metadata; no side effects.
    pub fn matches(&self, setting: &Setting) -> bool {
        if setting.is_internal() && !self.include_internal {
            return false;
        }

        if let Some(name) = &self.name
            && setting.name != name.as_str()
        {
            return false;
        }

        if let Some(names) = &self.names
            && !names.contains(setting.name)
        {
            return false;
        }

        if let Some(prefix) = &self.prefix
            && !setting.name.starts_with(prefix.as_str())
        {
            return false;
        }

        if self.dynamic_only && !setting.is_dynamic() {
            return false;
        }

        true
    }
}
