use std::collections::BTreeSet;

use crate::core::{ConfdocError, Result};

use super::{
    SettingFilter, cluster::ClusterSettings, db::DbSettings, internal::InternalSettings,
    server::ServerSettings, setting::Setting,
};

/// Trait for modules that contribute settings to the registry.
///
/// Implement this trait on a namespace marker type and return the constant
/// manifest of settings that namespace declares. This replaces any runtime
/// discovery: a setting that is not listed in a manifest does not exist as
/// far as the documentation generator is concerned.
pub trait SettingsProvider {
    /// Returns the constant settings manifest for this namespace.
    fn settings() -> &'static [Setting];
}

/// Central registry of every settings namespace shipped with the server.
///
/// Provides methods to collect all declared settings and to enumerate the
/// filtered, sorted subset used for one documentation run.
pub struct SettingsRegistry;

impl SettingsRegistry {
    /// Returns every declared setting across all namespace manifests.
    ///
    /// The result is the raw concatenation in manifest order; callers that
    /// need validation and deterministic ordering go through [`Self::enumerate`].
    pub fn get_all() -> Vec<&'static Setting> {
        [
            ServerSettings::settings(),
            DbSettings::settings(),
            ClusterSettings::settings(),
            InternalSettings::settings(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Enumerates the settings matching `filter`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfdocError::DuplicateSetting`] or
    /// [`ConfdocError::ManifestValidation`] when the combined manifests are
    /// inconsistent. Validation failures abort the whole run; a reference
    /// document that silently omits settings is worse than none.
    pub fn enumerate(filter: &SettingFilter) -> Result<Vec<&'static Setting>> {
        let all = Self::get_all();
        enumerate_settings(&all, filter)
    }
}

/// Enumerates the settings in `settings` matching `filter`, sorted by name.
///
/// Ordering is case-sensitive byte order on the literal setting name; dots
/// and underscores are not normalized.
///
/// # Errors
///
/// Returns an error when the collection fails [`validate`].
pub fn enumerate_settings<'a>(
    settings: &[&'a Setting],
    filter: &SettingFilter,
) -> Result<Vec<&'a Setting>> {
    validate(settings)?;

    let mut matched: Vec<&Setting> = settings
        .iter()
        .copied()
        .filter(|setting| filter.matches(setting))
        .collect();
    matched.sort_by(|a, b| a.name.cmp(b.name));

    Ok(matched)
}

/// Checks a combined settings collection for declaration mistakes.
///
/// Two conditions are fatal: a setting name declared by more than one
/// manifest, and a replacement list on a setting that is not deprecated.
///
/// # Errors
///
/// Returns [`ConfdocError::DuplicateSetting`] or
/// [`ConfdocError::ManifestValidation`] respectively.
pub(crate) fn validate(settings: &[&Setting]) -> Result<()> {
    let mut seen = BTreeSet::new();

    for setting in settings {
        if !seen.insert(setting.name) {
            return Err(ConfdocError::DuplicateSetting {
                name: setting.name.to_string(),
            });
        }

        if !setting.replaced_by.is_empty() && !setting.is_deprecated() {
            return Err(ConfdocError::ManifestValidation {
                setting: setting.name.to_string(),
                details: "replacement declared on a setting that is not deprecated".to_string(),
            });
        }
    }

    Ok(())
}
