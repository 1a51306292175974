use std::{collections::BTreeSet, fs, path::Path};

use crate::{
    core::{ConfdocError, Result},
    registry::{SettingFilter, SettingsRegistry},
};

use super::{
    asciidoc::{DocumentOptions, assemble},
    description::{SettingDescription, anchor_id},
    xref::XrefFormatter,
};

/// Rendering target for cross-references inside prose.
///
/// References are rendered exactly once per run with the chosen style; the
/// summary block carries its own HTML/print gating regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Internal hyperlink anchors, for the HTML build.
    Html,
    /// Plain monospace, for the print/PDF build.
    Print,
}

/// Generates the AsciiDoc configuration reference.
///
/// One generation run enumerates the settings registry, derives formatted
/// description records, and assembles a single document. Runs are
/// synchronous, share no state, and either complete fully or fail.
pub struct DocsGenerator {
    options: DocumentOptions,
    filter: SettingFilter,
    style: OutputStyle,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            options: DocumentOptions::default(),
            filter: SettingFilter::default(),
            style: OutputStyle::Html,
        }
    }
}

impl DocsGenerator {
    /// Creates a generator with default options, filter, and HTML references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document identity options.
    pub fn with_options(mut self, options: DocumentOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the filter restricting which settings are documented.
    pub fn with_filter(mut self, filter: SettingFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the cross-reference rendering style.
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Generates the complete document as one string.
    ///
    /// # Errors
    ///
    /// Returns the registry validation error when the settings manifests are
    /// inconsistent; no partial document is produced.
    pub fn generate(&self) -> Result<String> {
        let settings = SettingsRegistry::enumerate(&self.filter)?;

        let descriptions: Vec<SettingDescription> = settings
            .iter()
            .map(|setting| SettingDescription::from_setting(setting))
            .collect();

        let known_names: BTreeSet<String> = descriptions
            .iter()
            .map(|description| description.name.clone())
            .collect();
        let formatter = XrefFormatter::new(known_names)?;

        let formatted: Vec<SettingDescription> = descriptions
            .iter()
            .map(|description| {
                let render = |name: &str| self.render_reference(name);
                description.formatted(
                    |text| formatter.format(text, &description.name, &render),
                    |names| formatter.rewrite_references(names, &description.name, &render),
                )
            })
            .collect();

        Ok(assemble(&formatted, &self.options))
    }

    /// Generates the document and writes it to `path`, creating missing
    /// parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfdocError::DocumentWrite`] when the target cannot be
    /// created or written, in addition to the errors of [`Self::generate`].
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let document = self.generate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| ConfdocError::DocumentWrite {
                path: parent.to_path_buf(),
                details: err.to_string(),
            })?;
        }

        fs::write(path, document).map_err(|err| ConfdocError::DocumentWrite {
            path: path.to_path_buf(),
            details: err.to_string(),
        })?;

        println!("Generated {}", path.display());
        Ok(())
    }

    fn render_reference(&self, name: &str) -> String {
        match self.style {
            OutputStyle::Html => format!(
                "<<{}{},{}>>",
                self.options.id_prefix,
                anchor_id(name),
                name
            ),
            OutputStyle::Print => format!("+{name}+"),
        }
    }
}
