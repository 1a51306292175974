use std::collections::BTreeSet;

use regex::{Captures, Regex};

use crate::core::Result;

/// Suffix marking a token as a log file name rather than a setting reference.
const LOG_FILE_SUFFIX: &str = ".log";

/// Sentinel wrapped around a token to opt out of cross-referencing.
const PASS_THROUGH_MARKER: char = '+';

/// Recognizes tokens shaped like setting names: two or more lowercase
/// alphanumeric segments joined by `.` or `_`, optionally wrapped in the
/// pass-through marker. Purely syntactic; membership in the documented set
/// is checked separately.
const SETTING_NAME_PATTERN: &str = r"\+?[a-z0-9]+(?:[._][a-z0-9]+)+\+?";

/// Rewrites setting names mentioned in prose into cross-references.
///
/// Holds no mutable state; the only data carried across calls is the
/// read-only set of names being documented in the current run.
pub struct XrefFormatter {
    pattern: Regex,
    known_names: BTreeSet<String>,
}

impl XrefFormatter {
    /// Creates a formatter over the set of documented setting names.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfdocError::Pattern`] if the recognition pattern
    /// fails to compile.
    pub fn new(known_names: BTreeSet<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(SETTING_NAME_PATTERN)?,
            known_names,
        })
    }

    /// Rewrites every recognized token in a prose paragraph and normalizes
    /// the trailing sentence punctuation.
    ///
    /// For text that is not a sentence, such as a bare list of names, use
    /// [`Self::rewrite_references`] instead.
    pub fn format<F>(&self, text: &str, current_setting: &str, render_reference: &F) -> String
    where
        F: Fn(&str) -> String,
    {
        terminate_sentence(&self.rewrite_references(text, current_setting, render_reference))
    }

    /// Rewrites every recognized token in `text` without touching the
    /// surrounding punctuation.
    ///
    /// `current_setting` is the name of the setting whose prose is being
    /// rendered; `render_reference` produces the markup for a genuine
    /// reference to another documented setting.
    ///
    /// Each token takes the first matching disposition:
    ///
    /// 1. ends with `.log`: rendered as a file name, never a link
    /// 2. wrapped in `+`: markers stripped, text left unlinked
    /// 3. equal to `current_setting`: inline code, a setting never links to itself
    /// 4. not a documented name: left unmodified
    /// 5. otherwise: `render_reference` applies
    pub fn rewrite_references<F>(
        &self,
        text: &str,
        current_setting: &str,
        render_reference: &F,
    ) -> String
    where
        F: Fn(&str) -> String,
    {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| {
                self.dispose(&caps[0], current_setting, render_reference)
            })
            .into_owned()
    }

    fn dispose<F>(&self, token: &str, current_setting: &str, render_reference: &F) -> String
    where
        F: Fn(&str) -> String,
    {
        if token.ends_with(LOG_FILE_SUFFIX) {
            return format!("_{token}_");
        }

        if let Some(inner) = token
            .strip_prefix(PASS_THROUGH_MARKER)
            .and_then(|t| t.strip_suffix(PASS_THROUGH_MARKER))
        {
            return inner.to_string();
        }

        if token == current_setting {
            return format!("+{token}+");
        }

        if !self.known_names.contains(token) {
            return token.to_string();
        }

        render_reference(token)
    }
}

/// Appends a period when a paragraph trails off on a word character.
///
/// Letters, digits, and underscores count as word characters; text already
/// ending in punctuation, and empty text, are returned unchanged.
pub fn terminate_sentence(text: &str) -> String {
    match text.chars().last() {
        Some(c) if c.is_alphanumeric() || c == '_' => format!("{text}."),
        _ => text.to_string(),
    }
}
