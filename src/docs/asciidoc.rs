use super::description::SettingDescription;

/// Default anchor id of the generated summary block.
pub const DEFAULT_SUMMARY_ID: &str = "config-reference";

/// Default human-readable title of the summary block.
pub const DEFAULT_TITLE: &str = "Configuration settings";

/// Default prefix prepended to every per-setting anchor id.
pub const DEFAULT_ID_PREFIX: &str = "config_";

/// Marker prefixed to commercial-edition settings in the summary.
const ENTERPRISE_MARKER: &str = "label:enterprise-edition[Enterprise only]";

/// Line appended to the detail block of internal settings.
const INTERNAL_NOTE: &str =
    "This setting is internal to the server and may be changed or removed at any time.";

/// A first sentence shorter than this that mentions "deprecated" carries no
/// information on its own, so the following sentence is pulled into the
/// summary as well.
const SHORT_DEPRECATION_THRESHOLD: usize = 20;

/// Options controlling document identity: summary anchor, title, and the
/// prefix for per-setting anchors.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Anchor id of the summary block.
    pub id: String,
    /// Title of the summary block.
    pub title: String,
    /// Prefix for per-setting anchor ids.
    pub id_prefix: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_SUMMARY_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

/// Assembles the summary block and one detail block per setting into a
/// single AsciiDoc document.
///
/// `descriptions` must already be sorted and formatted; the assembler only
/// lays out markup. Output is deterministic: identical input yields a
/// byte-identical document.
pub fn assemble(descriptions: &[SettingDescription], options: &DocumentOptions) -> String {
    let mut out = String::new();

    out.push_str(&summary_block(descriptions, options));

    for description in descriptions {
        out.push('\n');
        out.push_str(&detail_block(description, options));
    }

    out
}

/// Renders the summary once, as an HTML-gated table and a complementary
/// print-gated bulleted list. A downstream build selects exactly one via the
/// `nonhtmloutput` attribute.
fn summary_block(descriptions: &[SettingDescription], options: &DocumentOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!("[[{}]]\n.{}\n", options.id, options.title));

    out.push_str("ifndef::nonhtmloutput[]\n[options=\"header\"]\n|===\n|Name|Description\n");
    for description in descriptions {
        let link = format!(
            "<<{}{},{}>>",
            options.id_prefix, description.id, description.name
        );
        let name_cell = if description.enterprise {
            format!("{ENTERPRISE_MARKER} {link}")
        } else {
            link
        };
        out.push_str(&format!(
            "|{}|{}\n",
            name_cell,
            escape_table_cell(&shorten_description(description.effective_description()))
        ));
    }
    out.push_str("|===\nendif::nonhtmloutput[]\n");

    out.push_str("\nifdef::nonhtmloutput[]\n");
    for description in descriptions {
        let marker = if description.enterprise {
            format!("{ENTERPRISE_MARKER} ")
        } else {
            String::new()
        };
        out.push_str(&format!(
            "* {}+{}+: {}\n",
            marker,
            description.name,
            shorten_description(description.effective_description())
        ));
    }
    out.push_str("endif::nonhtmloutput[]\n");

    out
}

/// Renders the detail block for one setting: labeled anchor, name heading,
/// and the attribute table with conditional rows.
fn detail_block(description: &SettingDescription, options: &DocumentOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "[[{}{},{}]]\n.{}\n",
        options.id_prefix, description.id, description.name, description.name
    ));
    out.push_str("[cols=\"<1h,<4\"]\n|===\n");

    out.push_str(&format!(
        "|Description a|{}\n",
        escape_table_cell(description.effective_description())
    ));
    out.push_str(&format!(
        "|Valid values a|{}\n",
        escape_table_cell(&description.validation_message)
    ));

    if description.dynamic {
        out.push_str("|Dynamic a|true\n");
    }
    if let Some(default_value) = &description.default_value {
        out.push_str(&format!(
            "|Default value m|{}\n",
            escape_table_cell(default_value)
        ));
    }
    if description.deprecated {
        out.push_str(&format!(
            "|Deprecated a|{}\n",
            escape_table_cell(&description.deprecation_sentence())
        ));
        if let Some(replaced_by) = &description.replaced_by {
            out.push_str(&format!(
                "|Replaced by a|{}\n",
                escape_table_cell(replaced_by)
            ));
        }
    }
    if description.internal {
        out.push_str(&format!("|Internal a|{INTERNAL_NOTE}\n"));
    }

    out.push_str("|===\n");
    out
}

/// Escapes the table separator so prose cannot corrupt the column structure.
fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Shortens a description to its first sentence for the summary.
///
/// A very short first sentence mentioning "deprecated" pulls in the next
/// sentence too, so the summary never reads as a bare "Deprecated.".
pub(super) fn shorten_description(text: &str) -> String {
    let (first, rest) = split_first_sentence(text);

    if first.len() < SHORT_DEPRECATION_THRESHOLD
        && first.to_ascii_lowercase().contains("deprecated")
        && !rest.is_empty()
    {
        let (second, _) = split_first_sentence(rest);
        return format!("{first} {second}");
    }

    first.to_string()
}

/// Splits at the first sentence boundary, a period followed by whitespace.
/// Dots inside setting names never qualify.
fn split_first_sentence(text: &str) -> (&str, &str) {
    match text.find(". ") {
        Some(pos) => (&text[..=pos], text[pos + 2..].trim_start()),
        None => (text, ""),
    }
}
