//! Unit tests for documentation generation
//!
//! Tests cross-reference disposition, sentence normalization, summary
//! shortening, and AsciiDoc assembly. No filesystem dependencies.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::collections::BTreeSet;

use super::{
    DocumentOptions, SettingDescription, XrefFormatter, anchor_id,
    asciidoc::{assemble, shorten_description},
    xref::terminate_sentence,
};
use crate::registry::{Setting, SettingFlags, SettingValue, ValueType};

fn formatter(names: &[&str]) -> XrefFormatter {
    let known: BTreeSet<String> = names.iter().map(|name| (*name).to_string()).collect();
    XrefFormatter::new(known).unwrap()
}

fn link(name: &str) -> String {
    format!("<<config_{name},{name}>>")
}

mod cross_references {
    use super::*;

    #[test]
    fn documented_name_becomes_reference() {
        let formatter = formatter(&["db.other", "db.current"]);

        let result = formatter.format("See db.other for details.", "db.current", &link);

        assert_eq!(result, "See <<config_db.other,db.other>> for details.");
    }

    #[test]
    fn log_filename_wins_over_reference() {
        let formatter = formatter(&["server.logs.debug.level", "db.current"]);

        let result = formatter.format(
            "Written to debug.log when server.logs.debug.level allows it.",
            "db.current",
            &link,
        );

        assert!(result.contains("_debug.log_"));
        assert!(result.contains("<<config_server.logs.debug.level,server.logs.debug.level>>"));
    }

    #[test]
    fn pass_through_marker_strips_and_stays_unlinked() {
        let formatter = formatter(&["db.other", "db.current"]);

        let result = formatter.format("Counters under +db.other+ are unaffected.", "db.current", &link);

        assert_eq!(result, "Counters under db.other are unaffected.");
    }

    #[test]
    fn setting_never_links_to_itself() {
        let formatter = formatter(&["db.current"]);

        let result = formatter.format("If db.current is unset, nothing happens.", "db.current", &link);

        assert_eq!(result, "If +db.current+ is unset, nothing happens.");
    }

    #[test]
    fn unknown_lookalike_left_unmodified() {
        let formatter = formatter(&["db.current"]);

        let result = formatter.format("Listen on 0.0.0.0 to accept all.", "db.current", &link);

        assert_eq!(result, "Listen on 0.0.0.0 to accept all.");
    }

    #[test]
    fn single_segment_token_not_recognized() {
        let formatter = formatter(&["db.current"]);

        let result = formatter.format("A plain word stays a plain word.", "db.current", &link);

        assert_eq!(result, "A plain word stays a plain word.");
    }

    #[test]
    fn rewriting_alone_adds_no_punctuation() {
        let formatter = formatter(&["db.other", "db.current"]);

        let result = formatter.rewrite_references("db.other, db.missing", "db.current", &link);

        assert_eq!(result, "<<config_db.other,db.other>>, db.missing");
    }
}

mod sentence_termination {
    use super::*;

    #[test]
    fn trailing_word_character_gains_period() {
        assert_eq!(terminate_sentence("Maximum heap size"), "Maximum heap size.");
    }

    #[test]
    fn punctuated_paragraph_unchanged() {
        assert_eq!(terminate_sentence("Already done."), "Already done.");
        assert_eq!(terminate_sentence("one of [a, b]"), "one of [a, b]");
    }

    #[test]
    fn empty_paragraph_unchanged() {
        assert_eq!(terminate_sentence(""), "");
    }

    #[test]
    fn formatter_appends_exactly_one_period() {
        let formatter = formatter(&[]);

        let result = formatter.format("Ends on a word", "db.current", &link);

        assert_eq!(result, "Ends on a word.");
    }
}

mod descriptions {
    use super::*;

    const PAGECACHE: Setting = Setting::new("server.memory.pagecache.size", ValueType::ByteSize)
        .description("The amount of memory for mapping store files")
        .documented_default("50% of available memory");

    const RETIRED: Setting = Setting::new("db.retired", ValueType::String)
        .default_value(SettingValue::Str("old"))
        .flags(SettingFlags::DEPRECATED)
        .replaced_by(&["db.modern", "db.newer"]);

    #[test]
    fn documented_default_wins_over_programmatic() {
        let description = SettingDescription::from_setting(&PAGECACHE);

        assert_eq!(
            description.default_value.as_deref(),
            Some("50% of available memory")
        );
    }

    #[test]
    fn programmatic_default_used_without_override() {
        let description = SettingDescription::from_setting(&RETIRED);

        assert_eq!(description.default_value.as_deref(), Some("old"));
    }

    #[test]
    fn replacements_joined_by_comma() {
        let description = SettingDescription::from_setting(&RETIRED);

        assert!(description.deprecated);
        assert_eq!(description.replaced_by.as_deref(), Some("db.modern, db.newer"));
    }

    #[test]
    fn missing_description_falls_back_to_validation_message() {
        let description = SettingDescription::from_setting(&RETIRED);

        assert_eq!(description.effective_description(), "a string");
    }

    #[test]
    fn formatted_derives_without_mutating_original() {
        let original = SettingDescription::from_setting(&PAGECACHE);

        let derived = original.formatted(|text| text.to_uppercase(), |names| names.to_string());

        assert_eq!(
            derived.description.as_deref(),
            Some("THE AMOUNT OF MEMORY FOR MAPPING STORE FILES")
        );
        assert_eq!(
            original.description.as_deref(),
            Some("The amount of memory for mapping store files")
        );
        assert_eq!(derived.name, original.name);
    }

    #[test]
    fn replacement_list_skips_prose_normalization() {
        let original = SettingDescription::from_setting(&RETIRED);

        let derived = original.formatted(terminate_sentence, |names| names.to_string());

        // The replacement list is a bare list of names; only the
        // sentence-shaped fields gain trailing punctuation.
        assert_eq!(derived.replaced_by.as_deref(), Some("db.modern, db.newer"));
        assert_eq!(derived.validation_message, "a string.");
    }

    #[test]
    fn deprecation_sentence_names_the_setting() {
        let description = SettingDescription::from_setting(&RETIRED);

        assert_eq!(
            description.deprecation_sentence(),
            "The +db.retired+ configuration setting has been deprecated."
        );
    }

    #[test]
    fn anchor_id_replaces_angle_brackets() {
        assert_eq!(
            anchor_id("internal.block_cache.size.<pool>"),
            "internal.block_cache.size._pool_"
        );
        assert_eq!(anchor_id("db.plain.name"), "db.plain.name");
    }
}

mod summary_shortening {
    use super::*;

    #[test]
    fn keeps_first_sentence_only() {
        assert_eq!(
            shorten_description("First sentence. Second sentence."),
            "First sentence."
        );
    }

    #[test]
    fn single_sentence_returned_whole() {
        assert_eq!(shorten_description("Only one sentence."), "Only one sentence.");
    }

    #[test]
    fn short_deprecation_pulls_in_next_sentence() {
        assert_eq!(
            shorten_description("Deprecated. Use db.modern instead. More detail."),
            "Deprecated. Use db.modern instead."
        );
    }

    #[test]
    fn long_first_sentence_mentioning_deprecated_stands_alone() {
        let text = "This long sentence mentions deprecated behavior. Second part.";

        assert_eq!(
            shorten_description(text),
            "This long sentence mentions deprecated behavior."
        );
    }

    #[test]
    fn dots_inside_setting_names_are_not_boundaries() {
        assert_eq!(
            shorten_description("Controlled by db.some.setting at runtime. Extra."),
            "Controlled by db.some.setting at runtime."
        );
    }
}

mod assembly {
    use super::*;

    const ALPHA: Setting = Setting::new("db.alpha", ValueType::Duration)
        .description("Waits before acting")
        .default_value(SettingValue::Str("5s"))
        .flags(SettingFlags::DYNAMIC);

    const BETA: Setting = Setting::new("db.beta", ValueType::String)
        .description("Pairs are given as key|value tokens")
        .flags(SettingFlags::ENTERPRISE);

    const HIDDEN: Setting = Setting::new("internal.gamma", ValueType::Boolean)
        .description("Internal toggle")
        .default_value(SettingValue::Bool(false))
        .flags(SettingFlags::INTERNAL);

    fn descriptions() -> Vec<SettingDescription> {
        [&ALPHA, &BETA, &HIDDEN]
            .into_iter()
            .map(SettingDescription::from_setting)
            .collect()
    }

    #[test]
    fn summary_and_details_agree_on_names() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        for name in ["db.alpha", "db.beta", "internal.gamma"] {
            assert!(document.contains(&format!("|<<config_{name},{name}>>|"))
                || document.contains(&format!(" <<config_{name},{name}>>|")));
            assert!(document.contains(&format!("[[config_{name},{name}]]")));
        }
    }

    #[test]
    fn anchor_ids_unique_within_document() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        let anchors: Vec<&str> = document
            .lines()
            .filter(|line| line.starts_with("[["))
            .collect();
        let unique: BTreeSet<&str> = anchors.iter().copied().collect();
        assert_eq!(unique.len(), anchors.len());
    }

    #[test]
    fn conditional_rows_appear_only_when_applicable() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        assert!(document.contains("|Dynamic a|true"));
        assert!(document.contains("|Default value m|5s"));
        assert!(document.contains("|Internal a|"));
        assert!(!document.contains("|Deprecated a|"));
    }

    #[test]
    fn table_separator_escaped_and_row_structure_intact() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        assert!(document.contains("Pairs are given as key\\|value tokens"));

        let beta_block = document
            .split("[[config_db.beta,db.beta]]")
            .nth(1)
            .unwrap();
        let beta_table: Vec<&str> = beta_block
            .lines()
            .skip_while(|line| *line != "|===")
            .skip(1)
            .take_while(|line| *line != "|===")
            .collect();
        // Description and Valid values only; the raw pipe must not add a row.
        assert_eq!(beta_table.len(), 2);
    }

    #[test]
    fn enterprise_marker_prefixes_summary_entries() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        assert!(
            document
                .contains("|label:enterprise-edition[Enterprise only] <<config_db.beta,db.beta>>|")
        );
        assert!(document.contains("* label:enterprise-edition[Enterprise only] +db.beta+:"));
    }

    #[test]
    fn summary_gated_to_complementary_output_formats() {
        let document = assemble(&descriptions(), &DocumentOptions::default());

        assert!(document.contains("ifndef::nonhtmloutput[]"));
        assert!(document.contains("ifdef::nonhtmloutput[]"));
        assert_eq!(document.matches("endif::nonhtmloutput[]").count(), 2);
    }

    #[test]
    fn custom_options_shape_anchors_and_title() {
        let options = DocumentOptions {
            id: "settings-list".to_string(),
            title: "All settings".to_string(),
            id_prefix: "setting_".to_string(),
        };

        let document = assemble(&descriptions(), &options);

        assert!(document.starts_with("[[settings-list]]\n.All settings\n"));
        assert!(document.contains("[[setting_db.alpha,db.alpha]]"));
    }
}
