//! Settings for the `internal.*` namespace, unsupported and hidden by default.

use super::{
    provider::SettingsProvider,
    setting::{Setting, SettingFlags, SettingValue, ValueType},
};

/// Namespace marker for internal/unsupported settings.
pub struct InternalSettings;

impl SettingsProvider for InternalSettings {
    fn settings() -> &'static [Setting] {
        INTERNAL_SETTINGS
    }
}

static INTERNAL_SETTINGS: &[Setting] = &[
    Setting::new("internal.tx_state.memory_tracking", ValueType::Boolean)
        .description(
            "Enable off-heap memory tracking for transaction state. Counters reported under \
             +internal.tx_state+ are unaffected by this toggle",
        )
        .default_value(SettingValue::Bool(true))
        .flags(SettingFlags::INTERNAL),
    Setting::new("internal.block_cache.size.<pool>", ValueType::ByteSize)
        .description("Per-pool override for the block cache size")
        .flags(SettingFlags::INTERNAL),
    Setting::new("internal.cypher.replan_interval", ValueType::Duration)
        .description(
            "The minimum time between possible replans of a query plan. Affects plans \
             invalidated by db.index.default_provider changes as well",
        )
        .default_value(SettingValue::Str("10s"))
        .flags(SettingFlags::INTERNAL.union(SettingFlags::DYNAMIC)),
];
