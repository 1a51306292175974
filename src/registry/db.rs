//! Settings for the `db.*` namespace: transactions, checkpointing, indexes.

use super::{
    provider::SettingsProvider,
    setting::{Setting, SettingFlags, SettingValue, ValueType},
};

/// Namespace marker for per-database settings.
pub struct DbSettings;

impl SettingsProvider for DbSettings {
    fn settings() -> &'static [Setting] {
        DB_SETTINGS
    }
}

static DB_SETTINGS: &[Setting] = &[
    Setting::new("db.transaction.timeout", ValueType::Duration)
        .description(
            "The maximum time interval of a transaction within which it should be completed. \
             A value of 0 disables the timeout",
        )
        .default_value(SettingValue::Str("0s"))
        .flags(SettingFlags::DYNAMIC),
    Setting::new("db.transaction.concurrent.maximum", ValueType::Integer)
        .description(
            "The maximum number of concurrently running transactions. A value of 0 means \
             unlimited",
        )
        .default_value(SettingValue::Int(1000))
        .flags(SettingFlags::DYNAMIC),
    Setting::new("db.checkpoint.interval.time", ValueType::Duration)
        .description(
            "Configures the time interval between checkpoints. The database flushes at the \
             first opportunity after this interval, unless db.checkpoint.interval.tx triggers \
             one first",
        )
        .default_value(SettingValue::Str("15m")),
    Setting::new("db.checkpoint.interval.tx", ValueType::Integer)
        .description(
            "Configures the transaction interval between checkpoints. The database flushes \
             after this many transactions, unless db.checkpoint.interval.time triggers one \
             first",
        )
        .default_value(SettingValue::Int(100000)),
    Setting::new("db.tx_log.rotation.size", ValueType::ByteSize)
        .description("Specifies at which file size the transaction log auto rotates")
        .default_value(SettingValue::Str("256m"))
        .flags(SettingFlags::DYNAMIC),
    Setting::new("db.tx_log.rotation.retention_policy", ValueType::String)
        .description(
            "Tells the database how long to keep rotated transaction logs, as an amount of \
             time or an amount of storage, for example 2 days or 512m",
        )
        .default_value(SettingValue::Str("2 days"))
        .flags(SettingFlags::DYNAMIC),
    Setting::new(
        "db.index.default_provider",
        ValueType::Enum(&["range", "trigram", "vector"]),
    )
    .description("Index provider used when a schema index is created without an explicit one")
    .default_value(SettingValue::Str("range")),
    Setting::new("db.index.default_schema_provider", ValueType::String)
        .description("Deprecated. Use db.index.default_provider to select an index provider")
        .flags(SettingFlags::DEPRECATED)
        .replaced_by(&["db.index.default_provider"]),
    Setting::new("db.memory.transaction.total.max", ValueType::ByteSize)
        .description(
            "Limit of the total memory all transactions in one database can consume. A value \
             of 0 means unlimited",
        )
        .default_value(SettingValue::Str("0"))
        .flags(SettingFlags::DYNAMIC.union(SettingFlags::ENTERPRISE)),
];
