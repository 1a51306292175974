//! Settings for the `server.*` namespace: network, memory, directories, logs.

use super::{
    provider::SettingsProvider,
    setting::{Setting, SettingFlags, SettingValue, ValueType},
};

/// Namespace marker for general server settings.
pub struct ServerSettings;

impl SettingsProvider for ServerSettings {
    fn settings() -> &'static [Setting] {
        SERVER_SETTINGS
    }
}

static SERVER_SETTINGS: &[Setting] = &[
    Setting::new("server.default_listen_address", ValueType::String)
        .description(
            "Default network interface to listen for incoming connections. To listen for \
             connections on all interfaces, use 0.0.0.0",
        )
        .default_value(SettingValue::Str("localhost")),
    Setting::new("server.bolt.listen_address", ValueType::String)
        .description(
            "Address the protocol connector should bind to. When no address part is given, \
             the value of server.default_listen_address is used",
        )
        .default_value(SettingValue::Str(":7687")),
    Setting::new("server.memory.heap.initial_size", ValueType::ByteSize)
        .description(
            "Initial heap size. If server.memory.heap.max_size is configured, the two should \
             usually be set to the same value to avoid resize pauses",
        )
        .documented_default("Calculated from the memory available to the server"),
    Setting::new("server.memory.heap.max_size", ValueType::ByteSize)
        .description("Maximum heap size")
        .documented_default("Calculated from the memory available to the server"),
    Setting::new("server.memory.pagecache.size", ValueType::ByteSize)
        .description(
            "The amount of memory to use for mapping the store files. If \
             server.memory.pagecache.size is not explicitly configured, the cache is sized at \
             half of the memory left after subtracting the heap size",
        )
        .documented_default("50% of the memory available after the heap"),
    Setting::new("server.directories.data", ValueType::Path)
        .description(
            "Path of the data directory. This directory must not be shared between instances",
        )
        .default_value(SettingValue::Str("data")),
    Setting::new("server.directories.logs", ValueType::Path)
        .description("Path of the directory where log files are written, including debug.log")
        .default_value(SettingValue::Str("logs")),
    Setting::new(
        "server.logs.debug.level",
        ValueType::Enum(&["DEBUG", "INFO", "WARN", "ERROR"]),
    )
    .description("Log level threshold for entries written to debug.log")
    .default_value(SettingValue::Str("INFO"))
    .flags(SettingFlags::DYNAMIC),
    Setting::new("server.logs.query.threshold", ValueType::Duration)
        .description(
            "If execution of a query takes longer than this threshold, the query is logged to \
             query.log. A value of 0 logs every query",
        )
        .default_value(SettingValue::Str("0s"))
        .flags(SettingFlags::DYNAMIC),
];
