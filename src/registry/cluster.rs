//! Settings for the `cluster.*` namespace, only present in the commercial edition.

use super::{
    provider::SettingsProvider,
    setting::{Setting, SettingFlags, SettingValue, ValueType},
};

/// Namespace marker for clustering settings.
pub struct ClusterSettings;

impl SettingsProvider for ClusterSettings {
    fn settings() -> &'static [Setting] {
        CLUSTER_SETTINGS
    }
}

static CLUSTER_SETTINGS: &[Setting] = &[
    Setting::new(
        "cluster.discovery.endpoints",
        ValueType::ListOf(&ValueType::String),
    )
    .description(
        "Addresses of the other members to contact when this member joins the cluster. Ignored \
         when the member already holds cluster state under server.directories.data",
    )
    .flags(SettingFlags::ENTERPRISE),
    Setting::new("cluster.raft.election_timeout", ValueType::Duration)
        .description(
            "Time a follower waits without leader contact before starting an election. Lower \
             values recover leadership faster at the cost of more spurious elections",
        )
        .default_value(SettingValue::Str("7s"))
        .flags(SettingFlags::ENTERPRISE),
    Setting::new("cluster.routing.policies", ValueType::String)
        .description(
            "Server-side routing policy definitions, given as name|filter pairs separated by \
             semicolons",
        )
        .flags(SettingFlags::ENTERPRISE),
    Setting::new("cluster.routing.ttl", ValueType::Duration)
        .description("Deprecated. How long clients should cache a routing table")
        .default_value(SettingValue::Str("300s"))
        .flags(SettingFlags::DEPRECATED.union(SettingFlags::ENTERPRISE))
        .replaced_by(&["cluster.routing.default_ttl"]),
];
