//! Static registry of the server's configuration settings.
//!
//! Settings are declared as explicit per-namespace manifests rather than
//! discovered at runtime. Each namespace module exposes a constant list of
//! [`Setting`] descriptors; the registry concatenates them, validates the
//! combined collection, and applies filter predicates before documentation
//! generation.

mod cluster;
mod db;
mod filter;
mod internal;
mod provider;
mod server;
mod setting;

#[cfg(test)]
mod tests;

pub use cluster::ClusterSettings;
pub use db::DbSettings;
pub use filter::SettingFilter;
pub use internal::InternalSettings;
pub use provider::{SettingsProvider, SettingsRegistry, enumerate_settings};
pub use server::ServerSettings;
pub use setting::{Setting, SettingFlags, SettingValue, ValueType};
