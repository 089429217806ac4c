//! Boot-time feature flag resolution.
//!
//! Flags are read once from an explicit [`FlagsConfig`] and frozen into a [`FeatureFlags`]
//! value that is passed to route composition. Nothing here reads the process environment;
//! layering env overrides is the config loader's job.
//!
//! Resolution never fails: a missing or unparseable value disables its capability and a
//! warning is logged.

use packhub_domain::config::{FlagValue, FlagsConfig};
use packhub_domain::constants::{DATA_V2, UI_V2};
use packhub_domain::features::ModuleSet;
use packhub_domain::version::{DataLayer, UiVersion};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

const TRUTHY: [&str; 5] = ["true", "1", "yes", "on", "enabled"];
const FALSY: [&str; 6] = ["false", "0", "no", "off", "disabled", ""];

/// Resolved, read-only capability set for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    modules: ModuleSet,
    ui: UiVersion,
    data: DataLayer,
    toggles: BTreeMap<String, bool>,
}

impl FeatureFlags {
    /// Resolves raw configuration values into booleans.
    #[must_use]
    pub fn resolve(config: &FlagsConfig) -> Self {
        let modules = ModuleSet::parse_list(&config.modules.as_text());
        let ui = parse_version("ui_version", &config.ui_version);
        let data = parse_version("data_version", &config.data_version);
        let toggles = config
            .toggles
            .iter()
            .map(|(name, raw)| (name.clone(), parse_switch(name, raw)))
            .collect();

        Self { modules, ui, data, toggles }
    }

    /// Replaces the enabled module set.
    #[must_use]
    pub const fn with_modules(mut self, modules: ModuleSet) -> Self {
        self.modules = modules;
        self
    }

    #[must_use]
    pub const fn with_ui(mut self, ui: UiVersion) -> Self {
        self.ui = ui;
        self
    }

    #[must_use]
    pub const fn with_data(mut self, data: DataLayer) -> Self {
        self.data = data;
        self
    }

    /// Sets a named toggle.
    #[must_use]
    pub fn with_toggle(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.toggles.insert(name.into(), enabled);
        self
    }

    /// Answers whether the capability `flag` is on.
    ///
    /// Module names check the module set, `ui_v2`/`data_v2` check the version groups, and
    /// anything else is looked up among the named toggles. Unknown names are off.
    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        match flag {
            UI_V2 => self.ui == UiVersion::V2,
            DATA_V2 => self.data == DataLayer::V2,
            _ => {
                let module = ModuleSet::from(flag);
                if module.is_empty() {
                    self.toggles.get(flag).copied().unwrap_or(false)
                } else {
                    self.modules.contains(module)
                }
            },
        }
    }

    #[must_use]
    pub const fn modules(&self) -> ModuleSet {
        self.modules
    }

    #[must_use]
    pub const fn ui(&self) -> UiVersion {
        self.ui
    }

    #[must_use]
    pub const fn data(&self) -> DataLayer {
        self.data
    }

    pub fn toggles(&self) -> impl Iterator<Item = (&str, bool)> {
        self.toggles.iter().map(|(name, on)| (name.as_str(), *on))
    }
}

fn parse_switch(name: &str, raw: &FlagValue) -> bool {
    if let FlagValue::Bool(on) = raw {
        return *on;
    }
    let raw = raw.as_text();
    let value = raw.trim();
    if TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        return true;
    }
    if !FALSY.iter().any(|f| f.eq_ignore_ascii_case(value)) {
        warn!(flag = name, value = %raw, "Unparseable flag value, treating as disabled");
    }
    false
}

fn parse_version<V>(name: &str, raw: &FlagValue) -> V
where
    V: FromStr + Default,
{
    let raw = raw.as_text();
    let value = raw.trim();
    if value.is_empty() {
        return V::default();
    }
    V::from_str(value).unwrap_or_else(|_| {
        warn!(flag = name, value = %raw, "Unknown version, falling back to v1");
        V::default()
    })
}
