use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub logging: LoggingConfig,
    pub flags: FlagsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Extra module-directed filter, e.g. `packhub_kernel=debug`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files; file logging is off when unset.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// Raw feature-flag values exactly as read from file/environment.
///
/// Any scalar or list is accepted here; resolution into booleans happens once at boot and
/// is lossy, so a malformed entry disables its capability instead of failing startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    /// Module names, as a comma-separated string or a list; `*` selects every module.
    pub modules: FlagValue,
    /// UI generation, `v1` or `v2`.
    pub ui_version: FlagValue,
    /// Data-layer generation, `v1` or `v2`.
    pub data_version: FlagValue,
    /// Named boolean toggles.
    pub toggles: BTreeMap<String, FlagValue>,
}

/// One flag value in whatever shape the source wrote it.
///
/// TOML gives native booleans and integers, environment variables give strings. All of
/// them collapse to text through [`FlagValue::as_text`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Lists are joined with `,`.
    List(Vec<String>),
}

impl FlagValue {
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
            Self::Int(value) => Cow::Owned(value.to_string()),
            Self::Float(value) => Cow::Owned(value.to_string()),
            Self::Text(value) => Cow::Borrowed(value),
            Self::List(values) => Cow::Owned(values.join(",")),
        }
    }

    /// True for an empty string or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::List(values) => values.is_empty(),
            _ => false,
        }
    }
}

impl Default for FlagValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            directory: None,
            json: false,
            max_files: 10,
        }
    }
}
