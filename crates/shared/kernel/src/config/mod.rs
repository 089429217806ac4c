use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `PACKHUB__FLAGS__MODULES`.
pub const ENV_PREFIX: &str = "PACKHUB";
/// Config file used when no path is given (`packhub.toml`, `packhub.json`, ...).
pub const DEFAULT_CONFIG: &str = "packhub";

/// Custom error type for config loading.
#[packhub_derive::packhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or [`DEFAULT_CONFIG`] in the working directory. The format is
///    inferred from the extension; an extensionless path probes the supported formats. An
///    explicit path must exist, the default one is optional.
/// 2. **Environment Overrides**: variables prefixed with `PACKHUB__`, nested with `__`
///    (`PACKHUB__FLAGS__UI_VERSION` maps to `flags.ui_version`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a file is unreadable, or
/// the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use packhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(path, None)
}

/// Same as [`load_config`], reading overrides from `vars` instead of the process environment.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not match `T`.
pub fn load_config_with_env<T, I, K, V>(
    path: Option<impl AsRef<Path>>,
    vars: I,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    build(path, Some(vars))
}

fn build<T>(
    path: Option<impl AsRef<Path>>,
    vars: Option<config::Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .source(vars),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
