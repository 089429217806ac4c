#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `PackHub` crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! packhub-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a crate error type wired for context propagation.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, Source>` for every variant carrying a source error.
/// * `From<Source>` for every variant carrying a source error.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///    declare `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use packhub_derive::packhub_error;
/// use std::borrow::Cow;
///
/// #[packhub_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal config error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn packhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
