//! Kernel utilities shared across business modules.
//! Keep this crate free of module-specific knowledge; it provides the mechanics modules
//! plug into: config loading, boot-time flag resolution, lazily resolved views, route
//! tables with their composition, and the query-key convention.
//!
//! ## Composing navigation
//! ```rust
//! use packhub_kernel::prelude::*;
//!
//! packhub_kernel::views! {
//!     pub Overview => "dashboard/Overview";
//! }
//!
//! let table = RouteTable::new("dashboard").route(RouteDescriptor::new(
//!     "/",
//!     Overview::lazy(),
//!     RouteMeta::builder().title("Overview").build(),
//! ));
//!
//! let registry = RouteRegistry::builder().register(table).build();
//! let navigation = registry.compose(&FeatureFlags::default());
//! assert_eq!(navigation.paths().collect::<Vec<_>>(), vec!["/"]);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use packhub_kernel::config::load_config;
//! use packhub_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("packhub")).unwrap_or_default();
//! ```

pub mod config;
pub mod flags;
pub mod prelude;
pub mod query;
pub mod routing;
pub mod view;

pub use packhub_domain as domain;
