//! Facade crate for `PackHub` business modules and shared primitives.
//! Re-exports domain/kernel and assembles the module route tables in declaration order.
//! Keep this crate thin: it composes other crates, it does not implement business logic.
//!
//! ## Usage
//! - Add `packhub` with the modules you ship (`full` by default).
//! - Resolve [`FeatureFlags`](kernel::flags::FeatureFlags) once at boot and call [`navigation`].

pub use packhub_domain as domain;
pub use packhub_kernel as kernel;

use packhub_kernel::flags::FeatureFlags;
use packhub_kernel::routing::{Navigation, RouteRegistry, RouteTable};
use tracing::debug;

/// Business modules compiled into this build.
pub mod modules {
    pub use packhub_dashboard as dashboard;
    #[cfg(feature = "dispatch")]
    pub use packhub_dispatch as dispatch;
    #[cfg(feature = "packing")]
    pub use packhub_packing as packing;
    #[cfg(feature = "sales")]
    pub use packhub_sales as sales;
    #[cfg(feature = "transit")]
    pub use packhub_transit as transit;
    #[cfg(feature = "warehouse")]
    pub use packhub_warehouse as warehouse;

    /// Build-time enabled modules (by Cargo feature), in declaration order.
    pub const ENABLED: &[&str] = &[
        packhub_domain::constants::DASHBOARD,
        #[cfg(feature = "packing")]
        packhub_domain::constants::PACKING,
        #[cfg(feature = "transit")]
        packhub_domain::constants::TRANSIT,
        #[cfg(feature = "warehouse")]
        packhub_domain::constants::WAREHOUSE,
        #[cfg(feature = "dispatch")]
        packhub_domain::constants::DISPATCH,
        #[cfg(feature = "sales")]
        packhub_domain::constants::SALES,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Route tables of every compiled module, in declaration order.
#[must_use]
pub fn tables() -> Vec<RouteTable> {
    let mut tables = Vec::with_capacity(modules::ENABLED.len());

    tables.push(modules::dashboard::routes());
    #[cfg(feature = "packing")]
    tables.push(modules::packing::routes());
    #[cfg(feature = "transit")]
    tables.push(modules::transit::routes());
    #[cfg(feature = "warehouse")]
    tables.push(modules::warehouse::routes());
    #[cfg(feature = "dispatch")]
    tables.push(modules::dispatch::routes());
    #[cfg(feature = "sales")]
    tables.push(modules::sales::routes());

    tables
}

/// The application-wide registry.
#[must_use]
pub fn registry() -> RouteRegistry {
    let registry = RouteRegistry::builder().register_all(tables()).build();
    debug!(modules = registry.tables().len(), "Route registry assembled");
    registry
}

/// Composes the navigation visible under `flags`.
#[must_use]
pub fn navigation(flags: &FeatureFlags) -> Navigation {
    registry().compose(flags)
}
