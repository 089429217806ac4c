//! Route tables and their boot-time composition.
//!
//! Every business module exports one static [`RouteTable`]. At startup the application
//! registers the tables in module-declaration order and composes them against the resolved
//! [`FeatureFlags`](crate::flags::FeatureFlags): tables and routes whose flag resolves false
//! are left out. Matching and rendering belong to the presentation layer.

mod descriptor;
mod error;
mod navigation;
mod registry;
mod table;

pub use descriptor::{Crumb, RouteDescriptor, RouteMeta};
pub use error::{RoutingError, RoutingErrorExt};
pub use navigation::{Navigation, Section};
pub use registry::{RouteRegistry, RouteRegistryBuilder, compose};
pub use table::RouteTable;
