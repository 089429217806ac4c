//! Everything a business module needs to declare its route table.

pub use crate::flags::FeatureFlags;
pub use crate::query::{EntityKeys, QueryKey};
pub use crate::routing::{
    Crumb, Navigation, RouteDescriptor, RouteMeta, RouteRegistry, RouteTable, RoutingError,
};
pub use crate::view::{LazyView, View};
pub use packhub_domain::constants::{DATA_V2, UI_V2};
