//! Dashboard slice: the landing page every session gets, whatever modules are enabled.
use packhub_domain::constants::DASHBOARD;
use packhub_kernel::prelude::*;

packhub_kernel::views! {
    /// Counters per workflow stage (packing, transit, warehouse, sale).
    pub Overview => "dashboard/Overview";
    /// Throughput charts backed by the v2 data layer.
    pub Insights => "dashboard/Insights";
}

const SECTION: &str = "Dashboard";
const OVERVIEW: (&str, &str) = ("Overview", "/");

/// The dashboard route table. Not gated: the landing page is always registered.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(DASHBOARD)
        .route(RouteDescriptor::new(
            OVERVIEW.1,
            Overview::lazy(),
            RouteMeta::builder()
                .title("Overview")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Overview"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/insights",
            Insights::lazy(),
            RouteMeta::builder()
                .title("Insights")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[OVERVIEW], "Insights"))
                .feature_flag(DATA_V2)
                .build(),
        ))
}
