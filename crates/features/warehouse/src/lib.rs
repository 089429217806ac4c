//! Warehouse slice: storage locations and stock on hand.
use packhub_domain::constants::{LOCATION, WAREHOUSE};
use packhub_kernel::prelude::*;

packhub_kernel::views! {
    pub LocationList => "warehouse/LocationList";
    pub LocationDetail => "warehouse/LocationDetail";
    /// Received pallets grouped by location.
    pub StockOverview => "warehouse/StockOverview";
    /// Movement ledger; only the v2 data layer exposes movements.
    pub StockLedger => "warehouse/StockLedger";
}

pub const LOCATION_KEYS: EntityKeys = EntityKeys::new(LOCATION);
pub const STOCK_KEYS: EntityKeys = EntityKeys::new("stock");

const SECTION: &str = "Warehouse";
const STOCK: (&str, &str) = ("Stock", "/warehouse/stock");
const LOCATIONS: (&str, &str) = ("Locations", "/warehouse/locations");

/// The warehouse route table, registered only when the `warehouse` module is enabled.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(WAREHOUSE)
        .gated_by(WAREHOUSE)
        .route(RouteDescriptor::new(
            STOCK.1,
            StockOverview::lazy(),
            RouteMeta::builder()
                .title("Stock")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Stock"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            LOCATIONS.1,
            LocationList::lazy(),
            RouteMeta::builder()
                .title("Locations")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Locations"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/warehouse/locations/:id",
            LocationDetail::lazy(),
            RouteMeta::builder()
                .title("Location")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[LOCATIONS], "Location"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/warehouse/stock/ledger",
            StockLedger::lazy(),
            RouteMeta::builder()
                .title("Stock ledger")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[STOCK], "Stock ledger"))
                .feature_flag(DATA_V2)
                .build(),
        ))
}
