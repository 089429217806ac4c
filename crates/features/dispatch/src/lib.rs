//! Dispatch slice: orders that take pallets out of the warehouse.
use packhub_domain::constants::{DISPATCH, DISPATCH_ORDER};
use packhub_kernel::prelude::*;

packhub_kernel::views! {
    pub DispatchList => "dispatch/DispatchList";
    pub DispatchForm => "dispatch/DispatchForm";
    pub DispatchDetail => "dispatch/DispatchDetail";
    /// Loading-dock planning board.
    pub DockBoard => "dispatch/DockBoard";
}

pub const DISPATCH_KEYS: EntityKeys = EntityKeys::new(DISPATCH_ORDER);

const SECTION: &str = "Dispatch";
const DISPATCHES: (&str, &str) = ("Dispatches", "/dispatch/orders");

/// The dispatch route table, registered only when the `dispatch` module is enabled.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(DISPATCH)
        .gated_by(DISPATCH)
        .route(RouteDescriptor::new(
            DISPATCHES.1,
            DispatchList::lazy(),
            RouteMeta::builder()
                .title("Dispatches")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Dispatches"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/dispatch/orders/new",
            DispatchForm::lazy(),
            RouteMeta::builder()
                .title("New dispatch")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[DISPATCHES], "New dispatch"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/dispatch/orders/:id",
            DispatchDetail::lazy(),
            RouteMeta::builder()
                .title("Dispatch")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[DISPATCHES], "Dispatch"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/dispatch/board",
            DockBoard::lazy(),
            RouteMeta::builder()
                .title("Dock board")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Dock board"))
                .feature_flag(UI_V2)
                .build(),
        ))
}
