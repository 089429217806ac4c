//! Transit slice: carts moving goods between the packing floor and the warehouse.
use packhub_domain::constants::{CART, TRANSIT};
use packhub_kernel::prelude::*;

packhub_kernel::views! {
    pub CartList => "transit/CartList";
    pub CartDetail => "transit/CartDetail";
    /// Pallets that left packing and have not been received yet.
    pub InTransit => "transit/InTransit";
    pub TransitMap => "transit/TransitMap";
}

pub const CART_KEYS: EntityKeys = EntityKeys::new(CART);

const SECTION: &str = "Transit";
const CARTS: (&str, &str) = ("Carts", "/transit/carts");

/// The transit route table, registered only when the `transit` module is enabled.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(TRANSIT)
        .gated_by(TRANSIT)
        .route(RouteDescriptor::new(
            CARTS.1,
            CartList::lazy(),
            RouteMeta::builder()
                .title("Carts")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Carts"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/transit/carts/:id",
            CartDetail::lazy(),
            RouteMeta::builder()
                .title("Cart")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[CARTS], "Cart"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/transit/pending",
            InTransit::lazy(),
            RouteMeta::builder()
                .title("In transit")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "In transit"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/transit/map",
            TransitMap::lazy(),
            RouteMeta::builder()
                .title("Transit map")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Transit map"))
                .feature_flag(UI_V2)
                .build(),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use packhub_domain::features::ModuleSet;
    use packhub_kernel::routing::compose;

    #[test]
    fn table_is_well_formed() {
        routes().validate().expect("unique paths");
    }

    #[test]
    fn gated_by_the_transit_module() {
        let table = routes();
        assert!(compose([&table], &FeatureFlags::default().with_modules(ModuleSet::PACKING)).is_empty());

        let enabled = compose([&table], &FeatureFlags::default().with_modules(ModuleSet::TRANSIT));
        let paths: Vec<_> = enabled.iter().map(|r| r.path.as_ref()).collect();
        assert_eq!(paths, vec!["/transit/carts", "/transit/carts/:id", "/transit/pending"]);
    }
}
