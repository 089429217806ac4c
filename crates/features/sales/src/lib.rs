//! Sales slice: customers and the sales they place against dispatched stock.
use packhub_domain::constants::{CUSTOMER, SALE, SALES};
use packhub_kernel::prelude::*;

packhub_kernel::views! {
    pub SaleList => "sales/SaleList";
    pub SaleDetail => "sales/SaleDetail";
    pub CustomerList => "sales/CustomerList";
    pub CustomerDetail => "sales/CustomerDetail";
    /// Revenue per caliber and customer, v2 data layer only.
    pub SalesReport => "sales/SalesReport";
}

pub const SALE_KEYS: EntityKeys = EntityKeys::new(SALE);
pub const CUSTOMER_KEYS: EntityKeys = EntityKeys::new(CUSTOMER);

const SECTION: &str = "Sales";
const SALES_LIST: (&str, &str) = ("Sales", "/sales/orders");
const CUSTOMERS: (&str, &str) = ("Customers", "/sales/customers");

/// The sales route table, registered only when the `sales` module is enabled.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(SALES)
        .gated_by(SALES)
        .route(RouteDescriptor::new(
            SALES_LIST.1,
            SaleList::lazy(),
            RouteMeta::builder()
                .title("Sales")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Sales"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/sales/orders/:id",
            SaleDetail::lazy(),
            RouteMeta::builder()
                .title("Sale")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[SALES_LIST], "Sale"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            CUSTOMERS.1,
            CustomerList::lazy(),
            RouteMeta::builder()
                .title("Customers")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Customers"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/sales/customers/:id",
            CustomerDetail::lazy(),
            RouteMeta::builder()
                .title("Customer")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[CUSTOMERS], "Customer"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/sales/reports",
            SalesReport::lazy(),
            RouteMeta::builder()
                .title("Reports")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Reports"))
                .feature_flag(DATA_V2)
                .build(),
        ))
}
