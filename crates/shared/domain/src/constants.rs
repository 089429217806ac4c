//! Canonical names shared between configuration, route tables and query keys.

// Business modules, in declaration order.
pub const DASHBOARD: &str = "dashboard";
pub const PACKING: &str = "packing";
pub const TRANSIT: &str = "transit";
pub const WAREHOUSE: &str = "warehouse";
pub const DISPATCH: &str = "dispatch";
pub const SALES: &str = "sales";

// Capabilities derived from the version flag groups.
pub const UI_V2: &str = "ui_v2";
pub const DATA_V2: &str = "data_v2";

// Entities.
pub const BOX: &str = "boxes";
pub const PALLET: &str = "pallets";
pub const CART: &str = "carts";
pub const LOCATION: &str = "locations";
pub const DISPATCH_ORDER: &str = "dispatches";
pub const CUSTOMER: &str = "customers";
pub const SALE: &str = "sales";
