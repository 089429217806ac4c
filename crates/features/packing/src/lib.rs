//! Packing feature slice: boxes, pallets, and pallet code generation.
pub mod code;
pub mod views;

use crate::views::{BoxDetail, BoxForm, BoxList, PalletBoard, PalletDetail, PalletForm, PalletList};
use packhub_domain::constants::{BOX, PACKING, PALLET};
use packhub_kernel::prelude::*;

pub use code::{PalletCode, generate_code, generate_code_today};

pub const BOX_KEYS: EntityKeys = EntityKeys::new(BOX);
pub const PALLET_KEYS: EntityKeys = EntityKeys::new(PALLET);

const SECTION: &str = "Packing";

const BOXES: (&str, &str) = ("Boxes", "/packing/boxes");
const PALLETS: (&str, &str) = ("Pallets", "/packing/pallets");

/// The packing route table, registered only when the `packing` module is enabled.
#[must_use]
pub fn routes() -> RouteTable {
    RouteTable::new(PACKING)
        .gated_by(PACKING)
        .route(RouteDescriptor::new(
            BOXES.1,
            BoxList::lazy(),
            RouteMeta::builder()
                .title("Boxes")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Boxes"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/packing/boxes/new",
            BoxForm::lazy(),
            RouteMeta::builder()
                .title("New box")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[BOXES], "New box"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/packing/boxes/:id",
            BoxDetail::lazy(),
            RouteMeta::builder()
                .title("Box")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[BOXES], "Box"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            PALLETS.1,
            PalletList::lazy(),
            RouteMeta::builder()
                .title("Pallets")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[], "Pallets"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/packing/pallets/new",
            PalletForm::lazy(),
            RouteMeta::builder()
                .title("New pallet")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[PALLETS], "New pallet"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/packing/pallets/:id",
            PalletDetail::lazy(),
            RouteMeta::builder()
                .title("Pallet")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[PALLETS], "Pallet"))
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/packing/pallets/board",
            PalletBoard::lazy(),
            RouteMeta::builder()
                .title("Pallet board")
                .section(SECTION)
                .breadcrumbs(Crumb::trail(SECTION, &[PALLETS], "Board"))
                .feature_flag(UI_V2)
                .build(),
        ))
}
