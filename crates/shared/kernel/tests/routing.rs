use packhub_kernel::domain::features::ModuleSet;
use packhub_kernel::domain::version::UiVersion;
use packhub_kernel::prelude::*;
use packhub_kernel::routing::compose;

packhub_kernel::views! {
    Inbox => "test/Inbox";
    Board => "test/Board";
    Ledger => "test/Ledger";
}

fn route(path: &'static str, view: LazyView, title: &'static str) -> RouteDescriptor {
    RouteDescriptor::new(path, view, RouteMeta::builder().title(title).section("Test").build())
}

fn packing() -> RouteTable {
    RouteTable::new("packing")
        .gated_by("packing")
        .route(route("/boxes", Inbox::lazy(), "Boxes"))
        .route(route("/pallets", Inbox::lazy(), "Pallets"))
}

fn sales() -> RouteTable {
    RouteTable::new("sales").gated_by("sales").route(route("/sales", Ledger::lazy(), "Sales"))
}

fn paths(routes: &[RouteDescriptor]) -> Vec<&str> {
    routes.iter().map(|r| r.path.as_ref()).collect()
}

#[test]
fn only_true_flagged_modules_are_composed_in_order() {
    let flags = FeatureFlags::default().with_modules(ModuleSet::PACKING);
    let tables = [sales(), packing()];

    let routes = compose(&tables, &flags);
    assert_eq!(paths(&routes), vec!["/boxes", "/pallets"]);

    let flags = flags.with_modules(ModuleSet::PACKING | ModuleSet::SALES);
    let routes = compose(&tables, &flags);
    assert_eq!(paths(&routes), vec!["/sales", "/boxes", "/pallets"]);
}

#[test]
fn composition_is_idempotent() {
    let registry = RouteRegistry::builder().register_all([packing(), sales()]).build();
    let flags = FeatureFlags::default().with_modules(ModuleSet::ALL);

    let first = registry.compose(&flags);
    let second = registry.compose(&flags);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn route_level_flags_filter_individual_routes() {
    let table = RouteTable::new("warehouse")
        .route(route("/stock", Inbox::lazy(), "Stock"))
        .route(RouteDescriptor::new(
            "/stock/board",
            Board::lazy(),
            RouteMeta::builder().title("Board").feature_flag(UI_V2).build(),
        ))
        .route(RouteDescriptor::new(
            "/stock/ledger",
            Ledger::lazy(),
            RouteMeta::builder().title("Ledger").feature_flag("stock_ledger").build(),
        ));

    let v1 = compose([&table], &FeatureFlags::default());
    assert_eq!(paths(&v1), vec!["/stock"]);

    let v2 = compose([&table], &FeatureFlags::default().with_ui(UiVersion::V2));
    assert_eq!(paths(&v2), vec!["/stock", "/stock/board"]);

    let all = compose(
        [&table],
        &FeatureFlags::default().with_ui(UiVersion::V2).with_toggle("stock_ledger", true),
    );
    assert_eq!(paths(&all), vec!["/stock", "/stock/board", "/stock/ledger"]);
}

#[test]
fn ungated_tables_are_always_composed() {
    let table = RouteTable::new("dashboard").route(route("/", Inbox::lazy(), "Home"));
    let navigation = RouteRegistry::builder().register(table).build().compose(&FeatureFlags::default());
    assert_eq!(navigation.paths().collect::<Vec<_>>(), vec!["/"]);
}

#[test]
fn duplicate_paths_are_reported_not_repaired() {
    let table = packing().route(route("/boxes", Board::lazy(), "Boxes again"));

    let err = table.validate().unwrap_err();
    assert!(matches!(err, RoutingError::DuplicatePath { .. }));
    assert!(err.to_string().contains("/boxes"));

    let flags = FeatureFlags::default().with_modules(ModuleSet::PACKING);
    assert_eq!(compose([&table], &flags).len(), 3, "composition keeps duplicates as-is");
}

#[test]
fn duplicate_modules_are_reported() {
    let registry = RouteRegistry::builder().register(sales()).register(sales()).build();
    let err = registry.validate().unwrap_err();
    assert!(matches!(err, RoutingError::DuplicateModule { .. }));

    let registry = RouteRegistry::builder().register(sales()).register(packing()).build();
    assert!(registry.validate().is_ok());
    assert_eq!(registry.table("sales").map(RouteTable::len), Some(1));
}

#[test]
fn navigation_groups_sections_and_breadcrumbs() {
    let table = RouteTable::new("packing")
        .route(RouteDescriptor::new(
            "/pallets",
            Inbox::lazy(),
            RouteMeta::builder()
                .title("Pallets")
                .section("Packing")
                .breadcrumbs(vec![Crumb::link("Home", "/"), Crumb::text("Pallets")])
                .build(),
        ))
        .route(RouteDescriptor::new(
            "/reports",
            Ledger::lazy(),
            RouteMeta::builder().title("Reports").section("Reports").build(),
        ))
        .route(RouteDescriptor::new(
            "/boxes",
            Inbox::lazy(),
            RouteMeta::builder().title("Boxes").section("Packing").build(),
        ));

    let navigation = RouteRegistry::builder().register(table).build().compose(&FeatureFlags::default());

    let sections = navigation.sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].name, Some("Packing"));
    let packing: Vec<&str> = sections[0].routes.iter().map(|r| r.path.as_ref()).collect();
    assert_eq!(packing, vec!["/pallets", "/boxes"]);
    assert_eq!(sections[1].name, Some("Reports"));

    let crumbs = navigation.breadcrumbs("/pallets").expect("route exists");
    assert_eq!(crumbs, &[Crumb::link("Home", "/"), Crumb::text("Pallets")]);
    assert!(navigation.breadcrumbs("/missing").is_none());
}

#[test]
fn activation_resolves_views_lazily() {
    let navigation = RouteRegistry::builder()
        .register(packing())
        .build()
        .compose(&FeatureFlags::default().with_modules(ModuleSet::PACKING));

    let pallets = navigation.find("/pallets").expect("route exists");
    assert!(!pallets.view.is_resolved());

    let view = navigation.activate("/pallets").expect("route exists");
    assert_eq!(view.component(), "test/Inbox");
    assert!(pallets.view.is_resolved());
    assert!(!navigation.find("/boxes").expect("route exists").view.is_resolved());
}

#[test]
fn navigation_serializes_for_the_renderer() {
    let navigation = RouteRegistry::builder()
        .register(sales())
        .build()
        .compose(&FeatureFlags::default().with_modules(ModuleSet::SALES));

    let json = serde_json::to_value(&navigation).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "path": "/sales", "view": "test/Ledger", "title": "Sales", "section": "Test" }])
    );
}

#[test]
fn trails_start_at_an_unlinked_section() {
    assert_eq!(Crumb::trail("Sales", &[], "Customers"), vec![
        Crumb::text("Sales"),
        Crumb::text("Customers"),
    ]);
    assert_eq!(
        Crumb::trail("Packing", &[("Pallets", "/packing/pallets")], "Pallet"),
        vec![Crumb::text("Packing"), Crumb::link("Pallets", "/packing/pallets"), Crumb::text("Pallet")]
    );
}
