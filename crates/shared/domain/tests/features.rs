use packhub_domain::constants::{DISPATCH, PACKING, SALES, WAREHOUSE};
use packhub_domain::features::ModuleSet;
use packhub_domain::version::{DataLayer, UiVersion};
use std::str::FromStr;

#[test]
fn module_names_resolve_to_flags() {
    assert_eq!(ModuleSet::from(PACKING), ModuleSet::PACKING);
    assert_eq!(ModuleSet::from("Warehouse"), ModuleSet::WAREHOUSE);
    assert_eq!(ModuleSet::from("*"), ModuleSet::ALL);
    assert_eq!(ModuleSet::from("all"), ModuleSet::ALL);
    assert_eq!(ModuleSet::from("unknown"), ModuleSet::empty());
}

#[test]
fn module_lists_parse_lossily() {
    let set = ModuleSet::parse_list(" packing , sales,,bogus ");
    assert_eq!(set, ModuleSet::PACKING | ModuleSet::SALES);
    assert_eq!(ModuleSet::parse_list(""), ModuleSet::empty());
}

#[test]
fn names_follow_declaration_order() {
    let set = ModuleSet::SALES | ModuleSet::WAREHOUSE | ModuleSet::DISPATCH;
    let names: Vec<_> = set.names().collect();
    assert_eq!(names, vec![WAREHOUSE, DISPATCH, SALES]);
}

#[test]
fn module_set_serializes_as_names() {
    let json = serde_json::to_string(&(ModuleSet::PACKING | ModuleSet::SALES)).unwrap();
    assert_eq!(json, r#"["packing","sales"]"#);
}

#[test]
fn versions_parse_case_insensitively() {
    assert_eq!(UiVersion::from_str("V2").unwrap(), UiVersion::V2);
    assert_eq!(DataLayer::from_str("v1").unwrap(), DataLayer::V1);
    assert!(UiVersion::from_str("v3").is_err());
    assert_eq!(UiVersion::V2.to_string(), "v2");
    assert_eq!(UiVersion::default(), UiVersion::V1);
}
