use crate::constants::{DASHBOARD, DISPATCH, PACKING, SALES, TRANSIT, WAREHOUSE};
use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

bitflags! {
    /// Set of business modules whose routes may be registered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u32 {
        const DASHBOARD = 1 << 0;
        const PACKING = 1 << 1;
        const TRANSIT = 1 << 2;
        const WAREHOUSE = 1 << 3;
        const DISPATCH = 1 << 4;
        const SALES = 1 << 5;

        const ALL = Self::DASHBOARD.bits()
            | Self::PACKING.bits()
            | Self::TRANSIT.bits()
            | Self::WAREHOUSE.bits()
            | Self::DISPATCH.bits()
            | Self::SALES.bits();
    }
}

/// Declaration order of the modules; also the serialization order.
const ORDERED: [(ModuleSet, &str); 6] = [
    (ModuleSet::DASHBOARD, DASHBOARD),
    (ModuleSet::PACKING, PACKING),
    (ModuleSet::TRANSIT, TRANSIT),
    (ModuleSet::WAREHOUSE, WAREHOUSE),
    (ModuleSet::DISPATCH, DISPATCH),
    (ModuleSet::SALES, SALES),
];

impl ModuleSet {
    /// Parses a comma-separated module list (`"packing, warehouse"`, `"*"`).
    ///
    /// Unknown names contribute nothing, so a malformed list degrades to fewer modules.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(Self::from).collect()
    }

    /// Module names contained in this set, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        ORDERED.into_iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, name)| name)
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for ModuleSet {
    fn from(s: &str) -> Self {
        if s == "all" || s == "*" {
            return Self::ALL;
        }
        ORDERED
            .into_iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map_or_else(Self::empty, |(flag, _)| flag)
    }
}

impl Serialize for ModuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        for name in self.names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}
