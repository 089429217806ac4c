use super::descriptor::RouteDescriptor;
use super::error::RoutingError;
use super::navigation::Navigation;
use super::table::RouteTable;
use crate::flags::FeatureFlags;
use fxhash::FxHashSet;
use tracing::{debug, info};

/// The ordered set of module route tables known to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    tables: Vec<RouteTable>,
}

impl RouteRegistry {
    #[must_use]
    pub fn builder() -> RouteRegistryBuilder {
        RouteRegistryBuilder::default()
    }

    /// Registered tables in registration order.
    #[must_use]
    pub fn tables(&self) -> &[RouteTable] {
        &self.tables
    }

    /// Looks up the table owned by `module`.
    #[must_use]
    pub fn table(&self, module: &str) -> Option<&RouteTable> {
        self.tables.iter().find(|t| t.module() == module)
    }

    /// Checks every table, and that no module registered twice.
    ///
    /// # Errors
    /// Returns the first [`RoutingError`] found.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let mut modules = FxHashSet::default();
        for table in &self.tables {
            if !modules.insert(table.module()) {
                return Err(RoutingError::DuplicateModule {
                    message: table.module().to_owned().into(),
                    context: None,
                });
            }
            table.validate()?;
        }
        Ok(())
    }

    /// Filters the registered tables against `flags`.
    #[must_use]
    pub fn compose(&self, flags: &FeatureFlags) -> Navigation {
        Navigation::new(compose(&self.tables, flags))
    }
}

/// Concatenates `tables` in order, dropping tables and routes whose flag resolves false.
///
/// Pure: the same tables and flags always produce the same list.
pub fn compose<'a, I>(tables: I, flags: &FeatureFlags) -> Vec<RouteDescriptor>
where
    I: IntoIterator<Item = &'a RouteTable>,
{
    let mut routes = Vec::new();
    let mut registered = 0_usize;

    for table in tables {
        if let Some(flag) = table.feature_flag()
            && !flags.is_enabled(flag)
        {
            debug!(module = table.module(), flag, "Module disabled, skipping its routes");
            continue;
        }
        registered += 1;
        routes.extend(
            table
                .routes()
                .iter()
                .filter(|route| route.feature_flag().is_none_or(|flag| flags.is_enabled(flag)))
                .cloned(),
        );
    }

    info!(modules = registered, routes = routes.len(), "Navigation composed");
    routes
}

/// Collects module tables in declaration order.
#[derive(Debug, Default)]
#[must_use = "builders do nothing unless you call .build()"]
pub struct RouteRegistryBuilder {
    tables: Vec<RouteTable>,
}

impl RouteRegistryBuilder {
    pub fn register(mut self, table: RouteTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Registers multiple tables at once, keeping their order.
    pub fn register_all<I>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = RouteTable>,
    {
        self.tables.extend(tables);
        self
    }

    #[must_use]
    pub fn build(self) -> RouteRegistry {
        RouteRegistry { tables: self.tables }
    }
}
