use super::descriptor::RouteDescriptor;
use super::error::RoutingError;
use fxhash::FxHashSet;
use std::borrow::Cow;

/// The route table owned by one business module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    module: Cow<'static, str>,
    feature_flag: Option<Cow<'static, str>>,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// An ungated, empty table for `module`.
    pub fn new(module: impl Into<Cow<'static, str>>) -> Self {
        Self { module: module.into(), feature_flag: None, routes: Vec::new() }
    }

    /// Registers the whole table only when `flag` resolves true.
    #[must_use]
    pub fn gated_by(mut self, flag: impl Into<Cow<'static, str>>) -> Self {
        self.feature_flag = Some(flag.into());
        self
    }

    /// Appends a route; declaration order is preserved.
    #[must_use]
    pub fn route(mut self, route: RouteDescriptor) -> Self {
        self.routes.push(route);
        self
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn feature_flag(&self) -> Option<&str> {
        self.feature_flag.as_deref()
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Checks that path patterns are unique within the table.
    ///
    /// Composition never repairs a malformed table; call this from tests.
    ///
    /// # Errors
    /// Returns [`RoutingError::DuplicatePath`] naming the first repeated path.
    pub fn validate(&self) -> Result<(), RoutingError> {
        let mut seen = FxHashSet::default();
        for route in &self.routes {
            if !seen.insert(route.path.as_ref()) {
                return Err(RoutingError::DuplicatePath {
                    message: route.path.to_string().into(),
                    context: Some(format!("module '{}'", self.module).into()),
                });
            }
        }
        Ok(())
    }
}
