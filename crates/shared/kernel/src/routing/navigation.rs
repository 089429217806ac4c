use super::descriptor::{Crumb, RouteDescriptor};
use crate::view::View;
use serde::Serialize;
use std::sync::Arc;

/// The composed, filtered route list handed to the router and navigation menus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Navigation {
    routes: Vec<RouteDescriptor>,
}

/// Routes sharing a navigation section, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section<'a> {
    pub name: Option<&'a str>,
    pub routes: Vec<&'a RouteDescriptor>,
}

impl Navigation {
    #[must_use]
    pub const fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
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

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path.as_ref())
    }

    /// Exact lookup by path pattern; pattern matching is left to the router.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.path == path)
    }

    #[must_use]
    pub fn breadcrumbs(&self, path: &str) -> Option<&[Crumb]> {
        self.find(path).map(|r| r.meta.breadcrumbs.as_slice())
    }

    /// Navigates to `path`, resolving its view on first visit.
    #[must_use]
    pub fn activate(&self, path: &str) -> Option<Arc<dyn View>> {
        self.find(path).map(|r| r.view.resolve())
    }

    /// Groups routes by section for menu rendering.
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for route in &self.routes {
            let name = route.meta.section.as_deref();
            match sections.iter_mut().find(|s| s.name == name) {
                Some(section) => section.routes.push(route),
                None => sections.push(Section { name, routes: vec![route] }),
            }
        }
        sections
    }
}

impl<'a> IntoIterator for &'a Navigation {
    type Item = &'a RouteDescriptor;
    type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
