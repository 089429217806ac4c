use crate::view::LazyView;
use serde::Serialize;
use std::borrow::Cow;
use typed_builder::TypedBuilder;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Cow<'static, str>>,
}

impl Crumb {
    /// A crumb that navigates somewhere.
    pub fn link(label: impl Into<Cow<'static, str>>, path: impl Into<Cow<'static, str>>) -> Self {
        Self { label: label.into(), path: Some(path.into()) }
    }

    /// A plain label, usually the current page.
    pub fn text(label: impl Into<Cow<'static, str>>) -> Self {
        Self { label: label.into(), path: None }
    }

    /// The trail of a page: the section label, each `(label, path)` parent as a link, then
    /// the page itself.
    ///
    /// ```rust
    /// use packhub_kernel::routing::Crumb;
    ///
    /// let crumbs = Crumb::trail("Packing", &[("Pallets", "/packing/pallets")], "Pallet");
    /// assert_eq!(crumbs[0], Crumb::text("Packing"));
    /// assert_eq!(crumbs[1], Crumb::link("Pallets", "/packing/pallets"));
    /// ```
    #[must_use]
    pub fn trail(
        section: &'static str,
        parents: &[(&'static str, &'static str)],
        current: &'static str,
    ) -> Vec<Self> {
        let mut crumbs = Vec::with_capacity(parents.len() + 2);
        crumbs.push(Self::text(section));
        crumbs.extend(parents.iter().map(|&(label, path)| Self::link(label, path)));
        crumbs.push(Self::text(current));
        crumbs
    }
}

/// Presentation metadata of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct RouteMeta {
    #[builder(setter(into))]
    pub title: Cow<'static, str>,
    /// Navigation section the route is listed under.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Cow<'static, str>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breadcrumbs: Vec<Crumb>,
    /// Capability that must resolve true for the route to be registered.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_flag: Option<Cow<'static, str>>,
}

/// A path pattern bound to a lazily resolved view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: Cow<'static, str>,
    pub view: LazyView,
    #[serde(flatten)]
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<Cow<'static, str>>, view: LazyView, meta: RouteMeta) -> Self {
        Self { path: path.into(), view, meta }
    }

    #[must_use]
    pub fn feature_flag(&self) -> Option<&str> {
        self.meta.feature_flag.as_deref()
    }
}
