//! Query-key convention for the presentation layer's data cache.
//!
//! Keys are hierarchical so a whole entity, or all its lists, can be invalidated by prefix:
//!
//! ```text
//! pallets                 all()
//! pallets/list            lists()
//! pallets/list/page=2     list("page=2")
//! pallets/detail          details()
//! pallets/detail/P-17     detail("P-17")
//! ```

use serde::Serialize;
use std::borrow::Cow;
use std::fmt::{self, Display};

const LIST: &str = "list";
const DETAIL: &str = "detail";

/// An ordered list of key segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QueryKey(Vec<Cow<'static, str>>);

impl QueryKey {
    pub fn new(root: impl Into<Cow<'static, str>>) -> Self {
        Self(vec![root.into()])
    }

    /// Appends a segment.
    #[must_use]
    pub fn push(mut self, segment: impl Into<Cow<'static, str>>) -> Self {
        self.0.push(segment.into());
        self
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }

    /// True when `prefix` addresses this key or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
        }
        for segment in segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Key factory for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityKeys {
    entity: &'static str,
}

impl EntityKeys {
    #[must_use]
    pub const fn new(entity: &'static str) -> Self {
        Self { entity }
    }

    #[must_use]
    pub fn all(&self) -> QueryKey {
        QueryKey::new(self.entity)
    }

    #[must_use]
    pub fn lists(&self) -> QueryKey {
        self.all().push(LIST)
    }

    /// A list query; `filter` is any stable rendering of the list parameters.
    #[must_use]
    pub fn list(&self, filter: impl Display) -> QueryKey {
        self.lists().push(filter.to_string())
    }

    #[must_use]
    pub fn details(&self) -> QueryKey {
        self.all().push(DETAIL)
    }

    #[must_use]
    pub fn detail(&self, id: impl Display) -> QueryKey {
        self.details().push(id.to_string())
    }
}
