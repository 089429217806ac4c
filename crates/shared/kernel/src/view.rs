//! Lazily resolved view handles.
//!
//! A route only carries a [`LazyView`]: the component identifier plus a factory. The view
//! itself is instantiated the first time someone navigates to the route and then cached in
//! a cell shared by every clone of the handle.

use serde::{Serialize, Serializer};
use std::fmt::Debug;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// An opaque page component handed to the rendering layer.
pub trait View: Debug + Send + Sync + 'static {
    /// Identifier the rendering layer uses to pick the component (e.g. `packing/PalletList`).
    fn component(&self) -> &'static str;
}

/// Constructor invoked on first resolution.
pub type ViewFactory = fn() -> Arc<dyn View>;

#[derive(Debug, Clone)]
pub struct LazyView {
    component: &'static str,
    factory: ViewFactory,
    cell: Arc<OnceLock<Arc<dyn View>>>,
}

impl LazyView {
    #[must_use]
    pub fn new(component: &'static str, factory: ViewFactory) -> Self {
        Self { component, factory, cell: Arc::new(OnceLock::new()) }
    }

    /// Component identifier, available without resolving the view.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        self.component
    }

    /// Instantiates the view on first call; later calls return the cached instance.
    #[must_use]
    pub fn resolve(&self) -> Arc<dyn View> {
        let view = self.cell.get_or_init(|| {
            debug!(component = self.component, "Resolving view");
            (self.factory)()
        });
        Arc::clone(view)
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl PartialEq for LazyView {
    fn eq(&self, other: &Self) -> bool {
        self.component == other.component
    }
}

impl Eq for LazyView {}

impl Serialize for LazyView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.component)
    }
}

/// Declares unit view types with their component identifiers.
///
/// Each entry expands to a `Debug + Default + Copy` unit struct implementing [`View`] and an
/// associated `lazy()` constructor returning its [`LazyView`].
///
/// ```rust
/// packhub_kernel::views! {
///     /// Paginated pallet list.
///     pub PalletList => "packing/PalletList";
/// }
///
/// let handle = PalletList::lazy();
/// assert_eq!(handle.component(), "packing/PalletList");
/// assert!(!handle.is_resolved());
/// ```
#[macro_export]
macro_rules! views {
    ($($(#[$meta:meta])* $vis:vis $name:ident => $component:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Default, Clone, Copy)]
            $vis struct $name;

            impl $crate::view::View for $name {
                fn component(&self) -> &'static str {
                    $component
                }
            }

            impl $name {
                #[must_use]
                $vis fn lazy() -> $crate::view::LazyView {
                    fn make() -> ::std::sync::Arc<dyn $crate::view::View> {
                        ::std::sync::Arc::new($name)
                    }
                    $crate::view::LazyView::new($component, make)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILT: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug)]
    struct Counted;

    impl View for Counted {
        fn component(&self) -> &'static str {
            "test/Counted"
        }
    }

    fn counted() -> Arc<dyn View> {
        BUILT.fetch_add(1, Ordering::SeqCst);
        Arc::new(Counted)
    }

    #[test]
    fn resolves_once_across_clones() {
        let handle = LazyView::new("test/Counted", counted);
        let clone = handle.clone();
        assert!(!handle.is_resolved());
        assert_eq!(BUILT.load(Ordering::SeqCst), 0);

        let first = handle.resolve();
        let second = clone.resolve();

        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(clone.is_resolved());
        assert_eq!(first.component(), "test/Counted");
    }

    crate::views! {
        Sample => "test/Sample";
    }

    #[test]
    fn macro_declares_views() {
        let handle = Sample::lazy();
        assert_eq!(handle, Sample::lazy());
        assert_eq!(handle.resolve().component(), "test/Sample");
        assert_eq!(serde_json::to_string(&handle).unwrap(), r#""test/Sample""#);
    }
}
