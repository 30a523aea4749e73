// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::Layer;

/// Returns `layer` when `condition` holds and an empty position otherwise.
///
/// Empty positions are skipped by [`Cake`](crate::Cake), so a layer can be switched on and off
/// without restructuring the list of layers.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use layer_cake::{Delegate, Layer};
/// # trait Log { fn write(&self, line: &str); }
/// # #[derive(Default)]
/// # struct Verbose { next: Delegate<dyn Log> }
/// # impl Log for Verbose { fn write(&self, line: &str) { self.next.write(line) } }
/// # impl Layer<dyn Log> for Verbose {
/// #     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Log>> { Some(&mut self.next) }
/// #     fn into_service(self: Box<Self>) -> Arc<dyn Log> { Arc::new(*self) }
/// # }
/// use layer_cake::include_if;
///
/// let verbose = false;
/// let position = include_if::<dyn Log, _>(verbose, Verbose::default());
///
/// assert!(position.is_none());
/// ```
#[must_use]
pub fn include_if<S, L>(condition: bool, layer: L) -> Option<Box<dyn Layer<S>>>
where
    S: ?Sized,
    L: Layer<S> + 'static,
{
    condition.then(|| Box::new(layer) as Box<dyn Layer<S>>)
}

/// Like [`include_if`], but builds the layer only when `condition` holds.
///
/// `factory` is called at most once, and only when `condition` is `true`. Use this when the
/// layer is expensive to construct.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use layer_cake::{Delegate, Layer};
/// # trait Log { fn write(&self, line: &str); }
/// # #[derive(Default)]
/// # struct Verbose { next: Delegate<dyn Log> }
/// # impl Log for Verbose { fn write(&self, line: &str) { self.next.write(line) } }
/// # impl Layer<dyn Log> for Verbose {
/// #     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Log>> { Some(&mut self.next) }
/// #     fn into_service(self: Box<Self>) -> Arc<dyn Log> { Arc::new(*self) }
/// # }
/// use layer_cake::include_if_with;
///
/// let position = include_if_with::<dyn Log, _, _>(true, Verbose::default);
///
/// assert!(position.is_some());
/// ```
#[must_use]
pub fn include_if_with<S, L, F>(condition: bool, factory: F) -> Option<Box<dyn Layer<S>>>
where
    S: ?Sized,
    L: Layer<S> + 'static,
    F: FnOnce() -> L,
{
    condition.then(|| Box::new(factory()) as Box<dyn Layer<S>>)
}
