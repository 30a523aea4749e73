// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Debug;
use std::ops::Deref;
use std::sync::Arc;

/// The slot through which a layer reaches the next object in its chain.
///
/// Every layer owns exactly one `Delegate<S>` typed as the service contract `S`. A fresh slot
/// is unwired; [`Cake`](crate::Cake) writes it once while building the chain, pointing it at
/// the next present layer or at the base.
///
/// Inside contract methods the slot is usually used through [`Deref`], which forwards straight
/// to the next object:
///
/// ```
/// use layer_cake::Delegate;
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct Loud {
///     next: Delegate<dyn Greeter>,
/// }
///
/// impl Greeter for Loud {
///     fn greet(&self) -> String {
///         self.next.greet().to_uppercase()
///     }
/// }
/// ```
pub struct Delegate<S: ?Sized> {
    next: Option<Arc<S>>,
}

impl<S: ?Sized> Delegate<S> {
    /// Creates an unwired slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Creates a slot that already points at `next`.
    ///
    /// This is meant for wiring a layer by hand. A pre-wired slot is not writable, so passing
    /// such a layer to [`Cake`](crate::Cake) fails with a
    /// [`DelegateSlotError`](crate::DelegateSlotError).
    #[must_use]
    pub const fn wired(next: Arc<S>) -> Self {
        Self { next: Some(next) }
    }

    /// Returns the next object in the chain, or `None` if the slot has not been wired.
    #[must_use]
    pub fn get(&self) -> Option<&S> {
        self.next.as_deref()
    }

    /// Returns `true` once the slot points at another object.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.next.is_some()
    }

    pub(crate) fn wire(&mut self, next: Arc<S>) {
        self.next = Some(next);
    }
}

impl<S: ?Sized> Default for Delegate<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Clone for Delegate<S> {
    fn clone(&self) -> Self {
        Self { next: self.next.clone() }
    }
}

impl<S: ?Sized> Debug for Delegate<S> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, waste of time to mutate.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Delegate").field("wired", &self.is_wired()).finish()
    }
}

impl<S: ?Sized> Deref for Delegate<S> {
    type Target = S;

    /// # Panics
    ///
    /// Panics if the slot has not been wired. Layers built through [`Cake`](crate::Cake) are
    /// always wired; use [`Delegate::get`] when a layer may run on its own.
    #[expect(clippy::panic, reason = "calling through an unwired slot is a wiring bug, not a recoverable error")]
    fn deref(&self) -> &S {
        match self.next.as_deref() {
            Some(next) => next,
            None => panic!("delegate slot used before the layer was wired into a chain"),
        }
    }
}
