// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::sync::Arc;

use crate::Delegate;

/// A decorator that can be wired into a chain around a service contract `S`.
///
/// A layer implements the contract itself and owns one [`Delegate<S>`] slot. This trait is the
/// capability the builder needs on top of the contract: finding the slot, and turning the wired
/// layer into the contract type.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use layer_cake::{Delegate, Layer};
///
/// trait Store {
///     fn lookup(&self, key: &str) -> Option<String>;
/// }
///
/// #[derive(Default)]
/// struct Lowercase {
///     next: Delegate<dyn Store>,
/// }
///
/// impl Store for Lowercase {
///     fn lookup(&self, key: &str) -> Option<String> {
///         self.next.lookup(&key.to_lowercase())
///     }
/// }
///
/// impl Layer<dyn Store> for Lowercase {
///     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Store>> {
///         Some(&mut self.next)
///     }
///
///     fn into_service(self: Box<Self>) -> Arc<dyn Store> {
///         Arc::new(*self)
///     }
/// }
/// ```
pub trait Layer<S: ?Sized> {
    /// Locates the delegate slot of this layer.
    ///
    /// Returning `None` reports the slot as unavailable and fails the build with a
    /// [`DelegateSlotError`](crate::DelegateSlotError).
    fn delegate_slot(&mut self) -> Option<&mut Delegate<S>>;

    /// Converts the wired layer into the service contract.
    ///
    /// For a concrete layer this is almost always `Arc::new(*self)`.
    fn into_service(self: Box<Self>) -> Arc<S>;

    /// A name identifying this layer in errors and logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
