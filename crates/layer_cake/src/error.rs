// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A present layer did not expose a writable delegate slot.
///
/// Raised by [`Cake::build`](crate::Cake::build) when a layer's
/// [`delegate_slot`](crate::Layer::delegate_slot) returns `None`, or when the slot it returns has
/// already been wired. The build is aborted as a whole; the error names the first offending layer
/// in input order together with its position, counting empty positions.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use layer_cake::{Cake, Delegate, Layer};
///
/// trait Clock {
///     fn now(&self) -> u64;
/// }
///
/// struct Frozen;
///
/// impl Clock for Frozen {
///     fn now(&self) -> u64 {
///         42
///     }
/// }
///
/// // A layer that never exposes its slot.
/// struct Detached;
///
/// impl Clock for Detached {
///     fn now(&self) -> u64 {
///         0
///     }
/// }
///
/// impl Layer<dyn Clock> for Detached {
///     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Clock>> {
///         None
///     }
///
///     fn into_service(self: Box<Self>) -> Arc<dyn Clock> {
///         Arc::new(*self)
///     }
///
///     fn name(&self) -> &'static str {
///         "detached"
///     }
/// }
///
/// let result = Cake::<dyn Clock>::new(Arc::new(Frozen))
///     .maybe_layer(None)
///     .layer(Detached)
///     .build();
///
/// let Err(error) = result else { unreachable!("`Detached` has no slot") };
///
/// assert_eq!(error.layer(), "detached");
/// assert_eq!(error.position(), 1);
/// ```
#[ohno::error]
#[display("delegate slot unavailable on layer {layer} at position {position}")]
pub struct DelegateSlotError {
    layer: &'static str,
    position: usize,
}

impl DelegateSlotError {
    /// The name of the offending layer, as reported by [`Layer::name`](crate::Layer::name).
    #[must_use]
    pub fn layer(&self) -> &'static str {
        self.layer
    }

    /// The position of the offending layer in the input sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}
