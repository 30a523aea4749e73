// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

use crate::{DelegateSlotError, Layer, include_if, include_if_with};

const DEFAULT_CHAIN_NAME: &str = "default";

/// Builds a composite service from a base and an ordered list of layers.
///
/// Layers are listed outermost first. Empty positions (`None`) are skipped. On
/// [`build`](Cake::build), every present layer's [`Delegate`](crate::Delegate) slot is pointed at
/// the next present layer, the last one at the base, and the first present layer is returned.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use layer_cake::{Delegate, Layer};
/// # trait Count { fn count(&self) -> u32; }
/// # struct Zero;
/// # impl Count for Zero { fn count(&self) -> u32 { 0 } }
/// # #[derive(Default)]
/// # struct PlusOne { next: Delegate<dyn Count> }
/// # impl Count for PlusOne { fn count(&self) -> u32 { self.next.count() + 1 } }
/// # impl Layer<dyn Count> for PlusOne {
/// #     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Count>> { Some(&mut self.next) }
/// #     fn into_service(self: Box<Self>) -> Arc<dyn Count> { Arc::new(*self) }
/// # }
/// use layer_cake::Cake;
///
/// let metered = false;
///
/// let counter = Cake::<dyn Count>::new(Arc::new(Zero))
///     .name("counter")
///     .layer(PlusOne::default())
///     .layer_if(metered, PlusOne::default())
///     .layer_if_with(true, PlusOne::default)
///     .build()?;
///
/// assert_eq!(counter.count(), 2);
/// # Ok::<(), layer_cake::DelegateSlotError>(())
/// ```
pub struct Cake<S: ?Sized> {
    base: Arc<S>,
    layers: Vec<Option<Box<dyn Layer<S>>>>,
    name: Cow<'static, str>,
    #[cfg(any(feature = "logs", test))]
    logs_enabled: bool,
}

impl<S: ?Sized> Cake<S> {
    /// Starts a chain that ends at `base`.
    #[must_use]
    pub fn new(base: Arc<S>) -> Self {
        Self {
            base,
            layers: Vec::new(),
            name: Cow::Borrowed(DEFAULT_CHAIN_NAME),
            #[cfg(any(feature = "logs", test))]
            logs_enabled: false,
        }
    }

    /// Sets the name used for this chain in log events.
    #[must_use]
    pub fn name(self, name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into(), ..self }
    }

    /// Emits a `tracing` event for every build of this chain.
    ///
    /// Successful builds are reported at `DEBUG`, failed builds at `WARN`.
    #[must_use]
    #[cfg(any(feature = "logs", test))]
    pub fn enable_logs(self) -> Self {
        Self {
            logs_enabled: true,
            ..self
        }
    }

    /// Appends a layer.
    #[must_use]
    pub fn layer<L>(self, layer: L) -> Self
    where
        L: Layer<S> + 'static,
    {
        self.maybe_layer(Some(Box::new(layer)))
    }

    /// Appends a position that may be empty.
    #[must_use]
    pub fn maybe_layer(mut self, layer: Option<Box<dyn Layer<S>>>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Appends `layer` when `condition` holds, and an empty position otherwise.
    ///
    /// See [`include_if`].
    #[must_use]
    pub fn layer_if<L>(self, condition: bool, layer: L) -> Self
    where
        L: Layer<S> + 'static,
    {
        self.maybe_layer(include_if(condition, layer))
    }

    /// Appends the layer returned by `factory` when `condition` holds, and an empty position
    /// otherwise. `factory` is not called when `condition` is `false`.
    ///
    /// See [`include_if_with`].
    #[must_use]
    pub fn layer_if_with<L, F>(self, condition: bool, factory: F) -> Self
    where
        L: Layer<S> + 'static,
        F: FnOnce() -> L,
    {
        self.maybe_layer(include_if_with(condition, factory))
    }

    /// The number of positions, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no position has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The number of positions holding a layer.
    #[must_use]
    pub fn present(&self) -> usize {
        self.layers.iter().filter(|layer| layer.is_some()).count()
    }

    /// Wires the chain and returns the composite service.
    ///
    /// Without present layers the base is returned unchanged. Otherwise the first present layer is
    /// returned, with its delegate slot leading through every other present layer, in order, to
    /// the base.
    ///
    /// # Errors
    ///
    /// Returns [`DelegateSlotError`] for the first present layer, in input order, that reports no
    /// delegate slot or whose slot is already wired. Nothing is returned from a failed build.
    pub fn build(self) -> Result<Arc<S>, DelegateSlotError> {
        let positions = self.layers.len();
        let telemetry = Telemetry {
            name: self.name,
            #[cfg(any(feature = "logs", test))]
            logs_enabled: self.logs_enabled,
        };

        let mut present: Vec<(usize, Box<dyn Layer<S>>)> = self
            .layers
            .into_iter()
            .enumerate()
            .filter_map(|(position, layer)| layer.map(|layer| (position, layer)))
            .collect();

        if let Err(error) = check_slots(&mut present) {
            telemetry.failed(&error);
            return Err(error);
        }

        let layers = present.len();

        // Each layer can only point at the next one once that one is frozen into an `Arc`,
        // so wiring runs from the innermost layer outwards.
        let composite: Result<Arc<S>, DelegateSlotError> = present
            .into_iter()
            .rev()
            .try_fold(self.base, |next, (position, mut layer)| {
                let name = layer.name();
                let slot = layer
                    .delegate_slot()
                    .ok_or_else(|| DelegateSlotError::new(name, position))?;
                slot.wire(next);
                Ok(layer.into_service())
            });

        match &composite {
            Ok(_) => telemetry.built(positions, layers),
            Err(error) => telemetry.failed(error),
        }

        composite
    }
}

/// Wires `base` and `layers` into a composite service.
///
/// Shorthand for [`Cake::new`] followed by one [`Cake::maybe_layer`] per position and
/// [`Cake::build`].
///
/// # Errors
///
/// Returns [`DelegateSlotError`] under the same conditions as [`Cake::build`].
pub fn layered<S, I>(base: Arc<S>, layers: I) -> Result<Arc<S>, DelegateSlotError>
where
    S: ?Sized,
    I: IntoIterator<Item = Option<Box<dyn Layer<S>>>>,
{
    let mut cake = Cake::new(base);
    cake.extend(layers);
    cake.build()
}

impl<S: ?Sized> Extend<Option<Box<dyn Layer<S>>>> for Cake<S> {
    fn extend<T: IntoIterator<Item = Option<Box<dyn Layer<S>>>>>(&mut self, iter: T) {
        self.layers.extend(iter);
    }
}

impl<S: ?Sized> Debug for Cake<S> {
    #[cfg_attr(test, mutants::skip)] // Diagnostic output only, waste of time to mutate.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cake")
            .field("name", &self.name)
            .field("positions", &self.len())
            .field("present", &self.present())
            .finish_non_exhaustive()
    }
}

/// Finds the first layer, in input order, without a writable slot.
fn check_slots<S: ?Sized>(present: &mut [(usize, Box<dyn Layer<S>>)]) -> Result<(), DelegateSlotError> {
    for (position, layer) in present {
        let writable = layer.delegate_slot().is_some_and(|slot| !slot.is_wired());

        if !writable {
            return Err(DelegateSlotError::new(layer.name(), *position));
        }
    }

    Ok(())
}

struct Telemetry {
    #[cfg_attr(not(any(feature = "logs", test)), expect(dead_code, reason = "only read by log events"))]
    name: Cow<'static, str>,
    #[cfg(any(feature = "logs", test))]
    logs_enabled: bool,
}

impl Telemetry {
    #[cfg_attr(
        not(any(feature = "logs", test)),
        expect(unused_variables, clippy::unused_self, reason = "unused when logs feature not used")
    )]
    #[cfg_attr(test, mutants::skip)] // Log output only, waste of time to mutate.
    fn built(&self, positions: usize, layers: usize) {
        #[cfg(any(feature = "logs", test))]
        if self.logs_enabled {
            tracing::event!(
                name: "layer_cake.build",
                tracing::Level::DEBUG,
                chain.name = %self.name,
                chain.positions = positions,
                chain.layers = layers,
                chain.skipped = positions - layers,
                "chain built"
            );
        }
    }

    #[cfg_attr(
        not(any(feature = "logs", test)),
        expect(unused_variables, clippy::unused_self, reason = "unused when logs feature not used")
    )]
    #[cfg_attr(test, mutants::skip)] // Log output only, waste of time to mutate.
    fn failed(&self, error: &DelegateSlotError) {
        #[cfg(any(feature = "logs", test))]
        if self.logs_enabled {
            tracing::event!(
                name: "layer_cake.build",
                tracing::Level::WARN,
                chain.name = %self.name,
                layer.name = error.layer(),
                layer.position = error.position(),
                "delegate slot unavailable"
            );
        }
    }
}
