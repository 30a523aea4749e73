// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "logs"), expect(rustdoc::broken_intra_doc_links))]

//! # Layer Cake
//!
//! Wire decorator layers around a base service through explicit delegate slots.
//!
//! A service contract is any trait used as a trait object, such as `dyn Pantry`. The base is a
//! plain implementation of that contract. Each layer implements the same contract and owns one
//! [`Delegate`] slot that points at the next object in the chain. Methods a layer does not care
//! about simply forward through the slot; methods it does care about can call the delegate first
//! and then add their own behavior.
//!
//! [`Cake`] takes the base and an ordered list of layers, wires every slot, and hands back the
//! outermost layer as an `Arc<S>` that can be used exactly like the base.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use layer_cake::{Cake, Delegate, Layer};
//!
//! trait Pantry {
//!     fn veggies(&self) -> Vec<&'static str>;
//! }
//!
//! struct Shelf;
//!
//! impl Pantry for Shelf {
//!     fn veggies(&self) -> Vec<&'static str> {
//!         vec!["Artichoke"]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Herb {
//!     token: &'static str,
//!     next: Delegate<dyn Pantry>,
//! }
//!
//! impl Pantry for Herb {
//!     fn veggies(&self) -> Vec<&'static str> {
//!         let mut veggies = self.next.veggies();
//!         veggies.push(self.token);
//!         veggies
//!     }
//! }
//!
//! impl Layer<dyn Pantry> for Herb {
//!     fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Pantry>> {
//!         Some(&mut self.next)
//!     }
//!
//!     fn into_service(self: Box<Self>) -> Arc<dyn Pantry> {
//!         Arc::new(*self)
//!     }
//! }
//!
//! let herb = |token| Herb { token, ..Herb::default() };
//!
//! let pantry = Cake::<dyn Pantry>::new(Arc::new(Shelf))
//!     .layer(herb("Basil"))
//!     .layer(herb("Cilantro"))
//!     .layer(herb("Dill"))
//!     .build()?;
//!
//! assert_eq!(pantry.veggies(), ["Artichoke", "Dill", "Cilantro", "Basil"]);
//! # Ok::<(), layer_cake::DelegateSlotError>(())
//! ```
//!
//! ## Key Concepts
//!
//! - **Base**: the terminal implementation of the contract. It is never inspected and never
//!   needs a delegate slot.
//! - **Layer**: a type implementing both the contract and the [`Layer`] trait. The trait exposes
//!   the layer's [`Delegate`] slot and turns the wired layer into an `Arc<S>`.
//! - **Empty layer**: a `None` position. Empty positions are skipped during construction, which
//!   makes it easy to switch layers on and off without changing the call site. See
//!   [`include_if`] and [`include_if_with`].
//! - **Composite**: the outermost present layer, returned by [`Cake::build`] or [`layered`].
//!
//! ## Chain Order
//!
//! Layers are listed outermost first. The first present layer receives every call, its slot
//! points at the second present layer, and so on, with the last present layer pointing at the
//! base. A layer that delegates first and appends afterwards therefore sees the output of every
//! layer listed after it.
//!
//! ## Errors
//!
//! Construction fails with [`DelegateSlotError`] when a present layer reports no delegate slot or
//! when its slot is already wired. The first offending layer in input order is reported and no
//! partial chain is returned.
//!
//! ## Thread Safety
//!
//! Building is synchronous and touches only the values handed to it. Layers are moved into the
//! builder, so a single layer value can never be wired into two chains. Use `dyn Trait + Send +
//! Sync` as the contract when the composite has to cross threads.
//!
//! ## Features
//!
//! - **`logs`**: Emits `tracing` events for successful and failed builds once enabled with
//!   [`Cake::enable_logs`].

mod cake;
pub use cake::{Cake, layered};

mod conditional;
pub use conditional::{include_if, include_if_with};

mod delegate;
pub use delegate::Delegate;

mod error;
pub use error::DelegateSlotError;

mod layer;
pub use layer::Layer;

pub mod prelude;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
pub(crate) mod testing;
