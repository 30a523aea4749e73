// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Common imports for building layer chains.
//!
//! Re-exports the most commonly used items from [`layer_cake`][crate].

pub use crate::{Cake, Delegate, Layer, include_if, include_if_with};
