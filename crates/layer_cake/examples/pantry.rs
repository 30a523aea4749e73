// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decorating a service with layers.
//!
//! Builds a pantry from a base shelf and three herb layers. Every herb asks the layer below it
//! first and then adds its own entry, so the innermost herb's entry comes right after the shelf's.

use std::sync::Arc;

use layer_cake::prelude::*;

trait Pantry {
    fn fruits(&self) -> Vec<&'static str>;

    fn veggies(&self) -> Vec<&'static str>;
}

struct Shelf;

impl Pantry for Shelf {
    fn fruits(&self) -> Vec<&'static str> {
        vec!["Apple"]
    }

    fn veggies(&self) -> Vec<&'static str> {
        vec!["Artichoke"]
    }
}

#[derive(Default)]
struct Herb {
    veggie: &'static str,
    fruit: Option<&'static str>,
    next: Delegate<dyn Pantry>,
}

impl Pantry for Herb {
    fn fruits(&self) -> Vec<&'static str> {
        let mut fruits = self.next.fruits();
        fruits.extend(self.fruit);
        fruits
    }

    fn veggies(&self) -> Vec<&'static str> {
        let mut veggies = self.next.veggies();
        veggies.push(self.veggie);
        veggies
    }
}

impl Layer<dyn Pantry> for Herb {
    fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Pantry>> {
        Some(&mut self.next)
    }

    fn into_service(self: Box<Self>) -> Arc<dyn Pantry> {
        Arc::new(*self)
    }
}

fn main() -> Result<(), layer_cake::DelegateSlotError> {
    let pantry = Cake::<dyn Pantry>::new(Arc::new(Shelf))
        .layer(Herb {
            veggie: "Basil",
            fruit: Some("Banana"),
            ..Herb::default()
        })
        .layer(Herb {
            veggie: "Cilantro",
            ..Herb::default()
        })
        .layer(Herb {
            veggie: "Dill",
            fruit: Some("Durian"),
            ..Herb::default()
        })
        .build()?;

    // [Apple, Durian, Banana]
    println!("fruits: {:?}", pantry.fruits());

    // [Artichoke, Dill, Cilantro, Basil]
    println!("veggies: {:?}", pantry.veggies());

    Ok(())
}
