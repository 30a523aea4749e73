// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Switching layers on and off.
//!
//! Shows `layer_if` and `layer_if_with` keeping the chain definition in one place while the
//! layers that actually get wired depend on runtime flags. Build events are logged through
//! `tracing`.

use std::sync::Arc;

use layer_cake::prelude::*;
use tracing_subscriber::fmt;

trait Quote {
    fn price(&self, amount: u64) -> u64;
}

struct ListPrice;

impl Quote for ListPrice {
    fn price(&self, amount: u64) -> u64 {
        amount * 10
    }
}

struct Discount {
    percent: u64,
    next: Delegate<dyn Quote>,
}

impl Quote for Discount {
    fn price(&self, amount: u64) -> u64 {
        self.next.price(amount) * (100 - self.percent) / 100
    }
}

impl Layer<dyn Quote> for Discount {
    fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Quote>> {
        Some(&mut self.next)
    }

    fn into_service(self: Box<Self>) -> Arc<dyn Quote> {
        Arc::new(*self)
    }
}

fn discount(percent: u64) -> Discount {
    println!("building {percent}% discount");
    Discount {
        percent,
        next: Delegate::new(),
    }
}

fn main() -> Result<(), layer_cake::DelegateSlotError> {
    fmt().with_max_level(tracing::Level::DEBUG).init();

    let member = true;
    let holiday = false;

    let quote = Cake::<dyn Quote>::new(Arc::new(ListPrice))
        .name("checkout")
        .enable_logs()
        .layer_if(member, discount(10))
        .layer_if_with(holiday, || discount(25))
        .build()?;

    println!("price for 3: {}", quote.price(3));

    Ok(())
}
