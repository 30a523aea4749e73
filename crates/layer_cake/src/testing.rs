// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Write;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::{Delegate, Layer};

/// Test contract with two operations, so layers can override one and forward the other.
pub(crate) trait Pantry {
    fn fruits(&self) -> Vec<&'static str>;

    fn veggies(&self) -> Vec<&'static str>;

    /// Names of every object a call passes through, outermost first, ending at the base.
    fn trail(&self) -> Vec<&'static str>;
}

/// The base of every test chain.
#[derive(Debug)]
pub(crate) struct Shelf;

impl Pantry for Shelf {
    fn fruits(&self) -> Vec<&'static str> {
        vec!["Apple"]
    }

    fn veggies(&self) -> Vec<&'static str> {
        vec!["Artichoke"]
    }

    fn trail(&self) -> Vec<&'static str> {
        vec!["Shelf"]
    }
}

/// Delegates first, then appends its own veggie and, when set, its own fruit.
#[derive(Debug, Default)]
pub(crate) struct Herb {
    veggie: &'static str,
    fruit: Option<&'static str>,
    pub(crate) next: Delegate<dyn Pantry>,
}

impl Herb {
    pub(crate) fn new(veggie: &'static str) -> Self {
        Self { veggie, ..Self::default() }
    }

    pub(crate) fn with_fruit(veggie: &'static str, fruit: &'static str) -> Self {
        Self {
            veggie,
            fruit: Some(fruit),
            ..Self::default()
        }
    }
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

    fn trail(&self) -> Vec<&'static str> {
        let mut trail = vec![self.veggie];
        trail.extend(self.next.trail());
        trail
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

/// Forwards every operation untouched.
#[derive(Debug, Default)]
pub(crate) struct Passthrough {
    next: Delegate<dyn Pantry>,
}

impl Pantry for Passthrough {
    fn fruits(&self) -> Vec<&'static str> {
        self.next.fruits()
    }

    fn veggies(&self) -> Vec<&'static str> {
        self.next.veggies()
    }

    fn trail(&self) -> Vec<&'static str> {
        let mut trail = vec!["Passthrough"];
        trail.extend(self.next.trail());
        trail
    }
}

impl Layer<dyn Pantry> for Passthrough {
    fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Pantry>> {
        Some(&mut self.next)
    }

    fn into_service(self: Box<Self>) -> Arc<dyn Pantry> {
        Arc::new(*self)
    }
}

/// A layer that reports no delegate slot.
#[derive(Debug)]
pub(crate) struct Slotless;

impl Pantry for Slotless {
    fn fruits(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn veggies(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn trail(&self) -> Vec<&'static str> {
        vec!["Slotless"]
    }
}

impl Layer<dyn Pantry> for Slotless {
    fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Pantry>> {
        None
    }

    fn into_service(self: Box<Self>) -> Arc<dyn Pantry> {
        Arc::new(*self)
    }

    fn name(&self) -> &'static str {
        "slotless"
    }
}

/// Thread-local log capture buffer for testing.
///
/// Uses `tracing_subscriber::fmt::MakeWriter` to capture formatted log output
/// into a buffer that can be inspected in tests.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured log output as a string.
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    /// Asserts that the captured log output contains the given string.
    pub fn assert_contains(&self, expected: &str) {
        let output = self.output();
        assert!(
            output.contains(expected),
            "log output does not contain '{expected}', got:\n{output}"
        );
    }

    /// Creates a `tracing_subscriber` that writes to this capture buffer.
    /// Use with `set_default()` for thread-local capture.
    #[must_use]
    pub fn subscriber(&self) -> impl tracing::Subscriber {
        use tracing_subscriber::layer::SubscriberExt;
        tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(self.clone()).with_ansi(false))
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

/// Writer that appends to a shared buffer.
pub(crate) struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
