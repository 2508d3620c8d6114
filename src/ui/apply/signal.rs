//! Handle connecting the wizard's "Next" button to the palette step
//!
//! The palette step registers a handler while it is mounted. The wizard
//! dispatches through the handle when step 3 passes validation, which opens
//! the confirmation dialog. Dispatch is synchronous and runs the handler at
//! most once per call.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PaletteSignal {
    handler: StoredValue<Option<Callback<()>>>,
}

impl Default for PaletteSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteSignal {
    pub fn new() -> Self {
        Self {
            handler: StoredValue::new(None),
        }
    }

    /// Install the receiver, replacing any previous one
    pub fn register(&self, handler: Callback<()>) {
        self.handler.set_value(Some(handler));
    }

    pub fn unregister(&self) {
        self.handler.set_value(None);
    }

    pub fn is_registered(&self) -> bool {
        self.handler.with_value(Option::is_some)
    }

    /// Run the receiver. Returns `false` when nothing is listening.
    pub fn dispatch(&self) -> bool {
        match self.handler.try_get_value().flatten() {
            Some(handler) => {
                handler.run(());
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dispatch_without_receiver() {
        let owner = Owner::new();
        owner.with(|| {
            let signal = PaletteSignal::new();
            assert!(!signal.is_registered());
            assert!(!signal.dispatch());
        });
    }

    #[test]
    fn test_dispatch_runs_receiver_once_per_call() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let signal = PaletteSignal::new();
            let counter = Arc::clone(&calls);
            signal.register(Callback::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

            assert!(signal.dispatch());
            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert!(signal.dispatch());
            assert_eq!(calls.load(Ordering::SeqCst), 2);

            signal.unregister();
            assert!(!signal.dispatch());
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }
}
