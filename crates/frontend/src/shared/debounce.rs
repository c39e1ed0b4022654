//! Debounce timers and latest-request tracking shared by the search inputs.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A cancellable `setTimeout` slot: scheduling replaces the pending call.
#[derive(Clone, Copy)]
pub struct Debouncer {
    handle: StoredValue<Option<i32>>,
    delay_ms: i32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        let handle = StoredValue::new(None::<i32>);
        on_cleanup(move || {
            if let Some(id) = handle.try_get_value().flatten() {
                if let Some(w) = web_sys::window() {
                    w.clear_timeout_with_handle(id);
                }
            }
        });
        Self {
            handle,
            delay_ms: delay_ms.min(i32::MAX as u32) as i32,
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        self.cancel();

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(f);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            self.delay_ms,
        ) {
            Ok(id) => self.handle.set_value(Some(id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
            self.handle.set_value(None);
        }
    }
}

/// Monotonic ticket counter; only the newest ticket's response is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Invalidate every outstanding ticket without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Reactive wrapper around [`RequestSeq`].
#[derive(Clone, Copy)]
pub struct LatestOnly(StoredValue<RequestSeq>);

impl LatestOnly {
    pub fn new() -> Self {
        Self(StoredValue::new(RequestSeq::default()))
    }

    pub fn ticket(&self) -> u64 {
        let mut ticket = 0;
        self.0.update_value(|seq| ticket = seq.next());
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0
            .try_with_value(|seq| seq.is_current(ticket))
            .unwrap_or(false)
    }

    pub fn invalidate(&self) {
        self.0.update_value(|seq| seq.invalidate());
    }
}

impl Default for LatestOnly {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_drops_outstanding_ticket() {
        let mut seq = RequestSeq::default();
        let ticket = seq.next();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }
}
