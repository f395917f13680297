//! Tracing support for measuring graph and queue operations.
//!
//! Mutating operations open a span named after the method. The library never
//! installs a subscriber itself, so without [`init_tracing`] those spans are
//! inert. With the `tracing` feature disabled, everything here is a no-op.

use std::{collections::BTreeMap, time::Duration};

/// Accumulated `(total time, call count)` per span name.
pub type MethodTimings = BTreeMap<&'static str, (Duration, usize)>;

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::HashMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use super::MethodTimings;

    thread_local! {
        static TIMINGS: RefCell<HashMap<TimingScope, MethodTimings>> =
            RefCell::new(HashMap::new());
        static TIMING_SCOPE: RefCell<TimingScope> = const { RefCell::new(TimingScope::Operation) };
    }

    /// Which bucket closed spans are charged to.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum TimingScope {
        /// Ordinary calls made by the code under test.
        Operation,
        /// Calls made while verifying graph invariants.
        Consistency,
    }

    pub struct TimingScopeGuard {
        previous: TimingScope,
    }

    impl Drop for TimingScopeGuard {
        fn drop(&mut self) {
            TIMING_SCOPE.with(|scope| {
                *scope.borrow_mut() = self.previous;
            });
        }
    }

    /// Charges spans closed on this thread to `scope` until the guard drops.
    pub fn set_timing_scope(scope: TimingScope) -> TimingScopeGuard {
        let previous = TIMING_SCOPE.with(|current| current.replace(scope));
        TimingScopeGuard { previous }
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            let Some(start) = span.extensions().get::<Instant>().copied() else {
                return;
            };
            let elapsed = start.elapsed();
            let scope = TIMING_SCOPE.with(|scope| *scope.borrow());
            TIMINGS.with(|totals| {
                let mut totals = totals.borrow_mut();
                let entry = totals
                    .entry(scope)
                    .or_default()
                    .entry(name)
                    .or_insert((Duration::ZERO, 0));
                entry.0 += elapsed;
                entry.1 += 1;
            });
        }
    }

    /// Installs the global timing subscriber. Safe to call repeatedly; only
    /// the first call has any effect, and it does nothing if another global
    /// subscriber is already set.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Returns a snapshot of this thread's timings for `scope`.
    pub fn method_timings(scope: TimingScope) -> MethodTimings {
        TIMINGS.with(|totals| totals.borrow().get(&scope).cloned().unwrap_or_default())
    }

    pub fn reset_method_timings() {
        init_tracing();
        TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        dump_scope_timings(TimingScope::Operation);
        dump_scope_timings(TimingScope::Consistency);
    }

    fn dump_scope_timings(scope: TimingScope) {
        let mut entries: Vec<_> = method_timings(scope).into_iter().collect();
        entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
        eprintln!("{scope:?} timings (desc):");
        for (name, (duration, count)) in entries {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use super::MethodTimings;

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum TimingScope {
        Operation,
        Consistency,
    }

    pub struct TimingScopeGuard;

    pub fn set_timing_scope(_scope: TimingScope) -> TimingScopeGuard {
        TimingScopeGuard
    }

    pub fn init_tracing() {}

    pub fn method_timings(_scope: TimingScope) -> MethodTimings {
        MethodTimings::new()
    }

    pub fn reset_method_timings() {}

    #[doc(hidden)]
    pub fn dump_method_timings() {}

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
