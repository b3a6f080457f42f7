use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

/// Host-side progress reporting and cancellation.
///
/// `report` may be called from several worker threads, with fractions in
/// `[0, 1]` that are not guaranteed to arrive in increasing order.
pub trait ProgressSink: Sync {
    fn report(&self, fraction: f64);

    /// Polled between rows. Once it returns `true` no further rows start.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Discards progress and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _fraction: f64) {}
}

impl<F> ProgressSink for F
where
    F: Fn(f64) + Sync,
{
    fn report(&self, fraction: f64) {
        self(fraction)
    }
}

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl ProgressSink for CancelToken {
    fn report(&self, _fraction: f64) {}

    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }
}

/// Attaches a [`CancelToken`] to any progress sink.
pub struct WithCancel<P> {
    inner: P,
    token: CancelToken,
}

impl<P: ProgressSink> WithCancel<P> {
    pub fn new(inner: P, token: CancelToken) -> Self {
        Self { inner, token }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: ProgressSink> ProgressSink for WithCancel<P> {
    fn report(&self, fraction: f64) {
        self.inner.report(fraction)
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.inner.is_cancelled()
    }
}

/// Calls `sink.report`, swallowing a panic so a misbehaving host callback
/// cannot abort the resampling loop.
pub(crate) fn report_quietly(sink: &dyn ProgressSink, fraction: f64) {
    if panic::catch_unwind(AssertUnwindSafe(|| sink.report(fraction))).is_err() {
        warn!(fraction, "Progress callback panicked; ignoring");
    }
}

/// Polls cancellation with the same panic isolation as [`report_quietly`].
pub(crate) fn cancelled_quietly(sink: &dyn ProgressSink) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| sink.is_cancelled())).unwrap_or_else(|_| {
        warn!("Cancellation check panicked; continuing");
        false
    })
}
