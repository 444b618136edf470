//! View-scoped sleeps for simulated latency and the session countdown.
//!
//! A page creates one [`ViewAlive`] flag; it flips to `false` when the
//! owning view is cleaned up, and every sleep reports whether the view is
//! still mounted once it wakes. Sleeping only exists in the browser build;
//! server rendering stops at the first loading state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "hydrate")]
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ViewAlive(Arc<AtomicBool>);

impl ViewAlive {
    /// New flag, cleared by the current reactive owner's cleanup.
    #[must_use]
    pub fn new() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let cleared = flag.clone();
        leptos::prelude::on_cleanup(move || cleared.store(false, Ordering::Relaxed));
        Self(flag)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Sleep for `duration`; `false` means the view is gone and the caller
    /// should drop whatever it was about to do.
    #[cfg(feature = "hydrate")]
    pub async fn sleep(&self, duration: Duration) -> bool {
        gloo_timers::future::sleep(duration).await;
        self.is_alive()
    }
}

impl Default for ViewAlive {
    fn default() -> Self {
        Self::new()
    }
}
