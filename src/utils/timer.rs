use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use notes_buddy_core::Delay;

/// Latency backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn wait(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }
}
