//! Stage stopwatch for the optional step metrics.
//! Browser: `Date.now()` milliseconds. Native: monotonic `Instant`.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn mark() -> Mark {
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_since(start: Mark) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn mark() -> Mark {
    std::time::Instant::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(start: Mark) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer(Mark);

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer(mark())
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(self.0)
    }
}
