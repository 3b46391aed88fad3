//! Engine logging
//!
//! `wasm32`: forwarded to the browser console.
//! Native: arguments are still type-checked, nothing is printed.

/// Log a formatted line through the host console
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
