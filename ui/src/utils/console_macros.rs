/// Macros for properly formatted console logging
/// In the browser these wrap gloo_console functions and prefix each line with
/// a `js_sys::Date::now()` timestamp. Native builds (unit tests, tooling) have
/// no browser console, so the same call sites forward to `tracing` instead.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("{}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::warn!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!("{}", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        gloo_console::debug!(format!("[{}] {}", js_sys::Date::now(), format!($($arg)*)));
        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!("{}", format!($($arg)*));
    }};
}
