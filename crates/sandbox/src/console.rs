//! Browser console logging.
//!
//! Only WASM builds have a console to write to; elsewhere the macros still
//! type-check their arguments but emit nothing.

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::log_1(&::std::format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ::std::format_args!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::warn_1(&::std::format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ::std::format_args!($($arg)*);
    }};
}
