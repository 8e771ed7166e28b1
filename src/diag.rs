//! Diagnostic logging
//!
//! Messages go to `esp-println` with the `esp32-log` feature, to the `log`
//! facade with the `log` feature, and are compiled out otherwise.

/// Emit a diagnostic line using `core::fmt` syntax.
macro_rules! diag {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(not(any(feature = "esp32-log", feature = "log")))]
        let _ = core::format_args!($($arg)*);
    }};
}

pub(crate) use diag;
