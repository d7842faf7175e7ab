/// Emits a debug-level record with a formatted message.
///
/// Arguments after the logger are passed to [`format!`], then delegated
/// to [`Logger::debug`], so emission is still gated on the process-wide
/// debug flag.
///
/// # Examples
///
/// ```
/// use ctxlog::{debugf, Logger};
///
/// let logger = Logger::new();
/// debugf!(logger, "retrying request {} of {}", 2, 5);
/// ```
///
/// [`Logger::debug`]: crate::Logger::debug
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&::std::format!($($arg)*))
    };
}

/// Emits an info-level record with a formatted message.
///
/// Arguments after the logger are passed to [`format!`], then delegated
/// to [`Logger::info`].
///
/// # Examples
///
/// ```
/// use ctxlog::{infof, Logger};
///
/// let logger = Logger::new();
/// infof!(logger, "handled {} requests", 7);
/// ```
///
/// [`Logger::info`]: crate::Logger::info
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&::std::format!($($arg)*))
    };
}

/// Emits an error-level record with a formatted message.
///
/// Arguments after the logger are passed to [`format!`], then delegated
/// to [`Logger::error`], so the record carries a stack trace of the call
/// site.
///
/// # Examples
///
/// ```
/// use ctxlog::{errorf, Logger};
///
/// let logger = Logger::new();
/// errorf!(logger, "upstream returned {}", 502);
/// ```
///
/// [`Logger::error`]: crate::Logger::error
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&::std::format!($($arg)*))
    };
}
