// Optional logging: expands to `log` when the feature is on, to nothing otherwise.

#[cfg(feature = "log")]
macro_rules! driver_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! driver_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! driver_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! driver_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! driver_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! driver_warn {
    ($($arg:tt)*) => {};
}
