#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        log::trace!(target: "utfconv", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
