#![macro_use]
#![allow(unused)]

// Logging forwards to defmt on target builds. Host test binaries have no
// defmt global logger to link against, so the calls compile away there.

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(any(not(feature = "defmt"), test))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(any(not(feature = "defmt"), test))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::info!($s $(, $x)*);
            #[cfg(any(not(feature = "defmt"), test))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(any(not(feature = "defmt"), test))]
            let _ = ($( & $x ),*);
        }
    };
}

#[allow(unused_macros)]
#[collapse_debuginfo(yes)]
macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", not(test)))]
            ::defmt::error!($s $(, $x)*);
            #[cfg(any(not(feature = "defmt"), test))]
            let _ = ($( & $x ),*);
        }
    };
}
