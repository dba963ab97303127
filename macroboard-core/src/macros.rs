//! Logging-Fassade für die Core-Crate
//!
//! Mit Feature `defmt` werden die Makros an defmt weitergereicht,
//! ohne Feature werden die Argumente nur ausgewertet (Host-Tests, Simulation).
//!
//! Die Makros gelten per `#[macro_use]` textuell für alle Module, die in
//! `lib.rs` nach `mod macros;` deklariert sind.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:expr),*) => {
        defmt::debug!($($arg,)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:expr),*) => {
        defmt::info!($($arg,)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:expr),*) => {
        defmt::warn!($($arg,)*)
    };
}

#[cfg(feature = "defmt")]
macro_rules! error {
    ($($arg:expr),*) => {
        defmt::error!($($arg,)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! error {
    ($($arg:expr),*) => {{
        let _ = ($($arg),*);
    }};
}
