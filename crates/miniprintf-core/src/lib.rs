//! # miniprintf-core
//!
//! Safe Rust implementation of a minimal `printf` formatting core.
//!
//! The engine scans a format string once, writes literal runs straight to the
//! sink, and renders each `%` directive from a typed argument sequence:
//! `%c %s %p %d %i %u %x %X %%`. No `unsafe` code is permitted at the crate
//! level.

#![deny(unsafe_code)]

pub mod stdio;

pub use stdio::{
    Arg, ArgCursor, DigitAlphabet, Specifier, ToArg, ft_fprintf, ft_printf, ft_sprintf,
};

/// Format to standard output with C `printf` semantics for `cspdiuxX%`.
///
/// Arguments are converted through [`ToArg`], so integers, characters,
/// strings, byte slices, optional strings and raw pointers can be passed
/// directly. Evaluates to `std::io::Result<usize>`, the number of bytes
/// written.
///
/// ```no_run
/// use miniprintf_core::ft_printf;
///
/// let n = ft_printf!("%s has %d items (%x)\n", "cart", 3, 255).unwrap();
/// assert_eq!(n, 22);
/// ```
#[macro_export]
macro_rules! ft_printf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::stdio::ft_printf($fmt, &[$( $crate::stdio::arg::to_arg($arg) ),*])
    }};
}

/// Format to any [`std::io::Write`] sink.
///
/// ```
/// use miniprintf_core::ft_fprintf;
///
/// let mut out = Vec::new();
/// let n = ft_fprintf!(&mut out, "%p", std::ptr::null::<u8>()).unwrap();
/// assert_eq!((n, out.as_slice()), (5, &b"(nil)"[..]));
/// ```
#[macro_export]
macro_rules! ft_fprintf {
    ($out:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::stdio::ft_fprintf($out, $fmt, &[$( $crate::stdio::arg::to_arg($arg) ),*])
    }};
}

/// Format into a freshly allocated byte vector.
///
/// ```
/// use miniprintf_core::ft_sprintf;
///
/// assert_eq!(ft_sprintf!("%d%%", -7), b"-7%");
/// ```
#[macro_export]
macro_rules! ft_sprintf {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::stdio::ft_sprintf($fmt, &[$( $crate::stdio::arg::to_arg($arg) ),*])
    }};
}
