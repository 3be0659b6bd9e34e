//! Standard I/O operations.
//!
//! Implements the formatted-output subset of `<stdio.h>`: the format scanner,
//! specifier dispatch, argument handlers, the base converter and the sinks
//! they write to.

pub mod arg;
pub mod base;
pub mod printf;
pub mod sink;

pub use arg::{Arg, ArgCursor, ToArg};
pub use base::{AlphabetError, DigitAlphabet, write_signed, write_unsigned};
pub use printf::{
    Dispatch, SPECIFIER_TABLE, Specifier, dispatch_specifier, format_to, ft_fprintf, ft_printf,
    ft_sprintf,
};
pub use sink::{CountingSink, StdoutSink};
