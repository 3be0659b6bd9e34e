//! Typed argument values and the forward-only argument cursor.
//!
//! C passes `printf` arguments through an untyped `va_list` and trusts the
//! caller to match each directive. Here every argument is tagged with its
//! variant up front; the handler for a directive then narrows the slot to the
//! C type that directive declares, so output matches the host routine
//! bit-for-bit.

/// Typed argument value for safe formatting.
///
/// Integers are widened to 64 bits on the way in; handlers narrow them back to
/// the width their specifier reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    SignedInt(i64),
    UnsignedInt(u64),
    /// String bytes, or `None` for a null `char *`.
    Str(Option<&'a [u8]>),
    /// Address-sized value; 0 is the null pointer.
    Pointer(usize),
}

impl<'a> Arg<'a> {
    /// Reinterpret the slot as a signed 64-bit value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::SignedInt(v) => v,
            other => other.as_u64() as i64,
        }
    }

    /// Reinterpret the slot as an unsigned 64-bit value.
    ///
    /// Strings reinterpret as their address, the same bits a C callee would
    /// find in the slot.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        match self {
            Self::SignedInt(v) => v as u64,
            Self::UnsignedInt(v) => v,
            Self::Str(Some(s)) => s.as_ptr() as usize as u64,
            Self::Str(None) => 0,
            Self::Pointer(addr) => addr as u64,
        }
    }

    /// Reinterpret the slot as an address.
    #[must_use]
    pub fn as_address(self) -> usize {
        self.as_u64() as usize
    }

    /// String view of the slot. Non-string slots read as null.
    #[must_use]
    pub fn as_bytes(self) -> Option<&'a [u8]> {
        match self {
            Self::Str(s) => s,
            _ => None,
        }
    }
}

/// Conversion into an [`Arg`].
///
/// Implemented for the primitive integers, `char`, `bool`, string and byte
/// slices (optionally nullable) and sized raw pointers.
///
/// Integers keep their full 64-bit value here, but every integer directive
/// reads a C-sized slot: `%d`/`%i` take the low 32 bits as `int`,
/// `%u`/`%x`/`%X` as `unsigned int`, and `%c` keeps the low byte. So
/// `ft_sprintf!("%d", i64::MIN)` renders `0` and `%u` of `u64::MAX` renders
/// `4294967295`, matching a C cast to `int` or `unsigned int`.
pub trait ToArg<'a> {
    fn to_arg(self) -> Arg<'a>;
}

/// Free-function form of [`ToArg::to_arg`], used by the formatting macros so
/// untyped integer literals fall back to `i32` like C's default promotion.
#[must_use]
pub fn to_arg<'a, T: ToArg<'a>>(value: T) -> Arg<'a> {
    value.to_arg()
}

macro_rules! signed_to_arg {
    ($($t:ty),*) => {$(
        impl<'a> ToArg<'a> for $t {
            fn to_arg(self) -> Arg<'a> {
                Arg::SignedInt(self as i64)
            }
        }
    )*};
}

macro_rules! unsigned_to_arg {
    ($($t:ty),*) => {$(
        impl<'a> ToArg<'a> for $t {
            fn to_arg(self) -> Arg<'a> {
                Arg::UnsignedInt(self as u64)
            }
        }
    )*};
}

signed_to_arg!(i8, i16, i32, i64, isize);
unsigned_to_arg!(u8, u16, u32, u64, usize);

impl<'a> ToArg<'a> for char {
    fn to_arg(self) -> Arg<'a> {
        Arg::UnsignedInt(u64::from(u32::from(self)))
    }
}

impl<'a> ToArg<'a> for bool {
    fn to_arg(self) -> Arg<'a> {
        Arg::SignedInt(i64::from(self))
    }
}

impl<'a> ToArg<'a> for &'a str {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_bytes()))
    }
}

impl<'a> ToArg<'a> for &'a String {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_bytes()))
    }
}

impl<'a> ToArg<'a> for &'a [u8] {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(Some(self))
    }
}

impl<'a, const N: usize> ToArg<'a> for &'a [u8; N] {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_slice()))
    }
}

impl<'a> ToArg<'a> for Option<&'a str> {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(self.map(str::as_bytes))
    }
}

impl<'a> ToArg<'a> for Option<&'a [u8]> {
    fn to_arg(self) -> Arg<'a> {
        Arg::Str(self)
    }
}

impl<'a, T> ToArg<'a> for *const T {
    fn to_arg(self) -> Arg<'a> {
        Arg::Pointer(self as usize)
    }
}

impl<'a, T> ToArg<'a> for *mut T {
    fn to_arg(self) -> Arg<'a> {
        Arg::Pointer(self as usize)
    }
}

impl<'a> ToArg<'a> for Arg<'a> {
    fn to_arg(self) -> Arg<'a> {
        self
    }
}

/// Forward-only view over the caller's arguments.
///
/// Each `next_*` call advances exactly one slot. Reading past the end is a
/// caller contract violation; it yields zero or the null sentinel instead of
/// failing.
#[derive(Debug, Clone)]
pub struct ArgCursor<'a, 'b> {
    slots: core::slice::Iter<'b, Arg<'a>>,
    consumed: usize,
}

impl<'a, 'b> ArgCursor<'a, 'b> {
    #[must_use]
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self {
            slots: args.iter(),
            consumed: 0,
        }
    }

    /// Number of slots consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of slots not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    /// Advance one slot. `None` once the sequence is exhausted.
    pub fn next_arg(&mut self) -> Option<Arg<'a>> {
        let arg = self.slots.next().copied();
        if arg.is_some() {
            self.consumed += 1;
        }
        arg
    }

    /// Read a C `int`.
    pub fn next_c_int(&mut self) -> i32 {
        self.next_arg().map_or(0, |a| a.as_i64() as i32)
    }

    /// Read a C `unsigned int`.
    pub fn next_c_uint(&mut self) -> u32 {
        self.next_arg().map_or(0, |a| a.as_u64() as u32)
    }

    /// Read an `int` promoted character and keep its low 8 bits.
    pub fn next_byte(&mut self) -> u8 {
        self.next_c_int() as u8
    }

    /// Read a nullable `char *`.
    pub fn next_str(&mut self) -> Option<&'a [u8]> {
        self.next_arg().and_then(Arg::as_bytes)
    }

    /// Read a `void *`.
    pub fn next_address(&mut self) -> usize {
        self.next_arg().map_or(0, Arg::as_address)
    }
}
