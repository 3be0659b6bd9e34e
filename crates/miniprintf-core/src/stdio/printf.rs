//! printf formatting engine.
//!
//! Interprets the `cspdiuxX%` subset of the C `printf` format language. The
//! scanner walks the format string once and writes each literal run straight
//! to the sink; every `%` directive is dispatched through a closed specifier
//! table to a handler that consumes at most one argument from the cursor.
//!
//! Reference: POSIX.1-2024 fprintf, ISO C11 7.21.6.1
//!
//! Field width, precision, flags, length modifiers and floating-point
//! conversions are not interpreted. A byte after `%` that is not in the table
//! is echoed back as `%` plus that byte, the way glibc degrades.

use std::io::{self, Write};

use super::arg::{Arg, ArgCursor};
use super::base::{DigitAlphabet, write_signed, write_unsigned};
use super::sink::{StdoutSink, emit};

/// Output for a null `%s` argument.
pub const NULL_STR: &[u8] = b"(null)";
/// Output for a null `%p` argument.
pub const NIL_PTR: &[u8] = b"(nil)";

// ---------------------------------------------------------------------------
// Specifier table
// ---------------------------------------------------------------------------

/// A conversion specifier understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    /// `%c`
    Char,
    /// `%s`
    Str,
    /// `%p`
    Pointer,
    /// `%d`
    Decimal,
    /// `%i`
    Integer,
    /// `%u`
    Unsigned,
    /// `%x`
    HexLower,
    /// `%X`
    HexUpper,
    /// `%%`
    Percent,
}

/// Selector byte to specifier, in lookup order.
pub const SPECIFIER_TABLE: [(u8, Specifier); 9] = [
    (b'c', Specifier::Char),
    (b's', Specifier::Str),
    (b'p', Specifier::Pointer),
    (b'd', Specifier::Decimal),
    (b'i', Specifier::Integer),
    (b'u', Specifier::Unsigned),
    (b'x', Specifier::HexLower),
    (b'X', Specifier::HexUpper),
    (b'%', Specifier::Percent),
];

impl Specifier {
    /// Look up the specifier for a selector byte.
    #[must_use]
    pub fn from_selector(selector: u8) -> Option<Self> {
        SPECIFIER_TABLE
            .iter()
            .find(|(s, _)| *s == selector)
            .map(|&(_, spec)| spec)
    }

    /// The selector byte that follows `%`.
    #[must_use]
    pub fn selector(self) -> u8 {
        match self {
            Self::Char => b'c',
            Self::Str => b's',
            Self::Pointer => b'p',
            Self::Decimal => b'd',
            Self::Integer => b'i',
            Self::Unsigned => b'u',
            Self::HexLower => b'x',
            Self::HexUpper => b'X',
            Self::Percent => b'%',
        }
    }

    /// Whether rendering this specifier consumes one argument.
    #[must_use]
    pub fn consumes_argument(self) -> bool {
        !matches!(self, Self::Percent)
    }

    /// Render one directive, consuming its argument from `args`.
    pub fn render<W: Write + ?Sized>(
        self,
        out: &mut W,
        args: &mut ArgCursor<'_, '_>,
    ) -> io::Result<usize> {
        match self {
            Self::Char | Self::Str => render_text(self, out, args),
            Self::Pointer => render_pointer(out, args),
            Self::Decimal | Self::Integer | Self::Unsigned => render_decimal(self, out, args),
            Self::HexLower | Self::HexUpper => render_hex(self, out, args),
            Self::Percent => emit(out, b"%"),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `%c` writes one byte; `%s` writes the string bytes or `(null)`.
fn render_text<W: Write + ?Sized>(
    spec: Specifier,
    out: &mut W,
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<usize> {
    if spec == Specifier::Char {
        return emit(out, &[args.next_byte()]);
    }
    match args.next_str() {
        Some(s) => emit(out, s),
        None => emit(out, NULL_STR),
    }
}

/// `%p`: `0x` plus lowercase hex, or `(nil)`.
fn render_pointer<W: Write + ?Sized>(
    out: &mut W,
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<usize> {
    let addr = args.next_address();
    if addr == 0 {
        return emit(out, NIL_PTR);
    }
    let mut written = emit(out, b"0x")?;
    written += write_unsigned(out, addr as u64, &DigitAlphabet::HEX_LOWER)?;
    Ok(written)
}

/// `%x` / `%X` read an `unsigned int`.
fn render_hex<W: Write + ?Sized>(
    spec: Specifier,
    out: &mut W,
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<usize> {
    let value = u64::from(args.next_c_uint());
    let alphabet = if spec == Specifier::HexUpper {
        DigitAlphabet::HEX_UPPER
    } else {
        DigitAlphabet::HEX_LOWER
    };
    write_unsigned(out, value, &alphabet)
}

/// `%d` / `%i` read an `int`; `%u` reads an `unsigned int`.
fn render_decimal<W: Write + ?Sized>(
    spec: Specifier,
    out: &mut W,
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<usize> {
    if spec == Specifier::Unsigned {
        write_unsigned(out, u64::from(args.next_c_uint()), &DigitAlphabet::DECIMAL)
    } else {
        write_signed(out, i64::from(args.next_c_int()), &DigitAlphabet::DECIMAL)
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Outcome of dispatching the byte after a `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A table specifier was rendered.
    Rendered(usize),
    /// Unknown selector echoed as `%` plus the byte.
    Passthrough(usize),
    /// The format string ended right after `%`. Nothing was written.
    EndOfFormat,
}

impl Dispatch {
    /// Bytes written for this directive.
    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            Self::Rendered(n) | Self::Passthrough(n) => n,
            Self::EndOfFormat => 0,
        }
    }
}

/// Dispatch the byte following `%` (`None` at end of format).
pub fn dispatch_specifier<W: Write + ?Sized>(
    selector: Option<u8>,
    out: &mut W,
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<Dispatch> {
    let Some(selector) = selector else {
        return Ok(Dispatch::EndOfFormat);
    };
    match Specifier::from_selector(selector) {
        Some(spec) => spec.render(out, args).map(Dispatch::Rendered),
        None => {
            let mut written = emit(out, b"%")?;
            written += emit(out, &[selector])?;
            Ok(Dispatch::Passthrough(written))
        }
    }
}

// ---------------------------------------------------------------------------
// Scanner and entry points
// ---------------------------------------------------------------------------

/// Scan `fmt` and render it to `out`. Returns the bytes written.
///
/// Literal runs go out in one write each. Arguments are consumed strictly
/// left to right, one per argument-taking directive; surplus arguments are
/// ignored.
pub fn format_to<W: Write + ?Sized>(
    out: &mut W,
    fmt: &[u8],
    args: &mut ArgCursor<'_, '_>,
) -> io::Result<usize> {
    let mut written = 0;
    let mut pos = 0;
    let len = fmt.len();

    while pos < len {
        let start = pos;
        while pos < len && fmt[pos] != b'%' {
            pos += 1;
        }
        if pos > start {
            written += emit(out, &fmt[start..pos])?;
        }
        if pos >= len {
            break;
        }
        match dispatch_specifier(fmt.get(pos + 1).copied(), out, args)? {
            Dispatch::EndOfFormat => break,
            dispatch => written += dispatch.bytes(),
        }
        pos += 2;
    }
    Ok(written)
}

/// Format to standard output. Returns the bytes written.
pub fn ft_printf(fmt: impl AsRef<[u8]>, args: &[Arg<'_>]) -> io::Result<usize> {
    ft_fprintf(&mut StdoutSink::new(), fmt, args)
}

/// Format to `out`. Returns the bytes written.
pub fn ft_fprintf<W: Write + ?Sized>(
    out: &mut W,
    fmt: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> io::Result<usize> {
    let mut cursor = ArgCursor::new(args);
    format_to(out, fmt.as_ref(), &mut cursor)
}

/// Format into a new byte vector.
#[must_use]
pub fn ft_sprintf(fmt: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Vec<u8> {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = ft_fprintf(&mut out, fmt, args);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stdio::arg::to_arg;

    fn render(fmt: &str, args: &[Arg<'_>]) -> (String, usize) {
        let mut out = Vec::new();
        let n = ft_fprintf(&mut out, fmt, args).unwrap();
        (String::from_utf8(out).unwrap(), n)
    }

    #[test]
    fn test_table_selectors_unique() {
        for (i, (a, _)) in SPECIFIER_TABLE.iter().enumerate() {
            for (b, _) in &SPECIFIER_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_table_roundtrips_selector() {
        for (selector, spec) in SPECIFIER_TABLE {
            assert_eq!(spec.selector(), selector);
            assert_eq!(Specifier::from_selector(selector), Some(spec));
        }
        assert_eq!(Specifier::from_selector(b'z'), None);
        assert_eq!(Specifier::from_selector(b'o'), None);
    }

    #[test]
    fn test_only_percent_consumes_nothing() {
        for (_, spec) in SPECIFIER_TABLE {
            assert_eq!(spec.consumes_argument(), spec != Specifier::Percent);
        }
    }

    #[test]
    fn test_literal_only() {
        assert_eq!(render("hello, world\n", &[]), ("hello, world\n".into(), 13));
        assert_eq!(render("", &[]), (String::new(), 0));
    }

    #[test]
    fn test_chars() {
        let args = [to_arg('A'), to_arg(65)];
        assert_eq!(render("Characters: %c %c \n", &args).1, 17);
        assert_eq!(render("%c%c", &args).0, "AA");
    }

    #[test]
    fn test_str() {
        assert_eq!(
            render("%s", &[to_arg("Hello, World!")]),
            ("Hello, World!".into(), 13)
        );
        assert_eq!(render("[%s]", &[to_arg("")]), ("[]".into(), 2));
    }

    #[test]
    fn test_null_str() {
        assert_eq!(render("%s", &[to_arg(None::<&str>)]), ("(null)".into(), 6));
    }

    #[test]
    fn test_null_pointer() {
        assert_eq!(
            render("%p", &[to_arg(core::ptr::null::<u8>())]),
            ("(nil)".into(), 5)
        );
    }

    #[test]
    fn test_pointer() {
        assert_eq!(render("%p", &[Arg::Pointer(0xDEAD)]), ("0xdead".into(), 6));
        assert_eq!(
            render("%p", &[Arg::Pointer(usize::MAX)]).0,
            format!("0x{:x}", usize::MAX)
        );
    }

    #[test]
    fn test_decimal_and_integer_agree() {
        let args = [to_arg(-1977)];
        assert_eq!(render("%d", &args), ("-1977".into(), 5));
        assert_eq!(render("%i", &args), ("-1977".into(), 5));
    }

    #[test]
    fn test_int_min() {
        assert_eq!(
            render("%d", &[to_arg(i32::MIN)]),
            ("-2147483648".into(), 11)
        );
    }

    #[test]
    fn test_unsigned_wraps_negative() {
        assert_eq!(
            render("%u %u", &[to_arg(33000), to_arg(-42)]).0,
            "33000 4294967254"
        );
        assert_eq!(render("%u", &[to_arg(u32::MAX)]).0, "4294967295");
    }

    #[test]
    fn test_hex() {
        assert_eq!(render("%x", &[to_arg(255)]), ("ff".into(), 2));
        assert_eq!(render("%X", &[to_arg(255)]), ("FF".into(), 2));
        assert_eq!(
            render("%x %X", &[to_arg(495), to_arg(-495)]).0,
            "1ef FFFFFE11"
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(render("%%", &[]), ("%".into(), 1));
        assert_eq!(render("100%%", &[]), ("100%".into(), 4));
    }

    #[test]
    fn test_percent_consumes_no_argument() {
        let args = [to_arg(7)];
        let mut out = Vec::new();
        let mut cursor = ArgCursor::new(&args);
        format_to(&mut out, b"%% %d", &mut cursor).unwrap();
        assert_eq!(out, b"% 7");
        assert_eq!(cursor.consumed(), 1);
    }

    #[test]
    fn test_unknown_specifier_passthrough() {
        assert_eq!(render("%z", &[]), ("%z".into(), 2));
        assert_eq!(render("%b %q %k", &[]), ("%b %q %k".into(), 8));
    }

    #[test]
    fn test_unknown_specifier_consumes_nothing() {
        assert_eq!(render("%k%d", &[to_arg(5)]).0, "%k5");
    }

    #[test]
    fn test_trailing_percent_is_silent() {
        assert_eq!(render("abc%", &[]), ("abc".into(), 3));
        assert_eq!(render("%", &[]), (String::new(), 0));
    }

    #[test]
    fn test_dispatch_end_of_format() {
        let mut out = Vec::new();
        let mut cursor = ArgCursor::new(&[]);
        let d = dispatch_specifier(None, &mut out, &mut cursor).unwrap();
        assert_eq!(d, Dispatch::EndOfFormat);
        assert_eq!(d.bytes(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_mixed_order() {
        let args = [
            to_arg('X'),
            to_arg(10),
            to_arg("Test"),
            to_arg(255),
            to_arg(256),
        ];
        assert_eq!(
            render("Mixed: %c %d %s %x %u\n", &args),
            ("Mixed: X 10 Test ff 256\n".into(), 24)
        );
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        assert_eq!(render("%d", &[to_arg(1), to_arg(2)]).0, "1");
    }

    #[test]
    fn test_missing_arguments_render_defaults() {
        assert_eq!(render("%d %s %p", &[]).0, "0 (null) (nil)");
    }

    #[test]
    fn test_sprintf_matches_fprintf() {
        let args = [to_arg("a"), to_arg(1)];
        let (s, n) = render("%s=%d", &args);
        let v = ft_sprintf("%s=%d", &args);
        assert_eq!(v, s.as_bytes());
        assert_eq!(v.len(), n);
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let mut out = Vec::new();
        let args = [to_arg(0xC3), to_arg(0xA9)];
        let n = ft_fprintf(&mut out, b"\xff%c%c", &args).unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, [0xFF, 0xC3, 0xA9]);
    }
}
