//! Built-in case catalog.
//!
//! Each case pairs a format string with typed arguments. Together they cover
//! every specifier, boundary integers, empty and non-empty strings, null
//! references and the unknown-specifier fallback.

use crate::args::{FixtureArg, PrintfInputs};

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogCase {
    pub name: &'static str,
    pub spec_section: &'static str,
    pub inputs: PrintfInputs,
}

fn case(
    name: &'static str,
    spec_section: &'static str,
    format: &str,
    args: Vec<FixtureArg>,
) -> CatalogCase {
    CatalogCase {
        name,
        spec_section,
        inputs: PrintfInputs::new(format, args),
    }
}

fn int(v: i64) -> FixtureArg {
    FixtureArg::Int(v)
}

fn uint(v: u64) -> FixtureArg {
    FixtureArg::Uint(v)
}

fn text(s: &str) -> FixtureArg {
    FixtureArg::Str(Some(s.to_string()))
}

fn ptr(addr: u64) -> FixtureArg {
    FixtureArg::Ptr(addr)
}

const LONG_STRING: &str = "This is a very long string to test the buffer system of the \
                           ft_printf function. It should handle it correctly and print everything.";

/// The full catalog, in a stable order.
#[must_use]
pub fn printf_cases() -> Vec<CatalogCase> {
    let uintptr_max = usize::MAX as u64;
    let pointers = vec![ptr(0x7ffc_1234_5678), ptr(0x7ffc_1234_5680)];
    let mixed = vec![
        int('X' as i64),
        int(10),
        text("Test"),
        int(255),
        int(256),
    ];
    let zeros = vec![int(0), int(0), int(0), int(0)];
    vec![
        case(
            "characters",
            "7.21.6.1 c",
            "Characters: %c %c \n",
            vec![int('A' as i64), int(65)],
        ),
        case(
            "multibyte_char",
            "7.21.6.1 c",
            "Multibyte char: %c%c\n",
            vec![int(0xC3), int(0xA9)],
        ),
        case(
            "char_truncates_to_byte",
            "7.21.6.1 c",
            "[%c]",
            vec![int(0x141)],
        ),
        case(
            "string",
            "7.21.6.1 s",
            "String: %s\n",
            vec![text("Hello, World!")],
        ),
        case(
            "empty_string",
            "7.21.6.1 s",
            "Empty string: %s\n",
            vec![text("")],
        ),
        case(
            "null_string",
            "glibc (null)",
            "Null string: %s\n",
            vec![FixtureArg::Str(None)],
        ),
        case(
            "long_string",
            "7.21.6.1 s",
            "Long string: %s\n",
            vec![text(LONG_STRING)],
        ),
        case(
            "null_pointer",
            "glibc (nil)",
            "Null pointer: %p\n",
            vec![ptr(0)],
        ),
        case(
            "multiple_pointers",
            "7.21.6.1 p",
            "Multiple pointers: %p %p\n",
            pointers,
        ),
        case(
            "negative_pointer",
            "7.21.6.1 p",
            "Negative ptr: %p \n",
            vec![ptr(uintptr_max)],
        ),
        case("small_pointer", "7.21.6.1 p", "%p", vec![ptr(1)]),
        case("decimal", "7.21.6.1 d", "Decimals: %d\n", vec![int(1977)]),
        case("integer", "7.21.6.1 i", "Integers: %i\n", vec![int(-1977)]),
        case(
            "int_min",
            "7.21.6.1 d",
            "%d",
            vec![int(i64::from(i32::MIN))],
        ),
        case(
            "int_max",
            "7.21.6.1 i",
            "%i",
            vec![int(i64::from(i32::MAX))],
        ),
        case("zero", "7.21.6.1 d", "%d %u %x %X", zeros),
        case(
            "unsigned",
            "7.21.6.1 u",
            "Unsigned: %u %u\n",
            vec![int(33000), int(-42)],
        ),
        case(
            "uint_max",
            "7.21.6.1 u",
            "uintmax: %u\n",
            vec![uint(u64::from(u32::MAX))],
        ),
        case(
            "hex",
            "7.21.6.1 x",
            "Hex: %x %X\n",
            vec![int(495), int(-495)],
        ),
        case("hex_255", "7.21.6.1 x", "%x %X", vec![int(255), int(255)]),
        case("percent", "7.21.6.1 %", "Percent sign: %%\n", vec![]),
        case("mixed", "7.21.6.1", "Mixed: %c %d %s %x %u\n", mixed),
        case("literal_only", "7.21.6.1", "no directives here\n", vec![]),
        case(
            "unknown_specifiers",
            "undefined",
            "%b %q %k %m %k\n",
            vec![],
        ),
        case("trailing_percent", "undefined", "abc%", vec![]),
    ]
}
