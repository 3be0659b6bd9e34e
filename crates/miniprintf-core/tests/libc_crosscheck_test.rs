//! Integration test: integer and string directives against host snprintf.
//!
//! Validates that:
//! 1. `%d %i %u %x %X` match the host for boundary and wrapping inputs.
//! 2. `%c` keeps the same byte the host keeps.
//! 3. `%s` and `%p` null sentinels match glibc.
//!
//! Run: cargo test -p miniprintf-core --test libc_crosscheck_test

#![allow(unsafe_code)]

use std::ffi::{CStr, c_char, c_int, c_uint, c_void};

use miniprintf_core::stdio::Arg;

fn host_int(fmt: &CStr, value: c_int) -> Vec<u8> {
    let mut buf = [0u8; 64];
    // SAFETY: `fmt` reads exactly one int and `buf` is writable for its length.
    let n = unsafe { libc::snprintf(buf.as_mut_ptr().cast(), buf.len(), fmt.as_ptr(), value) };
    buf[..usize::try_from(n).expect("snprintf succeeded")].to_vec()
}

fn host_uint(fmt: &CStr, value: c_uint) -> Vec<u8> {
    let mut buf = [0u8; 64];
    // SAFETY: `fmt` reads exactly one unsigned int and `buf` is writable.
    let n = unsafe { libc::snprintf(buf.as_mut_ptr().cast(), buf.len(), fmt.as_ptr(), value) };
    buf[..usize::try_from(n).expect("snprintf succeeded")].to_vec()
}

const SAMPLES: &[i64] = &[
    0,
    1,
    -1,
    9,
    10,
    255,
    -495,
    1977,
    i32::MAX as i64,
    i32::MIN as i64,
    u32::MAX as i64,
    // wider than int; the host sees the low 32 bits
    0x1_2345_6789,
    -0x1_0000_0001,
];

#[test]
fn signed_directives_match_host() {
    for &v in SAMPLES {
        let args = [Arg::SignedInt(v)];
        for (fmt, c_fmt) in [("%d", c"%d"), ("%i", c"%i")] {
            assert_eq!(
                miniprintf_core::ft_sprintf(fmt, &args),
                host_int(c_fmt, v as c_int),
                "{fmt} of {v}"
            );
        }
    }
}

#[test]
fn unsigned_directives_match_host() {
    for &v in SAMPLES {
        let args = [Arg::SignedInt(v)];
        for (fmt, c_fmt) in [("%u", c"%u"), ("%x", c"%x"), ("%X", c"%X")] {
            assert_eq!(
                miniprintf_core::ft_sprintf(fmt, &args),
                host_uint(c_fmt, v as c_uint),
                "{fmt} of {v}"
            );
        }
    }
}

#[test]
fn char_directive_matches_host() {
    for v in [65_i64, 0xC3, 0xA9, 0x141, -1, 0x7f] {
        assert_eq!(
            miniprintf_core::ft_sprintf("%c", &[Arg::SignedInt(v)]),
            host_int(c"%c", v as c_int),
            "%c of {v}"
        );
    }
}

#[test]
fn null_sentinels_match_host() {
    let mut buf = [0u8; 32];
    // SAFETY: `%s` with a null pointer is a documented glibc extension that
    // prints "(null)"; `buf` is writable for its length.
    let n = unsafe {
        libc::snprintf(
            buf.as_mut_ptr().cast(),
            buf.len(),
            c"%s|%p".as_ptr(),
            std::ptr::null::<c_char>(),
            std::ptr::null::<c_void>(),
        )
    };
    let host = &buf[..usize::try_from(n).expect("snprintf succeeded")];
    let ours = miniprintf_core::ft_sprintf("%s|%p", &[Arg::Str(None), Arg::Pointer(0)]);
    assert_eq!(ours, host);
}
