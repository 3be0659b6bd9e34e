//! Integration test: printf engine through the public API.
//!
//! Validates that:
//! 1. The formatting macros accept mixed argument types in order.
//! 2. Returned counts equal the bytes the sink actually received.
//! 3. Repeated calls leave no state behind.
//! 4. Sink failures propagate and already-written bytes stay written.
//! 5. `ft_printf!` reaches process stdout unbuffered, with exact counts.
//! 6. 64-bit arguments narrow to the width the directive reads.
//!
//! Run: cargo test -p miniprintf-core --test printf_engine_test

use std::io::{self, Write};
use std::process::Command;

use miniprintf_core::stdio::{Arg, ArgCursor, CountingSink, StdoutSink, format_to};
use miniprintf_core::{ft_fprintf, ft_printf, ft_sprintf};

const STDOUT_CHILD_ENV: &str = "MINIPRINTF_STDOUT_CHILD";

/// Accepts `limit` bytes, then fails with `BrokenPipe`.
struct BrokenPipeAfter {
    accepted: Vec<u8>,
    limit: usize,
}

impl Write for BrokenPipeAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.accepted.len();
        if room == 0 {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        let n = room.min(buf.len());
        self.accepted.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn macros_accept_mixed_arguments() {
    let owned = String::from("Boo");
    let value = 5u8;
    let out = ft_sprintf!(
        "%s %c %d %u %x %X %p %%",
        &owned,
        'z',
        -3,
        7u64,
        0xabc,
        0xabc,
        &value as *const u8
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Boo z -3 7 abc ABC 0x"), "got {text}");
    assert!(text.ends_with(" %"));
}

#[test]
fn macro_without_arguments() {
    assert_eq!(ft_sprintf!("plain"), b"plain");
    assert_eq!(ft_sprintf!("%%%%"), b"%%");
}

#[test]
fn count_matches_sink_bytes() {
    let formats: [(&str, Vec<Arg<'_>>); 4] = [
        ("Hex: %x %X\n", vec![Arg::SignedInt(495), Arg::SignedInt(-495)]),
        ("%s|%s", vec![Arg::Str(None), Arg::Str(Some(&b"abc"[..]))]),
        ("%p %p", vec![Arg::Pointer(0), Arg::Pointer(0x1000)]),
        ("%d%i%u%c", vec![
            Arg::SignedInt(i64::from(i32::MIN)),
            Arg::SignedInt(i64::from(i32::MAX)),
            Arg::UnsignedInt(u64::from(u32::MAX)),
            Arg::SignedInt(b'!' as i64),
        ]),
    ];
    for (fmt, args) in &formats {
        let mut sink = CountingSink::new(Vec::new());
        let n = miniprintf_core::ft_fprintf(&mut sink, fmt, args).unwrap();
        assert_eq!(n, sink.written(), "format {fmt:?}");
    }
}

#[test]
fn one_write_per_literal_run_and_unit() {
    let mut sink = CountingSink::new(Vec::new());
    let n = ft_fprintf!(&mut sink, "ab%dcd%s", 12, "xy").unwrap();
    assert_eq!(n, 8);
    // "ab", "12", "cd", "xy"
    assert_eq!(sink.writes(), 4);
}

#[test]
fn repeated_calls_are_identical() {
    let args = [
        Arg::SignedInt(-1),
        Arg::Str(Some(&b"s"[..])),
        Arg::Pointer(0xff),
    ];
    let first = miniprintf_core::ft_sprintf("%d %s %p", &args);
    let second = miniprintf_core::ft_sprintf("%d %s %p", &args);
    assert_eq!(first, second);
    assert_eq!(first, b"-1 s 0xff");
}

#[test]
fn cursor_is_shared_in_order_across_directives() {
    let args = [
        Arg::SignedInt(1),
        Arg::SignedInt(2),
        Arg::SignedInt(3),
        Arg::SignedInt(4),
    ];
    let mut cursor = ArgCursor::new(&args);
    let mut out = Vec::new();
    let n = format_to(&mut out, b"%d%%%z%d", &mut cursor).unwrap();
    assert_eq!(out, b"1%%z2");
    assert_eq!(n, 5);
    assert_eq!(cursor.consumed(), 2);
    assert_eq!(cursor.remaining(), 2);
}

#[test]
fn sink_failure_propagates() {
    let mut sink = BrokenPipeAfter {
        accepted: Vec::new(),
        limit: 4,
    };
    let err = ft_fprintf!(&mut sink, "abc%s", "def").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(sink.accepted, b"abcd");
}

#[test]
fn long_string_is_not_truncated() {
    let long = "This is a very long string to test the buffer system of the ft_printf \
                function. It should handle it correctly and print everything.";
    let out = ft_sprintf!("Long string: %s\n", long);
    assert_eq!(out.len(), "Long string: \n".len() + long.len());
}

#[test]
fn wide_integers_narrow_to_directive_width() {
    assert_eq!(ft_sprintf!("%d", i64::MIN), b"0");
    assert_eq!(ft_sprintf!("%d", (1_i64 << 32) | 5), b"5");
    assert_eq!(ft_sprintf!("%i", i64::from(u32::MAX)), b"-1");
    assert_eq!(ft_sprintf!("%u", u64::MAX), b"4294967295");
    assert_eq!(ft_sprintf!("%x", 0x1_0000_00ff_u64), b"ff");
    assert_eq!(ft_sprintf!("%c", 0x141_u64), b"A");
}

/// Body of the child process spawned by `ft_printf_writes_to_process_stdout`.
#[test]
fn stdout_child_writes() {
    if std::env::var_os(STDOUT_CHILD_ENV).is_none() {
        return;
    }
    let a = ft_printf!("<<a%sb%d%%%z|%\n>>", None::<&str>, i64::MIN).unwrap();
    let b = ft_printf!("x%").unwrap();
    let c = ft_fprintf!(&mut StdoutSink::default(), "[%X]", 255).unwrap();
    eprintln!("counts={a},{b},{c}");
}

#[test]
fn ft_printf_writes_to_process_stdout() {
    let output = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "stdout_child_writes", "--nocapture", "--test-threads=1"])
        .env(STDOUT_CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let expected: &[u8] = b"<<a(null)b0%%z|%\n>>x[FF]";
    assert!(
        output.stdout.windows(expected.len()).any(|w| w == expected),
        "stdout: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("counts=19,1,4"), "stderr: {stderr}");
}
