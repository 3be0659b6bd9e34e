#![no_main]
use libfuzzer_sys::fuzz_target;
use miniprintf_core::stdio::{Arg, CountingSink};

fuzz_target!(|data: &[u8]| {
    // First byte selects how many argument slots to build from the tail;
    // the rest up to the first NUL is the format string.
    let Some((&slots, rest)) = data.split_first() else {
        return;
    };
    let split = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    let (format, tail) = rest.split_at(split);

    let mut args = Vec::new();
    for chunk in tail.chunks(9).take(usize::from(slots % 16)) {
        let mut raw = [0u8; 8];
        raw[..chunk.len() - 1].copy_from_slice(&chunk[1..]);
        let value = u64::from_le_bytes(raw);
        args.push(match chunk[0] % 4 {
            0 => Arg::SignedInt(value as i64),
            1 => Arg::UnsignedInt(value),
            2 => Arg::Pointer(value as usize),
            _ if chunk.len() > 1 => Arg::Str(Some(&chunk[1..])),
            _ => Arg::Str(None),
        });
    }

    let mut sink = CountingSink::new(Vec::new());
    let count = miniprintf_core::ft_fprintf(&mut sink, format, &args)
        .expect("writing into a Vec cannot fail");
    assert_eq!(count, sink.written());
    assert_eq!(count, sink.into_inner().len());
});
