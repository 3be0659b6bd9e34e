//! Host C library reference rendering.
//!
//! The supported directives take no flags, width or precision, so a format
//! string renders identically whether the host sees it whole or one
//! directive at a time. Each directive goes through the host `snprintf` with
//! its argument passed as the C type the directive reads; literal bytes are
//! copied through.
//!
//! Directives outside `cspdiuxX%` and a trailing `%` are undefined behavior
//! for the host routine and are reported instead of executed.

use std::ffi::{CString, c_char, c_int, c_uint, c_void};

use miniprintf_core::{Arg, ArgCursor, Specifier};

use crate::ConformanceError;

/// Result of rendering a format string on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRender {
    /// Bytes the host produced and the count it returned.
    Defined { output: Vec<u8>, count: usize },
    /// The format contains a directive the host leaves undefined.
    Undefined { reason: String },
}

/// Render `format` with `args` through the host `snprintf`.
pub fn host_render(format: &[u8], args: &[Arg<'_>]) -> Result<HostRender, ConformanceError> {
    let mut output = Vec::new();
    let mut cursor = ArgCursor::new(args);
    let mut pos = 0;

    while pos < format.len() {
        if format[pos] != b'%' {
            output.push(format[pos]);
            pos += 1;
            continue;
        }
        let Some(&selector) = format.get(pos + 1) else {
            return Ok(HostRender::Undefined {
                reason: "trailing '%' at end of format".to_string(),
            });
        };
        let Some(spec) = Specifier::from_selector(selector) else {
            return Ok(HostRender::Undefined {
                reason: format!("unknown conversion '%{}'", char::from(selector)),
            });
        };
        output.extend_from_slice(&render_directive(spec, &mut cursor)?);
        pos += 2;
    }

    let count = output.len();
    Ok(HostRender::Defined { output, count })
}

fn render_directive(
    spec: Specifier,
    cursor: &mut ArgCursor<'_, '_>,
) -> Result<Vec<u8>, ConformanceError> {
    let directive = [b'%', spec.selector()];
    match spec {
        Specifier::Char | Specifier::Decimal | Specifier::Integer => {
            let value: c_int = cursor.next_c_int();
            snprintf_one(&directive, value)
        }
        Specifier::Unsigned | Specifier::HexLower | Specifier::HexUpper => {
            let value: c_uint = cursor.next_c_uint();
            snprintf_one(&directive, value)
        }
        Specifier::Pointer => {
            let value = cursor.next_address() as *const c_void;
            snprintf_one(&directive, value)
        }
        Specifier::Str => match cursor.next_str() {
            Some(bytes) => {
                let owned = CString::new(bytes).map_err(|_| ConformanceError::InteriorNul)?;
                snprintf_one(&directive, owned.as_ptr())
            }
            None => snprintf_one(&directive, core::ptr::null::<c_char>()),
        },
        Specifier::Percent => snprintf_bare(&directive),
    }
}

/// A value passable through C varargs for a single directive.
trait HostVararg: Copy {
    /// # Safety
    ///
    /// `buf` must be null with `len == 0`, or writable for `len` bytes.
    /// `fmt` must be NUL-terminated and read exactly one argument of `Self`.
    unsafe fn call(self, buf: *mut c_char, len: usize, fmt: *const c_char) -> c_int;
}

macro_rules! host_vararg {
    ($($t:ty),*) => {$(
        impl HostVararg for $t {
            unsafe fn call(self, buf: *mut c_char, len: usize, fmt: *const c_char) -> c_int {
                // SAFETY: forwarded from the caller's contract.
                unsafe { libc::snprintf(buf, len, fmt, self) }
            }
        }
    )*};
}

host_vararg!(c_int, c_uint, *const c_void, *const c_char);

fn snprintf_one<T: HostVararg>(directive: &[u8], value: T) -> Result<Vec<u8>, ConformanceError> {
    let fmt = CString::new(directive).map_err(|_| ConformanceError::InteriorNul)?;
    // SAFETY: a zero-length, null destination only measures the output; the
    // directive reads exactly one `T`.
    let needed = unsafe { value.call(core::ptr::null_mut(), 0, fmt.as_ptr()) };
    let mut buf = vec![0u8; host_len(needed)? + 1];
    // SAFETY: `buf` is writable for `buf.len()` bytes.
    let written = unsafe { value.call(buf.as_mut_ptr().cast(), buf.len(), fmt.as_ptr()) };
    buf.truncate(host_len(written)?);
    Ok(buf)
}

fn snprintf_bare(directive: &[u8]) -> Result<Vec<u8>, ConformanceError> {
    let fmt = CString::new(directive).map_err(|_| ConformanceError::InteriorNul)?;
    // SAFETY: `fmt` is NUL-terminated and reads no argument.
    let needed = unsafe { libc::snprintf(core::ptr::null_mut(), 0, fmt.as_ptr()) };
    let mut buf = vec![0u8; host_len(needed)? + 1];
    // SAFETY: `buf` is writable for `buf.len()` bytes.
    let written = unsafe { libc::snprintf(buf.as_mut_ptr().cast(), buf.len(), fmt.as_ptr()) };
    buf.truncate(host_len(written)?);
    Ok(buf)
}

fn host_len(rc: c_int) -> Result<usize, ConformanceError> {
    usize::try_from(rc).map_err(|_| ConformanceError::HostFailure(rc))
}
