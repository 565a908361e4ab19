// Take a look at the license at the top of the repository in the LICENSE file.

//! Conversions from raw native encodings to the portable types.
//!
//! This is the only place allowed to reinterpret native memory. Everything here is built
//! for every target so it can be tested with synthetic buffers.

use crate::{Error, Result};

/// Size of the first buffer handed to the OS when reading a multi-string.
pub(crate) const MULTI_STRING_INITIAL_SIZE: usize = 1024;

// The required length can grow between two calls (a drive gets plugged in for example).
const MULTI_STRING_MAX_ATTEMPTS: usize = 10;

/// Splits a run of NUL-terminated strings (closed by an extra NUL) into owned strings.
///
/// Empty strings are skipped, so the closing NUL run produces nothing. Order and duplicates
/// are kept as the OS reported them. Invalid UTF-8 is replaced lossily.
pub(crate) fn split_multi_string(bytes: &[u8]) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = Vec::new();

    for &byte in bytes {
        if byte != 0 {
            pending.push(byte);
        } else if !pending.is_empty() {
            out.push(String::from_utf8_lossy(&pending).into_owned());
            pending.clear();
        }
    }
    if !pending.is_empty() {
        out.push(String::from_utf8_lossy(&pending).into_owned());
    }
    out
}

/// Reads a multi-string from an OS primitive following the `GetLogicalDriveStrings`
/// convention and splits it.
///
/// `fill` receives the buffer and returns the length reported by the OS:
///
/// * `0` means failure, `last_error` is then asked for the error code;
/// * a value bigger than the buffer is the required size: the call is made again with a
///   buffer of that size plus one for the final terminator;
/// * anything else is the number of bytes written, without the final terminator.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn read_multi_string<F, E>(
    call: &'static str,
    mut fill: F,
    last_error: E,
) -> Result<Vec<String>>
where
    F: FnMut(&mut [u8]) -> u32,
    E: Fn() -> i32,
{
    let mut buffer = vec![0u8; MULTI_STRING_INITIAL_SIZE];

    for _ in 0..MULTI_STRING_MAX_ATTEMPTS {
        let len = fill(&mut buffer) as usize;
        if len == 0 {
            return Err(Error::native(call, last_error()));
        }
        if len > buffer.len() {
            hoststat_debug!("{call}: buffer of {} too small, {len} required", buffer.len());
            buffer = vec![0u8; len + 1];
            continue;
        }
        return Ok(split_multi_string(&buffer[..len]));
    }
    Err(Error::native(call, last_error()))
}

/// A 64-bit unsigned integer as some native APIs hand it out: two 32-bit halves, low half
/// first (`ULARGE_INTEGER` on Windows).
///
/// The alignment matches the native union, so a pointer to it can be given to an API
/// expecting a pointer to a 64-bit integer.
#[repr(C, align(8))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) struct LargeInteger {
    pub(crate) low_part: u32,
    pub(crate) high_part: u32,
}

#[cfg_attr(not(windows), allow(dead_code))]
impl LargeInteger {
    /// Reads the eight bytes as a single native-endian `u64`.
    ///
    /// The result equals `high_part << 32 | low_part` only on little-endian targets, which is
    /// what every platform producing this layout is.
    pub(crate) fn as_u64(&self) -> u64 {
        // SAFETY: `Self` is `repr(C)`, eight bytes of plain integers with no padding, and
        // `read_unaligned` has no alignment requirement on the source.
        unsafe { std::ptr::read_unaligned((self as *const Self).cast::<u64>()) }
    }

    /// Pointer to hand to a native API writing a 64-bit integer.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut u64 {
        (self as *mut Self).cast::<u64>()
    }
}
