//! Base-2..36 parsing, shared by every width through [`Digits`].
//!
//! Grounded on the reference `parseUint`: detect a base-0 prefix
//! (`0b`/`0o`/`0x`/leading `0` -> octal), then accumulate digit by
//! digit via `mul_check_u64`/`add_check_u64`, reporting `OutOfRange`
//! the moment either checked op overflows. The reference implementation
//! returns `max()` alongside the error (a two-value Go return); this
//! crate's `Result<T, Error>` has no slot for a value alongside `Err`,
//! so overflow simply fails without a partial value.

use crate::digits::Digits;
use crate::error::Error;

fn lower(c: u8) -> u8 {
    c | (b'x' - b'X')
}

fn digit_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' | b'A'..=b'Z' => Some(lower(c) - b'a' + 10),
        _ => None,
    }
}

/// Parses `s` in `base`. `base == 0` auto-detects a `0b`/`0o`/`0x`/
/// leading-`0` prefix and defaults to decimal otherwise.
pub fn parse_uint<T: Digits>(s: &str, base: i32) -> Result<T, Error> {
    parse_uint_ext::<T>(s, base, false).map(|(n, _, _)| n)
}

/// Internal fraction-aware overload: also returns the byte offset
/// where digit scanning stopped and the index of a `.` separator, for
/// decimal-fraction callers layered on top of this crate. `exp_ok`
/// restricts `base` to {2, 8, 10, 16} and allows a single `.` and a
/// trailing `e`/`E` exponent marker to end the digit run early.
///
/// Not re-exported; present because the distilled design calls for it
/// as a hook, even though nothing in this crate drives `exp_ok = true`
/// today.
pub(crate) fn parse_uint_ext<T: Digits>(
    s: &str,
    base: i32,
    exp_ok: bool,
) -> Result<(T, usize, isize), Error> {
    if s.is_empty() {
        return Err(Error::Syntax { input: s.to_string() });
    }

    let bytes = s.as_bytes();
    let (base, rest) = match base {
        2..=36 => (base, bytes),
        0 => {
            let mut base = 10i32;
            let mut rest = bytes;
            if bytes[0] == b'0' {
                if bytes.len() >= 3 && lower(bytes[1]) == b'b' {
                    base = 2;
                    rest = &bytes[2..];
                } else if bytes.len() >= 3 && lower(bytes[1]) == b'o' {
                    base = 8;
                    rest = &bytes[2..];
                } else if bytes.len() >= 3 && lower(bytes[1]) == b'x' {
                    base = 16;
                    rest = &bytes[2..];
                } else {
                    base = 8;
                    rest = &bytes[1..];
                }
            }
            (base, rest)
        }
        _ => return Err(Error::InvalidBase { base }),
    };

    if exp_ok && !matches!(base, 2 | 8 | 10 | 16) {
        return Err(Error::InvalidBase { base });
    }

    let mut n = T::ZERO;
    let mut dot_idx: isize = -1;
    let mut i = 0usize;
    while i < rest.len() {
        let c = rest[i];
        if c == b'.' && exp_ok {
            if dot_idx > 0 {
                return Err(Error::Syntax { input: s.to_string() });
            }
            dot_idx = i as isize;
            i += 1;
            continue;
        }
        let d = match digit_value(c) {
            Some(d) => d,
            None => return Err(Error::Syntax { input: s.to_string() }),
        };
        if d as i32 >= base {
            if exp_ok && (c == b'e' || c == b'E') {
                return Ok((n, i, dot_idx));
            }
            return Err(Error::Syntax { input: s.to_string() });
        }

        let (m, ok) = n.mul_check_u64(base as u64);
        if !ok {
            return Err(Error::OutOfRange { input: s.to_string() });
        }
        let (sum, carry) = m.add_check_u64(d as u64);
        if carry != 0 {
            return Err(Error::OutOfRange { input: s.to_string() });
        }
        n = sum;
        i += 1;
    }
    Ok((n, rest.len(), dot_idx))
}
