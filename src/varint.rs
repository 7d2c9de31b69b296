//! LEB128-style variable-length unsigned integer encoding, generic
//! over any width through [`Digits`].
//!
//! Shape matches the reference `AppendUvarint`/`VarintLen`/`Uvarint`
//! generics; the encoder masks each byte's 7 payload bits and sets the
//! continuation bit explicitly rather than assuming it falls out of
//! the low byte for free.

use crate::digits::Digits;

/// Worst-case encoded length for a `T`: `ceil(BITS / 7)`.
pub fn max_varint_len<T: Digits>() -> usize {
    ((T::BITS + 7) / 7) as usize
}

/// Appends the LEB128 encoding of `v` to `buf`, returning the number
/// of bytes written.
pub fn append_uvarint<T: Digits>(buf: &mut Vec<u8>, mut v: T) -> usize {
    let start = buf.len();
    while v.cmp_u64(0x80) != std::cmp::Ordering::Less {
        buf.push((v.to_low_u8() & 0x7f) | 0x80);
        v = v.rsh(7);
    }
    buf.push(v.to_low_u8());
    buf.len() - start
}

/// Number of bytes [`append_uvarint`] would write for `v`, without
/// writing them.
pub fn varint_len<T: Digits>(mut v: T) -> usize {
    let mut n = 1;
    while v.cmp_u64(0x80) != std::cmp::Ordering::Less {
        n += 1;
        v = v.rsh(7);
    }
    n
}

/// Decodes a LEB128-encoded `T` from the start of `buf`.
///
/// Returns `(value, bytes_read)` on success. On overflow — more bytes
/// than `max_varint_len::<T>()`, or a final byte whose payload exceeds
/// `(1 << (BITS % 7)) - 1` — returns `(T::ZERO, -(i+1))` where `i` is
/// the offending byte's index, matching the reference `Uvarint`.
pub fn uvarint<T: Digits>(buf: &[u8]) -> (T, isize) {
    let max_len = max_varint_len::<T>();
    let rem = T::BITS % 7;
    let max_val: u8 = if rem == 0 {
        0x7f
    } else {
        ((1u16 << rem) - 1) as u8
    };

    let mut x = T::ZERO;
    let mut s = 0u32;
    for (i, &c) in buf.iter().enumerate() {
        if i == max_len {
            return (T::ZERO, -((i + 1) as isize));
        }
        if c < 0x80 {
            if i == max_len - 1 && c > max_val {
                return (T::ZERO, -((i + 1) as isize));
            }
            return (x.or_lsh_u64(c as u64, s), (i + 1) as isize);
        }
        x = x.or_lsh_u64((c & 0x7f) as u64, s);
        s += 7;
    }
    (T::ZERO, 0)
}
