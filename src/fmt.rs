//! Decimal and arbitrary-base (2..=36) formatting, shared by every
//! width through the [`Digits`] capability trait.
//!
//! Mirrors the reference implementation's `Uint96.String`/`.append`:
//! peel off digits from the low end via repeated single-limb division,
//! then reverse into a buffer. `Display` (base 10) and [`format_radix`]
//! (general base) are the same loop with a different divisor.

use crate::digits::Digits;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Base-10 rendering, used by every width's `Display` impl.
pub(crate) fn format_decimal<T: Digits>(x: &T) -> String {
    format_radix(x, 10)
}

/// Renders `x` in `base` (2..=36), lowercase, no sign, no leading zeros
/// (except the literal value zero, which renders as `"0"`).
///
/// Panics if `base` is outside `2..=36` — this is a programming error,
/// not a user-data error; [`crate::parse::parse_uint`] is what rejects
/// bad bases reported by callers.
pub fn format_radix<T: Digits>(x: &T, base: u32) -> String {
    assert!((2..=36).contains(&base), "base out of range");
    if x.is_zero() {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    let mut n = *x;
    while !n.is_zero() {
        let (q, r) = n.quo_rem_u64(base as u64);
        buf.push(DIGITS[r as usize]);
        n = q;
    }
    buf.reverse();
    String::from_utf8(buf).expect("digit bytes are always valid ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Uint256;

    #[test]
    fn decimal_matches_known_value() {
        let x = Uint256::from_u64(123_456_789);
        assert_eq!(format_decimal(&x), "123456789");
    }

    #[test]
    fn zero_is_zero_in_every_base() {
        let z = Uint256::ZERO;
        for base in 2..=36 {
            assert_eq!(format_radix(&z, base), "0");
        }
    }

    #[test]
    fn hex_matches_known_value() {
        let x = Uint256::from_u64(0xdead_beef);
        assert_eq!(format_radix(&x, 16), "deadbeef");
    }

    #[test]
    fn base36_roundtrips_through_quo_rem() {
        let x = Uint256::from_u64(u64::MAX).mul(&Uint256::from_u64(7));
        let s = format_radix(&x, 36);
        let parsed = crate::parse::parse_uint::<Uint256>(&s, 36).unwrap();
        assert_eq!(parsed, x);
    }
}
