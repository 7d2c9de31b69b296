//! `x^y mod m`, or plain wrapping exponentiation when `m` is zero.
//!
//! Square-and-multiply over the `Digits` capability trait, scanning
//! `y`'s bits from the top the way the reference implementation's
//! `Exp` does, reusing whichever `Mul`/`QuoRem` the width already has.

use crate::digits::Digits;

/// `self^y`, reduced mod `m` if `m` is nonzero; wrapping (mod 2^BITS)
/// if `m` is zero.
pub fn exp<T: Digits>(x: &T, y: &T, m: &T) -> T {
    if y.is_zero() {
        return reduce(T::from_u64(1), m);
    }
    if x.is_zero() {
        return T::ZERO;
    }

    let bits = y.bit_len();
    let mut result = T::from_u64(1);
    let base = reduce(*x, m);

    for i in (0..bits).rev() {
        result = reduce(result.mul(&result), m);
        if bit_at(y, i) {
            result = reduce(result.mul(&base), m);
        }
    }
    result
}

fn bit_at<T: Digits>(y: &T, i: u32) -> bool {
    !y.rsh(i).and(&T::from_u64(1)).is_zero()
}

fn reduce<T: Digits>(x: T, m: &T) -> T {
    if m.is_zero() {
        x
    } else {
        x.quo_rem(m).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Uint256;

    #[test]
    fn exp_zero_is_one() {
        let x = Uint256::from_u64(7);
        let y = Uint256::ZERO;
        let m = Uint256::ZERO;
        assert_eq!(exp(&x, &y, &m), Uint256::from_u64(1));
    }

    #[test]
    fn exp_matches_repeated_multiplication() {
        let x = Uint256::from_u64(3);
        let y = Uint256::from_u64(10);
        let m = Uint256::ZERO;
        let mut want = Uint256::from_u64(1);
        for _ in 0..10 {
            want = want.mul(&x);
        }
        assert_eq!(exp(&x, &y, &m), want);
    }

    #[test]
    fn exp_reduces_mod_m() {
        let x = Uint256::from_u64(4);
        let y = Uint256::from_u64(13);
        let m = Uint256::from_u64(497);
        // 4^13 mod 497 == 445, a textbook modpow vector.
        assert_eq!(exp(&x, &y, &m), Uint256::from_u64(445));
    }
}
