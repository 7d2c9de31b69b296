//! 128-bit unsigned integer.
//!
//! The base case of the recursive division chain: its half is a plain
//! `u64`, so [`HalfDivide`] is implemented by hand here using
//! [`crate::limb`] directly instead of through
//! [`crate::macros::impl_half_divide`].

use crate::digits::{Digits, HalfDivide};
use crate::macros::impl_uint;

impl_uint!(Uint128, 2, 128);

impl HalfDivide for Uint128 {
    type Half = u64;

    fn split(&self) -> (u64, u64) {
        (self.limbs[0], self.limbs[1])
    }

    fn from_halves(lo: u64, hi: u64) -> Self {
        Self::from_limbs([lo, hi])
    }

    fn widen(h: u64) -> Self {
        Self::from_u64(h)
    }

    fn mul_half(&self, y: &u64) -> (Self, u64) {
        let mut lo = [0u64; 2];
        let mut carry = 0u64;
        for i in 0..2 {
            let (hi_, lo_) = crate::limb::mul_add_www(self.limbs[i], *y, carry);
            lo[i] = lo_;
            carry = hi_;
        }
        (Self::from_limbs(lo), carry)
    }

    fn quo_rem_half(&self, y: &u64) -> (Self, u64) {
        self.quo_rem_u64(*y)
    }

    /// Divides the 256-bit `(hi, lo)` pair by the 128-bit `y`, the
    /// same Knuth-D routine every wider type uses generically, but
    /// spelled out at the `u64` limb level since `u64` has no
    /// `HalfDivide` of its own to recurse into.
    fn div_half(hi: Self, lo: Self, y: Self) -> (Self, Self) {
        debug_assert!(y.cmp(&hi) == std::cmp::Ordering::Greater, "DivideOverflow");
        let mut u = [0u64; 4];
        u[..2].copy_from_slice(&lo.limbs);
        u[2..].copy_from_slice(&hi.limbs);
        let (qv, rv) = crate::div::quo_rem_limbs(&u, &y.limbs);
        let mut q = [0u64; 2];
        q[..qv.len().min(2)].copy_from_slice(&qv[..qv.len().min(2)]);
        let mut r = [0u64; 2];
        r[..rv.len().min(2)].copy_from_slice(&rv[..rv.len().min(2)]);
        (Self::from_limbs(q), Self::from_limbs(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = Uint128::from_u64(123456789);
        let b = Uint128::from_u64(987654321);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn mul_check_overflows_at_max() {
        let (_, ok) = Uint128::MAX.mul_check(&Uint128::from_u64(2));
        assert!(!ok);
    }

    #[test]
    fn quo_rem_matches_u128() {
        let a = 123456789012345678901234567890u128 % (1u128 << 127);
        let b = 98765432109876u128;
        let x = Uint128::from_limbs([a as u64, (a >> 64) as u64]);
        let y = Uint128::from_limbs([b as u64, (b >> 64) as u64]);
        let (q, r) = x.quo_rem(&y);
        let qv = (q.limbs[0] as u128) | ((q.limbs[1] as u128) << 64);
        let rv = (r.limbs[0] as u128) | ((r.limbs[1] as u128) << 64);
        assert_eq!(qv, a / b);
        assert_eq!(rv, a % b);
    }

    #[test]
    fn bytes_roundtrip() {
        let x = Uint128::from_u64(0xdead_beef_cafe_babe);
        let mut buf = [0u8; 16];
        x.to_bytes(&mut buf);
        assert_eq!(Uint128::from_bytes(&buf).unwrap(), x);
    }
}
