//! 512-bit unsigned integer, half is [`Uint256`](crate::Uint256).

use crate::macros::{impl_half_divide, impl_uint};

impl_uint!(Uint512, 8, 512);
impl_half_divide!(Uint512, crate::Uint256, 4, 8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::Digits;

    #[test]
    fn add_sub_roundtrip() {
        let a = Uint512::from_u64(42).lsh(300);
        let b = Uint512::from_u64(17).lsh(64);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn quo_rem_matches_mul_add() {
        let a = Uint512::MAX.rsh(3);
        let b = Uint512::from_u64(999_999_937);
        let (q, r) = a.quo_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
    }
}
