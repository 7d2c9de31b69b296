//! 1024-bit unsigned integer, half is [`Uint512`](crate::Uint512).

use crate::macros::{impl_half_divide, impl_uint};

impl_uint!(Uint1024, 16, 1024);
impl_half_divide!(Uint1024, crate::Uint512, 8, 16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::Digits;

    #[test]
    fn add_sub_roundtrip() {
        let a = Uint1024::from_u64(7).lsh(900);
        let b = Uint1024::from_u64(3).lsh(400);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn quo_rem_matches_mul_add() {
        let a = Uint1024::MAX.rsh(5);
        let b = Uint1024::from_u64(12345).lsh(512).add(&Uint1024::from_u64(7));
        let (q, r) = a.quo_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
    }
}
