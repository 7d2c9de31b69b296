//! 256-bit unsigned integer. First link of the recursive chain: its
//! half is [`Uint128`](crate::Uint128).

use crate::macros::{impl_half_divide, impl_uint};

impl_uint!(Uint256, 4, 256);
impl_half_divide!(Uint256, crate::Uint128, 2, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::Digits;

    #[test]
    fn add_sub_roundtrip() {
        let a = Uint256::from_u64(123456789);
        let b = Uint256::from_u64(987654321);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn quo_rem_small() {
        let a = Uint256::from_u64(1_000_000);
        let b = Uint256::from_u64(7);
        let (q, r) = a.quo_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
        assert!(r.cmp(&b) == std::cmp::Ordering::Less);
    }

    #[test]
    fn quo_rem_full_width_divisor() {
        let a = Uint256::MAX;
        let b = Uint256::MAX.rsh(1).add(&Uint256::from_u64(3));
        let (q, r) = a.quo_rem(&b);
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn bytes_roundtrip() {
        let x = Uint256::from_u64(0x1234_5678).lsh(200);
        let mut buf = [0u8; 32];
        x.to_bytes(&mut buf);
        assert_eq!(Uint256::from_bytes(&buf).unwrap(), x);
    }
}
