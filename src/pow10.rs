//! Powers-of-ten tables backing `mul_pow10`, the decimal-scaling
//! primitive the fraction-aware parse path and `to_string` helpers
//! lean on.
//!
//! Grounded on the reference `conv.go`'s `pow10tab` (`1e00..1e19`,
//! the largest powers of ten that fit a `u64`): that table is
//! `POW10_U64` here, unchanged. Widths wide enough to hold powers of
//! ten past `10^19` (`Uint256` and up) cache those wider powers behind
//! a `OnceLock`, built once on first use and read-only afterward, per
//! the crate's one-time-init policy for shared static state.

use crate::digits::Digits;
use std::sync::OnceLock;

/// `10^i` for `i` in `0..20`, the range that fits in a `u64`.
pub(crate) const POW10_U64: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Multiplies `x` by `10^n`, signaling overflow the same way
/// `mul_check` does.
///
/// Walks `POW10_U64` in chunks of 19 digits at a time (the largest
/// power of ten `u64::mul_check_u64` can take in one step), so the
/// number of multiplications is `ceil(n/19)` rather than `n`.
pub fn mul_pow10<T: Digits>(x: &T, n: u32) -> (T, bool) {
    if n == 0 {
        return (*x, true);
    }
    let mut result = *x;
    let mut remaining = n;
    while remaining > 0 {
        let chunk = remaining.min(19);
        let (next, ok) = result.mul_check_u64(POW10_U64[chunk as usize]);
        if !ok {
            return (T::ZERO, false);
        }
        result = next;
        remaining -= chunk;
    }
    (result, true)
}

/// Lazily-built cache of `10^i` (as full-width values, not `u64`) for
/// widths wide enough that such a table is worth keeping around: only
/// `Uint256` and wider implement this, via the `pow10_table!` macro
/// below. `Uint96`/`Uint128`/`Uint192` max out well under `10^39` and
/// use [`mul_pow10`] directly instead.
pub trait Pow10Cache: Digits {
    /// `10^i`, from a table built once on first call and shared by
    /// every subsequent caller.
    fn pow10_cached(i: usize) -> Self;
}

macro_rules! pow10_table {
    ($Name:ty, $max_pow:expr) => {
        impl Pow10Cache for $Name {
            fn pow10_cached(i: usize) -> Self {
                static TABLE: OnceLock<Vec<$Name>> = OnceLock::new();
                let table = TABLE.get_or_init(|| {
                    tracing::debug!(width = stringify!($Name), "building pow10 table");
                    let mut v = Vec::with_capacity($max_pow + 1);
                    v.push(<$Name>::from_u64(1));
                    for _ in 0..$max_pow {
                        let prev = *v.last().unwrap();
                        v.push(prev.mul_u64(10));
                    }
                    v
                });
                table[i.min($max_pow)]
            }
        }
    };
}

pow10_table!(crate::Uint256, 77);
pow10_table!(crate::Uint512, 154);
pow10_table!(crate::Uint1024, 308);
pow10_table!(crate::Uint2048, 616);
