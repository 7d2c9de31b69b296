//! 64-bit limb primitives.
//!
//! This is the only module that leans on hardware carry, widening
//! multiply, and 128-by-64 hardware division. Everything above this
//! layer is built from these functions plus plain limb arrays.

/// Returns `a + b + cin`, with `cout` the carry out (0 or 1).
#[inline]
pub const fn add_ww(a: u64, b: u64, cin: u64) -> (u64, u64) {
    let (s1, c1) = a.overflowing_add(b);
    let (s2, c2) = s1.overflowing_add(cin);
    (s2, (c1 as u64) + (c2 as u64))
}

/// Returns `a - b - bin`, with `bout` the borrow out (0 or 1).
#[inline]
pub const fn sub_ww(a: u64, b: u64, bin: u64) -> (u64, u64) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(bin);
    (d2, (b1 as u64) + (b2 as u64))
}

/// Returns the full 128-bit product of `a` and `b` as `(hi, lo)`.
#[inline]
pub const fn mul_ww(a: u64, b: u64) -> (u64, u64) {
    let p = (a as u128) * (b as u128);
    ((p >> 64) as u64, p as u64)
}

/// Returns `x*y + c` as `(hi, lo)`.
#[inline]
pub const fn mul_add_www(x: u64, y: u64, c: u64) -> (u64, u64) {
    let (hi, lo) = mul_ww(x, y);
    let (lo, carry) = add_ww(lo, c, 0);
    (hi + carry, lo)
}

/// Returns `(x*y + v) + c` as `(hi, lo)`.
#[inline]
pub const fn mul_add_wwww(x: u64, y: u64, v: u64, c: u64) -> (u64, u64) {
    let (hi, lo) = mul_add_www(x, y, v);
    let (lo, carry) = add_ww(lo, c, 0);
    (hi + carry, lo)
}

/// Hardware 128-by-64 division: `(hi*2^64 + lo) / d`.
///
/// Requires `hi < d` (otherwise the quotient would not fit in 64
/// bits). `d` must be nonzero.
#[inline]
pub const fn div_ww(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(d != 0);
    debug_assert!(hi < d);
    let n = ((hi as u128) << 64) | (lo as u128);
    let d128 = d as u128;
    ((n / d128) as u64, (n % d128) as u64)
}

/// Computes the Möller/Granlund reciprocal of a normalized divisor.
///
/// `d` must be nonzero. The returned constant `m` lets [`div_ww_rec`]
/// perform a 128-by-64 division without a hardware divide instruction,
/// reusing the divisor across many dividends.
#[inline]
pub const fn reciprocal(d: u64) -> u64 {
    debug_assert!(d != 0);
    let s = d.leading_zeros();
    let u = d << s;
    let x1 = !u;
    let x0 = u64::MAX;
    let n = ((x1 as u128) << 64) | (x0 as u128);
    (n / (u as u128)) as u64
}

/// 128-by-64 division using a precomputed [`reciprocal`].
///
/// Requires `x1 < d`. This is an alternate to [`div_ww`] that trades a
/// one-time `reciprocal` call for repeated divide-free divisions by
/// the same `d`; see Möller & Granlund, "Improved division by
/// invariant integers" (IEEE TC, 2010).
#[inline]
pub const fn div_ww_rec(x1: u64, x0: u64, d: u64, m: u64) -> (u64, u64) {
    debug_assert!(d != 0);
    debug_assert!(x1 < d);

    let s = d.leading_zeros();
    let (x1, x0, d) = if s != 0 {
        (x1 << s | x0 >> (64 - s), x0 << s, d << s)
    } else {
        (x1, x0, d)
    };

    let (t1, t0) = mul_ww(m, x1);
    let (_, c) = add_ww(t0, x0, 0);
    let (t1, _) = add_ww(t1, x1, c);

    let mut qq = t1;
    let (dq1, dq0) = mul_ww(d, qq);
    let (r0, b) = sub_ww(x0, dq0, 0);
    let (r1, _) = sub_ww(x1, dq1, b);

    let mut r0 = r0;
    if r1 != 0 {
        qq += 1;
        r0 -= d;
    }
    if r0 >= d {
        qq += 1;
        r0 -= d;
    }
    (qq, r0 >> s)
}
