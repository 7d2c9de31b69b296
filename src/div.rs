//! Long division over plain little-endian `u64` limb slices.
//!
//! Every width's [`Digits::quo_rem`](crate::digits::Digits::quo_rem)
//! and [`HalfDivide::div_half`](crate::digits::HalfDivide::div_half)
//! bottom out here instead of each carrying its own copy of Knuth's
//! Algorithm D. Operating on slices rather than a generic digit type
//! sidesteps the recursive-half-width trait gymnastics the reference
//! implementation's per-width code generation used, while keeping
//! exactly one division engine for every width.

/// Three-way comparison of two same-length trimmed limb slices.
fn cmp_limbs(a: &[u64], b: &[u64]) -> std::cmp::Ordering {
    let n = a.len().max(b.len());
    for i in (0..n).rev() {
        let ai = a.get(i).copied().unwrap_or(0);
        let bi = b.get(i).copied().unwrap_or(0);
        match ai.cmp(&bi) {
            std::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }
    std::cmp::Ordering::Equal
}

/// Index one past the highest nonzero limb; `0` for an all-zero slice.
fn trimmed_len(x: &[u64]) -> usize {
    x.iter().rposition(|&l| l != 0).map(|i| i + 1).unwrap_or(0)
}

/// `x << s` across `len` output limbs, `0 <= s < 64`.
fn shl_limbs(x: &[u64], s: u32, len: usize) -> Vec<u64> {
    let mut out = vec![0u64; len];
    if s == 0 {
        out[..x.len()].copy_from_slice(x);
        return out;
    }
    let mut carry = 0u64;
    for i in 0..x.len() {
        out[i] = (x[i] << s) | carry;
        carry = x[i] >> (64 - s);
    }
    if x.len() < len {
        out[x.len()] = carry;
    }
    out
}

/// `x >> s` across the first `len` limbs of `x`, `0 <= s < 64`.
fn shr_limbs(x: &[u64], s: u32, len: usize) -> Vec<u64> {
    let mut out = vec![0u64; len];
    if s == 0 {
        out.copy_from_slice(&x[..len]);
        return out;
    }
    for i in 0..len {
        let lo = x[i] >> s;
        let hi = if i + 1 < x.len() { x[i + 1] << (64 - s) } else { 0 };
        out[i] = lo | hi;
    }
    out
}

/// `(u/v, u%v)` for arbitrary-length little-endian limb slices.
///
/// Panics if `v` is zero.
pub(crate) fn quo_rem_limbs(u: &[u64], v: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let n = trimmed_len(v);
    assert!(n != 0, "division by zero");
    let v = &v[..n];
    let m_full = trimmed_len(u);

    if m_full < n || cmp_limbs(&u[..m_full], v) == std::cmp::Ordering::Less {
        return (vec![0], u[..m_full].to_vec());
    }

    if n == 1 {
        let d = v[0];
        let mut q = vec![0u64; m_full];
        let mut r = 0u64;
        // Repeated division by the same single-limb divisor: compute
        // its reciprocal once and reuse it limb by limb (Moller &
        // Granlund) instead of a hardware divide per limb.
        let m = crate::limb::reciprocal(d);
        for i in (0..m_full).rev() {
            let (qi, ri) = crate::limb::div_ww_rec(r, u[i], d, m);
            q[i] = qi;
            r = ri;
        }
        return (q, vec![r]);
    }

    // Knuth TAOCP vol. 2, Algorithm D (n >= 2 divisor limbs).
    let s = v[n - 1].leading_zeros();
    let vn = shl_limbs(v, s, n);
    let mut un = shl_limbs(&u[..m_full], s, m_full + 1);
    let m = m_full - n;
    let mut q = vec![0u64; m + 1];

    for j in (0..=m).rev() {
        let top2 = ((un[j + n] as u128) << 64) | (un[j + n - 1] as u128);
        let vtop = vn[n - 1] as u128;
        let mut qhat = top2 / vtop;
        let mut rhat = top2 % vtop;

        if qhat > u64::MAX as u128 {
            qhat = u64::MAX as u128;
            rhat = top2 - qhat * vtop;
        }

        while rhat <= u64::MAX as u128
            && qhat * (vn[n - 2] as u128) > (rhat << 64) | (un[j + n - 2] as u128)
        {
            qhat -= 1;
            rhat += vtop;
        }

        let mut carry: u128 = 0;
        let mut borrow: i128 = 0;
        for i in 0..n {
            let p = qhat * (vn[i] as u128) + carry;
            carry = p >> 64;
            let sub = un[j + i] as i128 - (p as u64) as i128 - borrow;
            un[j + i] = sub as u64;
            borrow = if sub < 0 { 1 } else { 0 };
        }
        let sub = un[j + n] as i128 - carry as i128 - borrow;
        un[j + n] = sub as u64;
        borrow = if sub < 0 { 1 } else { 0 };

        if borrow != 0 {
            qhat -= 1;
            let mut c = 0u64;
            for i in 0..n {
                let (s, co) = crate::limb::add_ww(un[j + i], vn[i], c);
                un[j + i] = s;
                c = co;
            }
            un[j + n] = un[j + n].wrapping_add(c);
        }

        q[j] = qhat as u64;
    }

    let r = shr_limbs(&un[..n], s, n);
    (q, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_u128(x: u128) -> Vec<u64> {
        vec![x as u64, (x >> 64) as u64]
    }
    fn to_u128(limbs: &[u64]) -> u128 {
        let mut v = 0u128;
        for (i, &l) in limbs.iter().enumerate().take(2) {
            v |= (l as u128) << (i * 64);
        }
        v
    }

    #[test]
    fn matches_u128_division() {
        let cases: &[(u128, u128)] = &[
            (100, 7),
            (u128::MAX, 3),
            (1 << 100, (1 << 64) + 5),
            (12345678901234567890, 987654321),
            (u128::MAX, u128::MAX - 1),
        ];
        for &(a, b) in cases {
            let (q, r) = quo_rem_limbs(&from_u128(a), &from_u128(b));
            let mut qv = q;
            qv.resize(2, 0);
            let mut rv = r;
            rv.resize(2, 0);
            assert_eq!(to_u128(&qv), a / b, "quotient for {a}/{b}");
            assert_eq!(to_u128(&rv), a % b, "remainder for {a}/{b}");
        }
    }

    #[test]
    #[should_panic]
    fn panics_on_zero_divisor() {
        quo_rem_limbs(&[5, 0], &[0, 0]);
    }
}
