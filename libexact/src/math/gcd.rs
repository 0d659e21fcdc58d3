use num_traits::{PrimInt, Unsigned};

/// The greatest common divisor of two unsigned integers, with `gcd(0, v) == v`.
///
/// [`Fraction`](crate::Fraction) reduces through this with `u128` operands, so it must not
/// overflow for any input width. The Euclidean variant is used; the `gcd` bench compares it
/// against the binary variant.
pub fn gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}

/// Stein's algorithm: strips common factors of two, then subtracts odd values.
#[allow(unused)]
fn binary_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    if u.is_zero() || v.is_zero() {
        return u | v;
    }

    let twos = (u | v).trailing_zeros() as usize;
    u = u >> u.trailing_zeros() as usize;
    loop {
        v = v >> v.trailing_zeros() as usize;
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v = v - u;
        if v.is_zero() {
            return u << twos;
        }
    }
}

#[cfg(feature = "benchmark-internals")]
pub fn _binary_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    binary_gcd(u, v)
}

/// Repeated remainders until the divisor vanishes.
fn euclidean_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    while !v.is_zero() {
        let r = u % v;
        u = v;
        v = r;
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}
