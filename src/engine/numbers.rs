// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Exact counting arithmetic.

use num_bigint::BigUint;
use num_traits::{One, Zero};

pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// `n choose k`; zero when `k > n`.
///
/// Uses the multiplicative form so intermediate values stay exact and never exceed the result by
/// more than a factor of `k`.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        acc *= n - i;
        acc /= i + 1;
    }
    acc
}

/// `2n`, widened so it cannot overflow for any `u32`.
pub(crate) fn doubled(n: u32) -> u64 {
    2 * u64::from(n)
}

/// `n + 1`, widened so it cannot overflow for any `u32`.
pub(crate) fn successor(n: u32) -> u64 {
    u64::from(n) + 1
}

/// Number of monotone paths from `(0,0)` to `(n,n)`: `C(2n, n)`.
pub fn total_path_count(n: u32) -> BigUint {
    binomial(doubled(n), u64::from(n))
}

/// Number of paths to `(n,n)` that rise above the diagonal: `C(2n, n-1)`.
pub fn bad_path_count(n: u32) -> BigUint {
    match n.checked_sub(1) {
        Some(k) => binomial(doubled(n), u64::from(k)),
        None => BigUint::zero(),
    }
}

/// The `n`-th Catalan number via the closed form `C(2n, n) / (n + 1)`.
pub fn catalan(n: u32) -> BigUint {
    total_path_count(n) / successor(n)
}

/// The `n`-th Catalan number as total paths minus bad paths.
pub fn catalan_by_subtraction(n: u32) -> BigUint {
    total_path_count(n) - bad_path_count(n)
}
