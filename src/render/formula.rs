// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text formulas. Every number is computed by [`crate::engine::numbers`].

use crate::engine::numbers::{doubled, successor};
use crate::engine::{bad_path_count, catalan, catalan_by_subtraction, total_path_count};

pub const TOTAL_PATHS_GENERAL: &str = "C(2n, n) = (2n)! / (n! n!)";
pub const BAD_PATHS_GENERAL: &str = "Bad Paths = C(2n, n-1)";
pub const SUBTRACTION_GENERAL: &str = "C_n = C(2n, n) - C(2n, n-1)";
pub const SUBTRACTION_IN_WORDS: &str = "C_n = (Total Paths) - (Bad Paths)";
pub const SIMPLIFIED_GENERAL: &str = "C_n = 1/(n+1) · C(2n, n)";

/// The three algebra steps from the subtraction form to the closed form.
pub const DERIVATION: [(&str, &str); 3] = [
    ("1. Expand into factorials:", "= (2n)!/(n! n!) - (2n)!/((n-1)! (n+1)!)"),
    ("2. Combine using a common denominator:", "= [ (n+1) - n ] · (2n)! / ((n+1)! n!)"),
    ("3. Simplify to the final result:", "= 1/(n+1) · (2n)!/(n! n!)"),
];

/// `C(2n, n) = (2n)! / (n! n!) = C(10, 5) = 252` for `n = 5`.
pub fn total_paths(n: u32) -> String {
    format!("{TOTAL_PATHS_GENERAL} = C({}, {n}) = {}", doubled(n), total_path_count(n))
}

/// `For n=5: C(10, 4) = 10! / (4! 6!) = 210`.
pub fn bad_paths(n: u32) -> String {
    let two_n = doubled(n);
    match n.checked_sub(1) {
        Some(k) => format!(
            "For n={n}: C({two_n}, {k}) = {two_n}! / ({k}! {}!) = {}",
            successor(n),
            bad_path_count(n)
        ),
        None => format!("For n={n}: no path can rise above the diagonal, so 0"),
    }
}

/// `C_5 = C(10, 5) - C(10, 4) = 252 - 210 = 42`.
pub fn subtraction(n: u32) -> String {
    let two_n = doubled(n);
    let k = i64::from(n) - 1;
    format!(
        "C_{n} = C({two_n}, {n}) - C({two_n}, {k}) = {} - {} = {}",
        total_path_count(n),
        bad_path_count(n),
        catalan_by_subtraction(n)
    )
}

/// `C_5 = 1/6 · C(10, 5) = 252 / 6 = 42`.
pub fn simplified(n: u32) -> String {
    format!(
        "C_{n} = 1/{} · C({}, {n}) = {} / {} = {}",
        successor(n),
        doubled(n),
        total_path_count(n),
        successor(n),
        catalan(n)
    )
}

#[cfg(test)]
mod tests {
    use super::{bad_paths, simplified, subtraction, total_paths};

    #[test]
    fn formulas_for_the_default_grid() {
        assert_eq!(total_paths(5), "C(2n, n) = (2n)! / (n! n!) = C(10, 5) = 252");
        assert_eq!(bad_paths(5), "For n=5: C(10, 4) = 10! / (4! 6!) = 210");
        assert_eq!(subtraction(5), "C_5 = C(10, 5) - C(10, 4) = 252 - 210 = 42");
        assert_eq!(simplified(5), "C_5 = 1/6 · C(10, 5) = 252 / 6 = 42");
    }

    #[test]
    fn formulas_track_the_grid_size() {
        assert_eq!(total_paths(3), "C(2n, n) = (2n)! / (n! n!) = C(6, 3) = 20");
        assert_eq!(subtraction(3), "C_3 = C(6, 3) - C(6, 2) = 20 - 15 = 5");
        assert_eq!(subtraction(0), "C_0 = C(0, 0) - C(0, -1) = 1 - 0 = 1");
        assert_eq!(bad_paths(0), "For n=0: no path can rise above the diagonal, so 0");
    }
}
