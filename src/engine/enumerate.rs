// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::path::{GridPoint, LatticePath, PointBuf};

/// Every monotone path from `(0,0)` to `(n,n)`.
///
/// Paths are emitted in depth-first order preferring the Right move at each branch point, so
/// the first path is `R…RU…U` and the last is `U…UR…R`. Exactly `C(2n, n)` paths are produced;
/// callers are expected to keep `n` small.
pub fn generate_all_paths(n: u32) -> Vec<LatticePath> {
    generate_paths_to(GridPoint::new(n, n))
}

/// Complete paths to `(n,n)` with at least one point strictly above the diagonal.
///
/// Order follows [`generate_all_paths`]. The count is `C(2n, n-1)` (zero for `n = 0`).
pub fn generate_bad_paths(n: u32) -> Vec<LatticePath> {
    generate_all_paths(n)
        .into_iter()
        .filter(|path| path.points().iter().any(|p| p.is_above_diagonal()))
        .collect()
}

/// Every monotone path from `(0,0)` to `target`, in Right-before-Up depth-first order.
pub fn generate_paths_to(target: GridPoint) -> Vec<LatticePath> {
    let mut out = Vec::new();
    let mut current = PointBuf::new();
    current.push(GridPoint::ORIGIN);
    walk(target, &mut current, &mut out);
    out
}

fn walk(target: GridPoint, current: &mut PointBuf, out: &mut Vec<LatticePath>) {
    let last = current[current.len() - 1];
    if last == target {
        out.push(LatticePath::from_points_unchecked(current.clone()));
        return;
    }

    if last.x < target.x {
        current.push(GridPoint::new(last.x + 1, last.y));
        walk(target, current, out);
        current.pop();
    }
    if last.y < target.y {
        current.push(GridPoint::new(last.x, last.y + 1));
        walk(target, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{generate_all_paths, generate_bad_paths, generate_paths_to};
    use crate::engine::path::{GridPoint, LatticePath};

    #[test]
    fn zero_grid_has_the_single_origin_path() {
        assert_eq!(generate_all_paths(0), vec![LatticePath::origin()]);
        assert!(generate_bad_paths(0).is_empty());
    }

    #[test]
    fn order_prefers_right_first() {
        let moves = generate_all_paths(2)
            .iter()
            .map(|path| path.moves().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            moves,
            vec!["R R U U", "R U R U", "R U U R", "U R R U", "U R U R", "U U R R"]
        );
    }

    #[test]
    fn bad_paths_of_two_are_the_ones_rising_above() {
        let moves = generate_bad_paths(2)
            .iter()
            .map(|path| path.moves().to_string())
            .collect::<Vec<_>>();
        assert_eq!(moves, vec!["R U U R", "U R R U", "U R U R", "U U R R"]);
    }

    #[test]
    fn paths_are_distinct_and_end_at_the_corner() {
        let paths = generate_all_paths(4);
        let unique = paths.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), paths.len());
        assert!(paths.iter().all(|path| path.end() == GridPoint::new(4, 4)));
    }

    #[test]
    fn rectangular_targets_are_supported() {
        assert_eq!(generate_paths_to(GridPoint::new(3, 0)).len(), 1);
        assert_eq!(generate_paths_to(GridPoint::new(1, 3)).len(), 4);
        assert_eq!(generate_paths_to(GridPoint::new(4, 6)).len(), 210);
    }
}
