// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::path::{GridPoint, LatticePath, PointBuf};

/// Result of reflecting a path about the line `y = x + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pivot_index: usize,
    path: LatticePath,
}

impl Reflection {
    /// Index of the first point on `y = x + 1`; points before it are unchanged.
    pub fn pivot_index(&self) -> usize {
        self.pivot_index
    }

    /// The pivot point (a fixed point of the reflection).
    pub fn pivot(&self) -> GridPoint {
        self.path.points()[self.pivot_index]
    }

    pub fn path(&self) -> &LatticePath {
        &self.path
    }

    pub fn into_path(self) -> LatticePath {
        self.path
    }
}

/// Applies André's reflection principle.
///
/// Finds the first point with `y = x + 1`, keeps the prefix before it, and maps that point and
/// every later point via `(x, y) ↦ (y - 1, x + 1)`. A bad path to `(n, n)` becomes a path to
/// `(n - 1, n + 1)`; applying the reflection to that result gives the original path back.
///
/// Returns `None` when the path never touches `y = x + 1`.
pub fn reflect(path: &LatticePath) -> Option<Reflection> {
    let pivot_index = path.points().iter().position(|p| p.is_on_reflection_line())?;

    let mut points = PointBuf::with_capacity(path.len());
    points.extend_from_slice(&path.points()[..pivot_index]);
    // Suffix points satisfy y >= pivot.y >= 1.
    points.extend(path.points()[pivot_index..].iter().map(|q| GridPoint::new(q.y - 1, q.x + 1)));

    Some(Reflection { pivot_index, path: LatticePath::from_points_unchecked(points) })
}
