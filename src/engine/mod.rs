// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lattice-path engine.
//!
//! Pure functions over immutable value types: enumeration of monotone paths on a small grid,
//! Dyck classification, André's reflection, and the exact counting formulas behind them. Nothing
//! here holds state or performs I/O; the walkthrough model and the TUI own all mutable state.

mod enumerate;
pub mod numbers;
mod path;
mod reflect;

pub use enumerate::{generate_all_paths, generate_bad_paths, generate_paths_to};
pub use numbers::{
    bad_path_count, binomial, catalan, catalan_by_subtraction, factorial, total_path_count,
};
pub use path::{
    classify, to_move_sequence, GridPoint, LatticePath, Move, MoveParseError, MoveSequence,
    PathClassification, PathError,
};
pub use reflect::{reflect, Reflection};

/// Largest grid the non-interactive CLI will enumerate (`C(20, 10)` = 184 756 paths).
pub const MAX_ENUMERATION_SIZE: u32 = 10;
