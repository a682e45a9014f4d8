// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for lattice grids and formulas.
//!
//! The grid renderer produces plain Unicode text plus per-layer span indices, so the TUI can style
//! paths cell-accurately without re-deriving geometry.

use std::fmt;

pub mod formula;
pub mod grid;
mod text;

pub use grid::{render_grid, GridLayer, GridRender, GridScene};
pub(crate) use text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};

/// A contiguous span of styled cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive, relative to the returned
/// rendered text lines.
pub type LineSpan = (usize, usize, usize);

/// Line-drawing arms of a cell: left, right, up, down (one bit each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Arms(u8);

impl Arms {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const UP: u8 = 4;
    const DOWN: u8 = 8;
    const HORIZONTAL: Self = Self(Self::LEFT | Self::RIGHT);
    const VERTICAL: Self = Self(Self::UP | Self::DOWN);

    fn has(self, arm: u8) -> bool {
        self.0 & arm != 0
    }

    fn glyph(self) -> char {
        // Indexed by the arm bits; lone arms render as straight segments.
        const GLYPHS: [char; 16] = [
            ' ', '─', '─', '─', '│', '┘', '└', '┴', '│', '┐', '┌', '┬', '│', '┤', '├', '┼',
        ];
        GLYPHS[usize::from(self.0 & 0x0f)]
    }
}

impl std::ops::BitOr for Arms {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Glyph(char),
    /// Path segments passing through; the drawn glyph depends on the neighbours.
    Lines(Arms),
}

/// A fixed-size, bounds-checked character grid for lattice drawings.
///
/// Plain glyphs overwrite whatever is in a cell. `─` and `│` segments accumulate, so two
/// segments meeting at a lattice point render as the corner or junction that joins them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// A canvas of blanks.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![Cell::Glyph(fill); len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The character drawn at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        self.index_of(x, y).map(|idx| self.glyph_at(idx))
    }

    /// Places `ch` at `(x, y)`. `─` and `│` merge with segments already there.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        let added = match ch {
            '─' => Arms::HORIZONTAL,
            '│' => Arms::VERTICAL,
            _ => {
                self.cells[idx] = Cell::Glyph(ch);
                return Ok(());
            }
        };
        self.cells[idx] = match self.cells[idx] {
            Cell::Glyph(_) => Cell::Lines(added),
            Cell::Lines(arms) => Cell::Lines(arms | added),
        };
        Ok(())
    }

    /// Draws `─` across `x0..=x1` on row `y`. Nothing is drawn unless the whole run fits.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.index_of(lo, y)?;
        self.index_of(hi, y)?;
        (lo..=hi).try_for_each(|x| self.set(x, y, '─'))
    }

    /// Draws `│` down `y0..=y1` in column `x`. Nothing is drawn unless the whole run fits.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.index_of(x, lo)?;
        self.index_of(x, hi)?;
        (lo..=hi).try_for_each(|y| self.set(x, y, '│'))
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    fn arms_at(&self, idx: usize) -> Arms {
        match self.cells[idx] {
            Cell::Lines(arms) => arms,
            Cell::Glyph(_) => Arms::default(),
        }
    }

    fn glyph_at(&self, idx: usize) -> char {
        let arms = match self.cells[idx] {
            Cell::Glyph(ch) => return ch,
            Cell::Lines(arms) => arms,
        };
        let (x, y) = (idx % self.width, idx / self.width);

        // Keep only the arms that reach a matching arm next door.
        let mut joined = 0;
        if arms.has(Arms::LEFT) && x > 0 && self.arms_at(idx - 1).has(Arms::RIGHT) {
            joined |= Arms::LEFT;
        }
        if arms.has(Arms::RIGHT) && x + 1 < self.width && self.arms_at(idx + 1).has(Arms::LEFT) {
            joined |= Arms::RIGHT;
        }
        if arms.has(Arms::UP) && y > 0 && self.arms_at(idx - self.width).has(Arms::DOWN) {
            joined |= Arms::UP;
        }
        if arms.has(Arms::DOWN)
            && y + 1 < self.height
            && self.arms_at(idx + self.width).has(Arms::UP)
        {
            joined |= Arms::DOWN;
        }

        if joined == 0 {
            arms.glyph()
        } else {
            Arms(joined).glyph()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for (idx, row) in (0..self.cells.len()).step_by(self.width.max(1)).enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            for cell in row..row + self.width {
                f.write_char(self.glyph_at(cell))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}
