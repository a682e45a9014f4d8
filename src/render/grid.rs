// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::{canvas_to_string_trimmed, Canvas, CanvasError, LineSpan};
use crate::engine::{GridPoint, LatticePath};

/// Character columns between horizontally adjacent grid points.
pub const CELL_WIDTH: usize = 4;
/// Character rows between vertically adjacent grid points.
pub const CELL_HEIGHT: usize = 2;

const DOT: char = '·';
const DIAGONAL: char = '╱';
const CANDIDATE: char = '○';
const MARKER: char = '●';

/// Style layers of a rendered grid. Later layers take precedence when spans overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridLayer {
    Diagonal,
    ReflectionLine,
    /// Dots above the drawable area.
    ExtendedDot,
    FadedPath,
    Path,
    Reflected,
    ValidMove,
    Marker,
}

/// What to draw on a `width x height` lattice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridScene<'a> {
    pub width: u32,
    pub height: u32,
    /// Rows above this are drawn as [`GridLayer::ExtendedDot`].
    pub drawable_height: Option<u32>,
    pub diagonal: bool,
    pub reflection_line: bool,
    pub path: Option<&'a LatticePath>,
    pub faded_path: Option<&'a LatticePath>,
    pub reflected: Option<&'a LatticePath>,
    pub valid_moves: &'a [GridPoint],
    pub marker: Option<GridPoint>,
}

impl<'a> GridScene<'a> {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRender {
    pub text: String,
    pub layers: BTreeMap<GridLayer, Vec<LineSpan>>,
    canvas: Canvas,
    width: u32,
    height: u32,
}

impl GridRender {
    pub fn columns(&self) -> usize {
        self.width as usize * CELL_WIDTH + 1
    }

    pub fn rows(&self) -> usize {
        self.height as usize * CELL_HEIGHT + 1
    }

    /// The text without trailing blanks, for printing outside the TUI.
    pub fn trimmed_text(&self) -> String {
        canvas_to_string_trimmed(&self.canvas)
    }

    pub fn spans(&self, layer: GridLayer) -> &[LineSpan] {
        self.layers.get(&layer).map_or(&[], Vec::as_slice)
    }

    /// Canvas cell `(col, row)` of a grid point, if it lies on the grid.
    pub fn cell_of(&self, point: GridPoint) -> Option<(usize, usize)> {
        (point.x <= self.width && point.y <= self.height).then(|| cell_of(point, self.height))
    }

    /// Grid point at canvas cell `(col, row)`, tolerating one column of slack on either side.
    pub fn point_at(&self, col: usize, row: usize) -> Option<GridPoint> {
        if row % CELL_HEIGHT != 0 {
            return None;
        }
        let x = (col + 1) / CELL_WIDTH;
        if col.abs_diff(x * CELL_WIDTH) > 1 {
            return None;
        }
        let level = u32::try_from(row / CELL_HEIGHT).ok()?;
        let x = u32::try_from(x).ok()?;
        let y = self.height.checked_sub(level)?;
        (x <= self.width).then_some(GridPoint::new(x, y))
    }
}

fn cell_of(point: GridPoint, height: u32) -> (usize, usize) {
    (point.x as usize * CELL_WIDTH, (height - point.y) as usize * CELL_HEIGHT)
}

struct Painter {
    canvas: Canvas,
    height: u32,
    layers: BTreeMap<GridLayer, Vec<LineSpan>>,
}

impl Painter {
    fn mark(&mut self, layer: GridLayer, span: LineSpan) {
        self.layers.entry(layer).or_default().push(span);
    }

    fn glyph(
        &mut self,
        layer: GridLayer,
        col: usize,
        row: usize,
        ch: char,
    ) -> Result<(), CanvasError> {
        self.canvas.set(col, row, ch)?;
        self.mark(layer, (row, col, col));
        Ok(())
    }

    fn point(&mut self, layer: GridLayer, point: GridPoint, ch: char) -> Result<(), CanvasError> {
        let (col, row) = self.cell(point)?;
        self.glyph(layer, col, row, ch)
    }

    fn cell(&self, point: GridPoint) -> Result<(usize, usize), CanvasError> {
        if point.y > self.height {
            return Err(CanvasError::OutOfBounds {
                x: point.x as usize * CELL_WIDTH,
                y: 0,
                width: self.canvas.width(),
                height: self.canvas.height(),
            });
        }
        Ok(cell_of(point, self.height))
    }

    fn path(&mut self, layer: GridLayer, path: &LatticePath) -> Result<(), CanvasError> {
        for pair in path.points().windows(2) {
            let (col0, row0) = self.cell(pair[0])?;
            let (col1, row1) = self.cell(pair[1])?;
            if row0 == row1 {
                self.canvas.draw_hline(col0, col1, row0)?;
                self.mark(layer, (row0, col0, col1));
            } else {
                self.canvas.draw_vline(col0, row1, row0)?;
                for row in row1..=row0 {
                    self.mark(layer, (row, col0, col0));
                }
            }
        }
        Ok(())
    }
}

/// Renders a lattice with dots at the grid points, `╱` diagonals and box-drawn paths.
///
/// Errors when a path or marker in the scene leaves the `width x height` grid.
pub fn render_grid(scene: &GridScene<'_>) -> Result<GridRender, CanvasError> {
    let (width, height) = (scene.width, scene.height);
    let canvas = Canvas::new(width as usize * CELL_WIDTH + 1, height as usize * CELL_HEIGHT + 1)?;
    let mut painter = Painter { canvas, height, layers: BTreeMap::new() };

    if scene.diagonal {
        for k in 0..width.min(height) {
            let (col, row) = cell_of(GridPoint::new(k, k), height);
            painter.glyph(GridLayer::Diagonal, col + CELL_WIDTH / 2, row - 1, DIAGONAL)?;
        }
    }
    if scene.reflection_line {
        for k in (0..width).take_while(|&k| k + 2 <= height) {
            let (col, row) = cell_of(GridPoint::new(k, k + 1), height);
            painter.glyph(GridLayer::ReflectionLine, col + CELL_WIDTH / 2, row - 1, DIAGONAL)?;
        }
    }

    for y in 0..=height {
        let extended = scene.drawable_height.is_some_and(|limit| y > limit);
        for x in 0..=width {
            let point = GridPoint::new(x, y);
            if extended {
                painter.point(GridLayer::ExtendedDot, point, DOT)?;
            } else {
                let (col, row) = cell_of(point, height);
                painter.canvas.set(col, row, DOT)?;
            }
        }
    }

    for (layer, path) in [
        (GridLayer::FadedPath, scene.faded_path),
        (GridLayer::Path, scene.path),
        (GridLayer::Reflected, scene.reflected),
    ] {
        if let Some(path) = path {
            painter.path(layer, path)?;
        }
    }

    for &point in scene.valid_moves {
        painter.point(GridLayer::ValidMove, point, CANDIDATE)?;
    }
    if let Some(point) = scene.marker {
        painter.point(GridLayer::Marker, point, MARKER)?;
    }

    let Painter { canvas, layers, .. } = painter;
    Ok(GridRender { text: canvas.to_string(), layers, canvas, width, height })
}

#[cfg(test)]
mod tests {
    use super::{render_grid, GridLayer, GridScene};
    use crate::engine::{GridPoint, LatticePath, MoveSequence};
    use crate::render::CanvasError;

    fn path(moves: &str) -> LatticePath {
        LatticePath::from_moves(&moves.parse::<MoveSequence>().expect("moves"))
    }

    #[test]
    fn single_cell_with_corner_path() {
        let path = path("R U");
        let scene = GridScene {
            diagonal: true,
            path: Some(&path),
            marker: Some(path.end()),
            ..GridScene::new(1, 1)
        };
        let render = render_grid(&scene).expect("render");
        assert_eq!(render.text, "·   ●\n  ╱ │\n────┘");
        assert_eq!(render.spans(GridLayer::Path), &[(2, 0, 4), (0, 4, 4), (1, 4, 4), (2, 4, 4)]);
        assert_eq!(render.spans(GridLayer::Diagonal), &[(1, 2, 2)]);
        assert_eq!(render.spans(GridLayer::Marker), &[(0, 4, 4)]);
        assert!(render.spans(GridLayer::Reflected).is_empty());
    }

    #[test]
    fn candidates_and_reflection_line_on_an_extended_grid() {
        let origin = LatticePath::origin();
        let moves = [GridPoint::new(1, 0), GridPoint::new(0, 1)];
        let scene = GridScene {
            drawable_height: Some(1),
            reflection_line: true,
            path: Some(&origin),
            valid_moves: &moves,
            ..GridScene::new(1, 2)
        };
        let render = render_grid(&scene).expect("render");
        assert_eq!(render.text, "·   ·\n  ╱  \n○   ·\n     \n·   ○");
        assert_eq!(render.trimmed_text(), "·   ·\n  ╱\n○   ·\n\n·   ○");
        assert_eq!(render.spans(GridLayer::ReflectionLine), &[(1, 2, 2)]);
        assert_eq!(render.spans(GridLayer::ExtendedDot), &[(0, 0, 0), (0, 4, 4)]);
        assert_eq!(render.spans(GridLayer::ValidMove), &[(4, 4, 4), (2, 0, 0)]);
    }

    #[test]
    fn paths_leaving_the_grid_are_errors() {
        let path = path("R R");
        let scene = GridScene { path: Some(&path), ..GridScene::new(1, 1) };
        assert!(matches!(render_grid(&scene), Err(CanvasError::OutOfBounds { .. })));
    }

    #[test]
    fn point_at_inverts_cell_of() {
        let render = render_grid(&GridScene::new(2, 3)).expect("render");
        assert_eq!((render.columns(), render.rows()), (9, 7));
        for x in 0..=2 {
            for y in 0..=3 {
                let point = GridPoint::new(x, y);
                let (col, row) = render.cell_of(point).expect("on grid");
                assert_eq!(render.point_at(col, row), Some(point));
                assert_eq!(render.point_at(col + 1, row), Some(point));
            }
        }
        assert_eq!(render.point_at(2, 0), None);
        assert_eq!(render.point_at(0, 1), None);
        assert_eq!(render.point_at(0, 8), None);
        assert_eq!(render.point_at(12, 0), None);
        assert_eq!(render.cell_of(GridPoint::new(3, 0)), None);
    }
}
