// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::engine::{GridPoint, LatticePath, Move, PathClassification};

/// When a path under construction counts as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionTarget {
    /// The path ends at this point.
    EndPoint(GridPoint),
    /// The path holds this many points, wherever it ends.
    PointCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Only the origin.
    Empty,
    Drawing,
    CompleteValid,
    CompleteInvalid,
}

impl DrawingState {
    pub fn is_complete(self) -> bool {
        matches!(self, Self::CompleteValid | Self::CompleteInvalid)
    }
}

/// Why [`PathBuilder::try_extend`] refused a point. The builder is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendRejection {
    NotAdjacent { from: GridPoint, to: GridPoint },
    OutOfBounds { point: GridPoint },
    Complete,
}

/// Incremental, click-by-click path construction inside a `width x height` box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuilder {
    path: LatticePath,
    width: u32,
    height: u32,
    target: CompletionTarget,
}

impl PathBuilder {
    /// An `n x n` box, complete at `(n, n)`.
    pub fn square(n: u32) -> Self {
        Self::new(n, n, CompletionTarget::EndPoint(GridPoint::new(n, n)))
    }

    pub fn new(width: u32, height: u32, target: CompletionTarget) -> Self {
        Self { path: LatticePath::origin(), width, height, target }
    }

    pub fn path(&self) -> &LatticePath {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn end(&self) -> GridPoint {
        self.path.end()
    }

    pub fn is_complete(&self) -> bool {
        match self.target {
            CompletionTarget::EndPoint(point) => self.path.end() == point,
            CompletionTarget::PointCount(count) => self.path.len() >= count,
        }
    }

    pub fn classification(&self) -> PathClassification {
        self.path.classify()
    }

    pub fn state(&self) -> DrawingState {
        if self.is_complete() {
            match self.classification() {
                PathClassification::Valid => DrawingState::CompleteValid,
                PathClassification::Bad => DrawingState::CompleteInvalid,
            }
        } else if self.path.len() == 1 {
            DrawingState::Empty
        } else {
            DrawingState::Drawing
        }
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        point.x <= self.width && point.y <= self.height
    }

    /// Points the next click may land on; empty once the path is complete.
    pub fn valid_moves(&self) -> SmallVec<[GridPoint; 2]> {
        if self.is_complete() {
            return SmallVec::new();
        }
        let end = self.path.end();
        [Move::Right, Move::Up]
            .into_iter()
            .map(|mv| end.step(mv))
            .filter(|&point| self.contains(point))
            .collect()
    }

    pub fn try_extend(&mut self, point: GridPoint) -> Result<DrawingState, ExtendRejection> {
        let result = self.check_extend(point);
        match result {
            Ok(mv) => {
                self.path = self.path.extended(mv);
                Ok(self.state())
            }
            Err(rejection) => {
                tracing::trace!(%point, ?rejection, "extension rejected");
                Err(rejection)
            }
        }
    }

    pub fn step(&mut self, mv: Move) -> Result<DrawingState, ExtendRejection> {
        self.try_extend(self.path.end().step(mv))
    }

    pub fn reset(&mut self) {
        self.path = LatticePath::origin();
    }

    fn check_extend(&self, point: GridPoint) -> Result<Move, ExtendRejection> {
        if self.is_complete() {
            return Err(ExtendRejection::Complete);
        }
        if !self.contains(point) {
            return Err(ExtendRejection::OutOfBounds { point });
        }
        let from = self.path.end();
        from.move_to(point).ok_or(ExtendRejection::NotAdjacent { from, to: point })
    }
}

#[cfg(test)]
mod tests {
    use super::{CompletionTarget, DrawingState, ExtendRejection, PathBuilder};
    use crate::engine::{GridPoint, Move};

    fn p(x: u32, y: u32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn starts_empty_with_two_candidates() {
        let builder = PathBuilder::square(3);
        assert_eq!(builder.state(), DrawingState::Empty);
        assert_eq!(builder.valid_moves().as_slice(), &[p(1, 0), p(0, 1)]);
    }

    #[test]
    fn rejections_leave_the_path_untouched() {
        let mut builder = PathBuilder::square(2);
        assert_eq!(
            builder.try_extend(p(1, 1)),
            Err(ExtendRejection::NotAdjacent { from: p(0, 0), to: p(1, 1) })
        );
        builder.step(Move::Right).expect("right");
        builder.step(Move::Right).expect("right");
        assert_eq!(
            builder.try_extend(p(3, 0)),
            Err(ExtendRejection::OutOfBounds { point: p(3, 0) })
        );
        assert_eq!(builder.path().len(), 3);
        assert_eq!(builder.valid_moves().as_slice(), &[p(2, 1)]);
    }

    #[test]
    fn completion_classifies_the_path() {
        let mut dyck = PathBuilder::square(2);
        for mv in [Move::Right, Move::Up, Move::Right] {
            assert_eq!(dyck.step(mv), Ok(DrawingState::Drawing));
        }
        assert_eq!(dyck.step(Move::Up), Ok(DrawingState::CompleteValid));
        assert!(dyck.valid_moves().is_empty());
        assert_eq!(dyck.try_extend(p(2, 3)), Err(ExtendRejection::Complete));

        let mut bad = PathBuilder::square(1);
        bad.step(Move::Up).expect("up");
        assert_eq!(bad.state(), DrawingState::Drawing);
        assert_eq!(bad.step(Move::Right), Ok(DrawingState::CompleteInvalid));
    }

    #[test]
    fn point_count_target_completes_on_length() {
        let mut builder = PathBuilder::new(2, 2, CompletionTarget::PointCount(5));
        for mv in [Move::Up, Move::Up, Move::Right] {
            builder.step(mv).expect("step");
        }
        assert!(!builder.is_complete());
        assert_eq!(builder.step(Move::Right), Ok(DrawingState::CompleteInvalid));
    }

    #[test]
    fn reset_returns_to_origin() {
        let mut builder = PathBuilder::square(2);
        builder.step(Move::Up).expect("up");
        builder.reset();
        assert_eq!(builder.state(), DrawingState::Empty);
        assert_eq!(builder.end(), GridPoint::ORIGIN);
    }
}
