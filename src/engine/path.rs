// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity for path storage; covers every path up to a 7x7 grid (15 points).
const INLINE_POINTS: usize = 16;

pub(crate) type PointBuf = SmallVec<[GridPoint; INLINE_POINTS]>;

/// An integer lattice point. `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The point reached from `self` by `mv`.
    pub const fn step(self, mv: Move) -> Self {
        match mv {
            Move::Right => Self { x: self.x + 1, y: self.y },
            Move::Up => Self { x: self.x, y: self.y + 1 },
        }
    }

    /// The move leading from `self` to `next`, if they are unit-adjacent in the monotone sense.
    pub fn move_to(self, next: Self) -> Option<Move> {
        if next.y == self.y && next.x == self.x.checked_add(1)? {
            Some(Move::Right)
        } else if next.x == self.x && next.y == self.y.checked_add(1)? {
            Some(Move::Up)
        } else {
            None
        }
    }

    /// Strictly above the main diagonal (`y > x`).
    pub const fn is_above_diagonal(self) -> bool {
        self.y > self.x
    }

    /// On the reflection line `y = x + 1`.
    pub const fn is_on_reflection_line(self) -> bool {
        self.y == self.x + 1
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A unit step of a monotone lattice path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "U")]
    Up,
}

impl Move {
    pub const fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Up => 'U',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'R' | 'r' => Some(Self::Right),
            'U' | 'u' => Some(Self::Up),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;
        f.write_char(self.symbol())
    }
}

/// Ordered `R`/`U` moves, one per step of a [`LatticePath`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn count(&self, mv: Move) -> usize {
        self.moves.iter().filter(|&&m| m == mv).count()
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self::new(moves)
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, mv) in self.moves.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move symbol {symbol:?} at position {position} (expected R or U)")]
pub struct MoveParseError {
    pub symbol: char,
    pub position: usize,
}

/// Parses `R`/`U` symbols; whitespace and commas are ignored (`"R U,U R"`, `"RUUR"`).
impl FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = Vec::with_capacity(s.len());
        for (position, symbol) in s.chars().enumerate() {
            if symbol.is_whitespace() || symbol == ',' {
                continue;
            }
            let mv = Move::from_symbol(symbol).ok_or(MoveParseError { symbol, position })?;
            moves.push(mv);
        }
        Ok(Self { moves })
    }
}

/// Whether a path stays on or below the main diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathClassification {
    /// Every point satisfies `y <= x` (a Dyck path once complete).
    Valid,
    /// Some point satisfies `y > x`.
    Bad,
}

impl PathClassification {
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("path must not be empty")]
    Empty,
    #[error("path must start at (0,0), got {start}")]
    BadStart { start: GridPoint },
    #[error("points {from} and {to} at index {index} are not a unit Right/Up step")]
    NotAdjacent {
        index: usize,
        from: GridPoint,
        to: GridPoint,
    },
}

/// A monotone lattice path starting at `(0,0)`.
///
/// Consecutive points always differ by exactly `(+1,0)` or `(0,+1)`. Paths are immutable; every
/// extension produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LatticePath {
    points: PointBuf,
}

impl LatticePath {
    /// The single-point path `[(0,0)]`.
    pub fn origin() -> Self {
        let mut points = PointBuf::new();
        points.push(GridPoint::ORIGIN);
        Self { points }
    }

    /// Replays `moves` from `(0,0)`.
    pub fn from_moves(moves: &MoveSequence) -> Self {
        let mut points = PointBuf::with_capacity(moves.len() + 1);
        let mut cursor = GridPoint::ORIGIN;
        points.push(cursor);
        for &mv in moves.moves() {
            cursor = cursor.step(mv);
            points.push(cursor);
        }
        Self { points }
    }

    /// Validates externally supplied points.
    pub fn try_from_points(points: impl IntoIterator<Item = GridPoint>) -> Result<Self, PathError> {
        let points = points.into_iter().collect::<PointBuf>();
        let Some(&start) = points.first() else {
            return Err(PathError::Empty);
        };
        if start != GridPoint::ORIGIN {
            return Err(PathError::BadStart { start });
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].move_to(pair[1]).is_none() {
                return Err(PathError::NotAdjacent {
                    index: index + 1,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(Self { points })
    }

    /// Builds a path from points the caller already knows to be monotone and unit-stepped.
    pub(crate) fn from_points_unchecked(points: PointBuf) -> Self {
        debug_assert!(Self::try_from_points(points.iter().copied()).is_ok());
        Self { points }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true; a path always contains its start point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> GridPoint {
        self.points[0]
    }

    pub fn end(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.points.contains(&point)
    }

    /// A new path with one more step.
    pub fn extended(&self, mv: Move) -> Self {
        let mut points = self.points.clone();
        points.push(self.end().step(mv));
        Self { points }
    }

    pub fn moves(&self) -> MoveSequence {
        to_move_sequence(self)
    }

    pub fn classify(&self) -> PathClassification {
        classify(self)
    }
}

impl fmt::Display for LatticePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, point) in self.points.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{point}")?;
        }
        f.write_str("]")
    }
}

impl<'de> Deserialize<'de> for LatticePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<GridPoint>::deserialize(deserializer)?;
        Self::try_from_points(points).map_err(serde::de::Error::custom)
    }
}

/// Maps each consecutive step to `R` (x increased) or `U` (y increased).
pub fn to_move_sequence(path: &LatticePath) -> MoveSequence {
    let moves = path
        .points
        .windows(2)
        .map(|pair| if pair[1].x > pair[0].x { Move::Right } else { Move::Up })
        .collect();
    MoveSequence { moves }
}

/// `Valid` iff every point satisfies `y <= x`.
pub fn classify(path: &LatticePath) -> PathClassification {
    if path.points.iter().any(|p| p.is_above_diagonal()) {
        PathClassification::Bad
    } else {
        PathClassification::Valid
    }
}
