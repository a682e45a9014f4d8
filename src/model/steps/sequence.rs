// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::engine::{GridPoint, MoveSequence};
use crate::model::{PathBuilder, Status};

/// Free drawing with a live `R`/`U` readout.
#[derive(Debug, Clone)]
pub struct SequenceStep {
    n: u32,
    builder: PathBuilder,
    status: Status,
}

impl SequenceStep {
    pub fn new(n: u32) -> Self {
        Self { n, builder: PathBuilder::square(n), status: Self::initial_status() }
    }

    fn initial_status() -> Status {
        Status::neutral("Click an adjacent dot to move Up or Right.")
    }

    pub fn builder(&self) -> &PathBuilder {
        &self.builder
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn moves(&self) -> MoveSequence {
        self.builder.path().moves()
    }

    /// Returns whether the point was accepted.
    pub fn click(&mut self, point: GridPoint) -> bool {
        if self.builder.try_extend(point).is_err() {
            return false;
        }
        self.status = if self.builder.is_complete() {
            let n = self.n;
            Status::success(format!("Path Complete! You made {n} 'U' and {n} 'R' moves."))
        } else {
            Status::neutral("Keep going!")
        };
        true
    }

    pub fn reset(&mut self) {
        self.builder.reset();
        self.status = Self::initial_status();
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceStep;
    use crate::engine::{GridPoint, Move};
    use crate::model::Tone;

    #[test]
    fn sequence_tracks_each_click() {
        let mut step = SequenceStep::new(2);
        assert!(step.moves().is_empty());
        assert!(step.click(GridPoint::new(0, 1)));
        assert!(!step.click(GridPoint::new(2, 1)));
        assert!(step.click(GridPoint::new(1, 1)));
        assert_eq!(step.moves().to_string(), "U R");
        assert_eq!(step.status().text, "Keep going!");
    }

    #[test]
    fn completion_reports_the_move_counts() {
        let mut step = SequenceStep::new(2);
        let mut at = GridPoint::ORIGIN;
        for mv in [Move::Right, Move::Right, Move::Up, Move::Up] {
            at = at.step(mv);
            assert!(step.click(at));
        }
        assert_eq!(step.status().tone, Tone::Success);
        assert_eq!(step.status().text, "Path Complete! You made 2 'U' and 2 'R' moves.");
        assert!(!step.click(GridPoint::new(2, 3)));

        step.reset();
        assert!(step.moves().is_empty());
        assert_eq!(step.status().tone, Tone::Neutral);
    }
}
