// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::{GridPoint, Move, MoveSequence};
use crate::model::{CompletionTarget, PathBuilder, Status};

/// A uniformly shuffled sequence of `n` rights and `n` ups.
pub fn random_target<R: Rng + ?Sized>(n: u32, rng: &mut R) -> MoveSequence {
    let mut moves = Vec::with_capacity(2 * n as usize);
    moves.extend(std::iter::repeat(Move::Right).take(n as usize));
    moves.extend(std::iter::repeat(Move::Up).take(n as usize));
    moves.shuffle(rng);
    MoveSequence::new(moves)
}

/// Draw the path spelled by a random target sequence.
#[derive(Debug, Clone)]
pub struct ChallengeStep {
    n: u32,
    target: MoveSequence,
    builder: PathBuilder,
    status: Status,
}

impl ChallengeStep {
    pub fn new<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Self {
        Self {
            n,
            target: random_target(n, rng),
            builder: Self::builder_for(n),
            status: Status::neutral("Draw the path for the sequence above."),
        }
    }

    fn builder_for(n: u32) -> PathBuilder {
        PathBuilder::new(n, n, CompletionTarget::PointCount(2 * n as usize + 1))
    }

    pub fn target(&self) -> &MoveSequence {
        &self.target
    }

    pub fn builder(&self) -> &PathBuilder {
        &self.builder
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn can_validate(&self) -> bool {
        self.builder.is_complete()
    }

    pub fn click(&mut self, point: GridPoint) -> bool {
        if self.builder.try_extend(point).is_err() {
            return false;
        }
        self.status = if self.builder.is_complete() {
            Status::neutral("Path complete! Press 'Validate' to check your answer.")
        } else {
            Status::neutral("Keep going...")
        };
        true
    }

    /// Compares the drawn path with the target. `None` until the path is complete.
    pub fn validate(&mut self) -> Option<bool> {
        if !self.can_validate() {
            return None;
        }
        let correct = self.builder.path().moves() == self.target;
        self.status = if correct {
            Status::success("Correct! You've masterfully translated the sequence.")
        } else {
            Status::failure("Not quite right. The path doesn't match the sequence. Try again!")
        };
        Some(correct)
    }

    /// Clears the drawing but keeps the target.
    pub fn reset(&mut self) {
        self.builder.reset();
        self.status = Status::neutral("Draw the path for the sequence above.");
    }

    pub fn new_challenge<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.target = random_target(self.n, rng);
        self.builder = Self::builder_for(self.n);
        self.status = Status::neutral("Draw the path for the new sequence.");
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{random_target, ChallengeStep};
    use crate::engine::{LatticePath, Move};
    use crate::model::Tone;

    fn draw(step: &mut ChallengeStep, moves: &[Move]) {
        let path = LatticePath::from_moves(&moves.to_vec().into());
        for &point in &path.points()[1..] {
            assert!(step.click(point), "rejected {point}");
        }
    }

    #[test]
    fn targets_are_balanced() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let target = random_target(5, &mut rng);
            assert_eq!(target.count(Move::Right), 5);
            assert_eq!(target.count(Move::Up), 5);
        }
    }

    #[test]
    fn validate_waits_for_a_complete_path() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut step = ChallengeStep::new(3, &mut rng);
        assert_eq!(step.validate(), None);
        assert_eq!(step.status().text, "Draw the path for the sequence above.");
    }

    #[test]
    fn matching_path_validates() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut step = ChallengeStep::new(3, &mut rng);
        let target = step.target().moves().to_vec();
        draw(&mut step, &target);
        assert!(step.can_validate());
        assert_eq!(step.validate(), Some(true));
        assert_eq!(step.status().tone, Tone::Success);
    }

    #[test]
    fn mismatched_path_fails_and_new_challenge_resets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut step = ChallengeStep::new(3, &mut rng);
        let mut wrong = step.target().moves().to_vec();
        wrong.reverse();
        if wrong == step.target().moves() {
            // A palindrome; swap in a different balanced sequence.
            wrong = if wrong[0] == Move::Right {
                vec![Move::Up, Move::Up, Move::Up, Move::Right, Move::Right, Move::Right]
            } else {
                vec![Move::Right, Move::Right, Move::Right, Move::Up, Move::Up, Move::Up]
            };
        }
        draw(&mut step, &wrong);
        assert_eq!(step.validate(), Some(false));
        assert_eq!(step.status().tone, Tone::Failure);

        step.new_challenge(&mut rng);
        assert_eq!(step.builder().path().len(), 1);
        assert_eq!(step.status().text, "Draw the path for the new sequence.");
    }
}
