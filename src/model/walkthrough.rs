// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::steps::{
    ChallengeStep, ConclusionAction, ConclusionStep, CountingStep, DyckStep, IntroStep,
    ReflectionStep, ReflectionTimings, SequenceStep,
};
use crate::config::ExplorerConfig;
use crate::engine::{GridPoint, Move};
use crate::model::PathBuilder;

pub const STEP_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
    Intro,
    Sequence,
    Challenge,
    Counting,
    Dyck,
    Reflection,
    Conclusion,
}

impl StepKind {
    pub const ALL: [Self; STEP_COUNT] = [
        Self::Intro,
        Self::Sequence,
        Self::Challenge,
        Self::Counting,
        Self::Dyck,
        Self::Reflection,
        Self::Conclusion,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Intro => "What are Catalan Numbers?",
            Self::Sequence => "From Paths to Sequences",
            Self::Challenge => "Challenge: Recreate the Path",
            Self::Counting => "Counting the Paths",
            Self::Dyck => "The Diagonal Constraint",
            Self::Reflection => "André's Reflection Principle",
            Self::Conclusion => "Conclusion",
        }
    }
}

/// State of the step on screen. Replaced wholesale on every navigation.
#[derive(Debug, Clone)]
pub enum ActiveStep {
    Intro(IntroStep),
    Sequence(SequenceStep),
    Challenge(ChallengeStep),
    Counting(CountingStep),
    Dyck(DyckStep),
    Reflection(ReflectionStep),
    Conclusion(ConclusionStep),
}

impl ActiveStep {
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Intro(_) => StepKind::Intro,
            Self::Sequence(_) => StepKind::Sequence,
            Self::Challenge(_) => StepKind::Challenge,
            Self::Counting(_) => StepKind::Counting,
            Self::Dyck(_) => StepKind::Dyck,
            Self::Reflection(_) => StepKind::Reflection,
            Self::Conclusion(_) => StepKind::Conclusion,
        }
    }
}

/// The seven-step walkthrough and its cursor.
#[derive(Debug)]
pub struct Walkthrough {
    config: ExplorerConfig,
    rng: StdRng,
    active: ActiveStep,
}

impl Walkthrough {
    pub fn new(config: ExplorerConfig, now: Instant) -> Self {
        Self::with_rng(config, StdRng::from_os_rng(), now)
    }

    pub fn with_rng(config: ExplorerConfig, mut rng: StdRng, now: Instant) -> Self {
        let active = build_step(StepKind::Intro, &config, &mut rng, now);
        Self { config, rng, active }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.kind().index()
    }

    pub fn kind(&self) -> StepKind {
        self.active.kind()
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == STEP_COUNT
    }

    pub fn active(&self) -> &ActiveStep {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveStep {
        &mut self.active
    }

    /// Returns whether the step changed; the last step stays put.
    pub fn next(&mut self, now: Instant) -> bool {
        match StepKind::from_index(self.index() + 1) {
            Some(kind) => {
                self.enter(kind, now);
                true
            }
            None => false,
        }
    }

    /// Returns whether the step changed; the first step stays put.
    pub fn prev(&mut self, now: Instant) -> bool {
        match self.index().checked_sub(1).and_then(StepKind::from_index) {
            Some(kind) => {
                self.enter(kind, now);
                true
            }
            None => false,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.enter(StepKind::Intro, now);
    }

    fn enter(&mut self, kind: StepKind, now: Instant) {
        tracing::debug!(from = ?self.kind(), to = ?kind, "step transition");
        self.active = build_step(kind, &self.config, &mut self.rng, now);
    }

    /// Routes a grid click to the drawing steps. Returns whether anything changed.
    pub fn click(&mut self, point: GridPoint, now: Instant) -> bool {
        match &mut self.active {
            ActiveStep::Sequence(step) => step.click(point),
            ActiveStep::Challenge(step) => step.click(point),
            ActiveStep::Dyck(step) => step.click(point),
            ActiveStep::Reflection(step) => step.click(point, now),
            ActiveStep::Intro(_) | ActiveStep::Counting(_) | ActiveStep::Conclusion(_) => false,
        }
    }

    /// The path being drawn on the active step, if it is a drawing step.
    pub fn builder(&self) -> Option<&PathBuilder> {
        match &self.active {
            ActiveStep::Sequence(step) => Some(step.builder()),
            ActiveStep::Challenge(step) => Some(step.builder()),
            ActiveStep::Dyck(step) => Some(step.builder()),
            ActiveStep::Reflection(step) => Some(step.builder()),
            ActiveStep::Intro(_) | ActiveStep::Counting(_) | ActiveStep::Conclusion(_) => None,
        }
    }

    /// Keyboard drawing: a click on the neighbour of the current end point.
    pub fn draw_move(&mut self, mv: Move, now: Instant) -> bool {
        let Some(end) = self.builder().map(PathBuilder::end) else {
            return false;
        };
        self.click(end.step(mv), now)
    }

    pub fn reset_path(&mut self) {
        match &mut self.active {
            ActiveStep::Sequence(step) => step.reset(),
            ActiveStep::Challenge(step) => step.reset(),
            ActiveStep::Dyck(step) => step.reset(),
            ActiveStep::Reflection(step) => step.reset(),
            ActiveStep::Intro(_) | ActiveStep::Counting(_) | ActiveStep::Conclusion(_) => {}
        }
    }

    pub fn replay(&mut self, now: Instant) {
        match &mut self.active {
            ActiveStep::Counting(step) => step.replay(now),
            ActiveStep::Reflection(step) => step.replay(now),
            _ => {}
        }
    }

    pub fn new_challenge(&mut self) {
        if let ActiveStep::Challenge(step) = &mut self.active {
            step.new_challenge(&mut self.rng);
        }
    }

    /// Activates the conclusion page action, restarting from the intro after the last page.
    pub fn conclude(&mut self, now: Instant) {
        let ActiveStep::Conclusion(step) = &mut self.active else {
            return;
        };
        if step.activate() == ConclusionAction::RestartRequested {
            self.restart(now);
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match &mut self.active {
            ActiveStep::Counting(step) => step.tick(now),
            ActiveStep::Reflection(step) => step.tick(now),
            // The intro reveal is a pure function of time.
            ActiveStep::Intro(_)
            | ActiveStep::Sequence(_)
            | ActiveStep::Challenge(_)
            | ActiveStep::Dyck(_)
            | ActiveStep::Conclusion(_) => false,
        }
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        match &self.active {
            ActiveStep::Intro(step) => step.next_deadline(now),
            ActiveStep::Counting(step) => step.next_deadline(),
            ActiveStep::Reflection(step) => step.next_deadline(),
            ActiveStep::Sequence(_)
            | ActiveStep::Challenge(_)
            | ActiveStep::Dyck(_)
            | ActiveStep::Conclusion(_) => None,
        }
    }
}

fn build_step(
    kind: StepKind,
    config: &ExplorerConfig,
    rng: &mut StdRng,
    now: Instant,
) -> ActiveStep {
    let n = config.grid_size;
    match kind {
        StepKind::Intro => ActiveStep::Intro(IntroStep::new(now)),
        StepKind::Sequence => ActiveStep::Sequence(SequenceStep::new(n)),
        StepKind::Challenge => ActiveStep::Challenge(ChallengeStep::new(n, rng)),
        StepKind::Counting => ActiveStep::Counting(CountingStep::new(
            n,
            config.counting_reveal.timing(),
            config.countdown(),
        )),
        StepKind::Dyck => ActiveStep::Dyck(DyckStep::new(n)),
        StepKind::Reflection => ActiveStep::Reflection(ReflectionStep::new(
            n,
            ReflectionTimings {
                retry_reset: config.retry_reset(),
                reveal: config.reflection_reveal.timing(),
                countdown: config.countdown(),
            },
        )),
        StepKind::Conclusion => ActiveStep::Conclusion(ConclusionStep::new(n)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{ActiveStep, StepKind, Walkthrough, STEP_COUNT};
    use crate::config::ExplorerConfig;
    use crate::engine::{GridPoint, Move};

    fn walkthrough(now: Instant) -> Walkthrough {
        Walkthrough::with_rng(ExplorerConfig::default(), StdRng::seed_from_u64(11), now)
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        assert!(walk.is_first());
        assert!(!walk.prev(t0));

        for expected in 1..STEP_COUNT {
            assert!(walk.next(t0));
            assert_eq!(walk.index(), expected);
        }
        assert!(walk.is_last());
        assert!(!walk.next(t0));
        assert_eq!(walk.kind(), StepKind::Conclusion);
    }

    #[test]
    fn revisiting_a_step_starts_fresh() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        walk.next(t0);
        assert!(walk.click(GridPoint::new(1, 0), t0));

        walk.next(t0);
        walk.prev(t0);
        let ActiveStep::Sequence(step) = walk.active() else {
            panic!("expected the sequence step");
        };
        assert!(step.moves().is_empty());
    }

    #[test]
    fn leaving_a_step_drops_its_playback() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        while walk.kind() != StepKind::Counting {
            walk.next(t0);
        }
        if let ActiveStep::Counting(step) = walk.active_mut() {
            step.reveal();
            step.visualize(t0);
        }
        assert!(walk.next_deadline(t0).is_some());

        walk.next(t0);
        assert_eq!(walk.next_deadline(t0), None);
        assert!(!walk.tick(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn last_conclusion_page_restarts_the_walkthrough() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        while walk.next(t0) {}
        for _ in 0..3 {
            walk.conclude(t0);
            assert_eq!(walk.kind(), StepKind::Conclusion);
        }
        walk.conclude(t0);
        assert_eq!(walk.kind(), StepKind::Intro);
    }

    #[test]
    fn keyboard_moves_extend_from_the_end_point() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        assert!(!walk.draw_move(Move::Right, t0));

        walk.next(t0);
        assert!(walk.draw_move(Move::Right, t0));
        assert!(walk.draw_move(Move::Up, t0));
        let end = walk.builder().map(|builder| builder.end());
        assert_eq!(end, Some(GridPoint::new(1, 1)));

        walk.reset_path();
        assert_eq!(walk.builder().map(|builder| builder.path().len()), Some(1));
    }

    #[test]
    fn clicks_only_reach_drawing_steps() {
        let t0 = Instant::now();
        let mut walk = walkthrough(t0);
        assert!(!walk.click(GridPoint::new(1, 0), t0));
        assert_eq!(StepKind::from_index(STEP_COUNT), None);
        assert_eq!(StepKind::Reflection.title(), "André's Reflection Principle");
    }
}
