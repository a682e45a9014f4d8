// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use crate::engine::{generate_bad_paths, reflect, GridPoint, LatticePath, Reflection};
use crate::model::{DrawingState, PathBuilder, Status};
use crate::playback::{Countdown, Playback, RevealTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionView {
    Initial,
    Drawing,
    Drawn,
    Reflected,
    Visualizing,
}

/// A bad path paired with its image under the reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectedPair {
    pub bad: LatticePath,
    pub reflected: LatticePath,
}

/// Timings the reflection demo needs from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectionTimings {
    pub retry_reset: Duration,
    pub reveal: RevealTiming,
    pub countdown: Countdown,
}

/// Draw a bad path, reflect it about `y = x + 1`, then watch every bad path get reflected.
///
/// Drawing is confined to the `n x n` square even though the grid is shown `n + 1` high.
#[derive(Debug, Clone)]
pub struct ReflectionStep {
    n: u32,
    view: ReflectionView,
    builder: PathBuilder,
    reflection: Option<Reflection>,
    status: Status,
    timings: ReflectionTimings,
    retry_at: Option<Instant>,
    pairs: Vec<ReflectedPair>,
    playback: Option<Playback>,
}

impl ReflectionStep {
    pub fn new(n: u32, timings: ReflectionTimings) -> Self {
        Self {
            n,
            view: ReflectionView::Initial,
            builder: PathBuilder::square(n),
            reflection: None,
            status: Status::neutral(
                "We'll use a trick to count 'bad' paths. First, we need a bigger canvas for our \
                 demonstration.",
            ),
            timings,
            retry_at: None,
            pairs: Vec::new(),
            playback: None,
        }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    /// Height of the displayed grid.
    pub fn display_height(&self) -> u32 {
        self.n + 1
    }

    pub fn view(&self) -> ReflectionView {
        self.view
    }

    pub fn builder(&self) -> &PathBuilder {
        &self.builder
    }

    pub fn reflection(&self) -> Option<&Reflection> {
        self.reflection.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn shows_reflection_line(&self) -> bool {
        matches!(
            self.view,
            ReflectionView::Drawn | ReflectionView::Reflected | ReflectionView::Visualizing
        )
    }

    pub fn can_reset(&self) -> bool {
        match self.view {
            ReflectionView::Drawing => self.builder.path().len() > 1,
            ReflectionView::Reflected => true,
            _ => false,
        }
    }

    pub fn show_grid(&mut self) {
        if self.view != ReflectionView::Initial {
            return;
        }
        let n = self.n;
        self.view = ReflectionView::Drawing;
        self.status = Status::neutral(format!(
            "Draw a path from (0,0) to ({n},{n}) that goes above the main diagonal."
        ));
    }

    pub fn reset(&mut self) {
        if !self.can_reset() {
            return;
        }
        self.clear_drawing();
        self.view = ReflectionView::Drawing;
    }

    fn clear_drawing(&mut self) {
        let n = self.n;
        self.builder.reset();
        self.reflection = None;
        self.retry_at = None;
        self.status = Status::neutral(format!(
            "Draw a 'bad' path from (0,0) to ({n},{n}) that goes above the main diagonal."
        ));
    }

    pub fn click(&mut self, point: GridPoint, now: Instant) -> bool {
        if self.view != ReflectionView::Drawing {
            return false;
        }
        let Ok(state) = self.builder.try_extend(point) else {
            return false;
        };
        match state {
            DrawingState::CompleteInvalid => {
                self.view = ReflectionView::Drawn;
                self.status =
                    Status::success("Excellent! A \"bad\" path. Now, let's see the magic.");
            }
            DrawingState::CompleteValid => {
                self.status = Status::failure(
                    "That's a valid Dyck path! For this step, we need a 'bad' one. Try again.",
                );
                self.retry_at = Some(now + self.timings.retry_reset);
            }
            DrawingState::Empty | DrawingState::Drawing => {
                self.status = Status::neutral("Keep going...");
            }
        }
        true
    }

    pub fn reflect(&mut self) -> bool {
        if self.view != ReflectionView::Drawn {
            return false;
        }
        let Some(reflection) = reflect(self.builder.path()) else {
            self.status = Status::failure(
                "Path must touch the y = x + 1 line to be reflected this way. Try drawing a path \
                 higher up.",
            );
            return false;
        };
        let n = self.n;
        self.reflection = Some(reflection);
        self.view = ReflectionView::Reflected;
        self.status = Status::success(format!(
            "The path is reflected! Every 'bad' path to ({n},{n}) uniquely maps to a path to \
             ({},{}).",
            n.saturating_sub(1),
            n + 1
        ));
        true
    }

    pub fn visualize(&mut self, now: Instant) {
        if self.view != ReflectionView::Reflected {
            return;
        }
        if self.pairs.is_empty() {
            self.pairs = generate_bad_paths(self.n)
                .into_iter()
                .filter_map(|bad| {
                    let reflected = reflect(&bad)?.into_path();
                    Some(ReflectedPair { bad, reflected })
                })
                .collect();
        }
        self.view = ReflectionView::Visualizing;
        self.playback = Some(Playback::start(
            self.pairs.len(),
            self.timings.reveal,
            self.timings.countdown,
            now,
        ));
    }

    pub fn replay(&mut self, now: Instant) {
        if let Some(playback) = self.playback.as_mut() {
            playback.restart(now);
        }
    }

    pub fn pairs(&self) -> &[ReflectedPair] {
        &self.pairs
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn current_pair(&self) -> Option<&ReflectedPair> {
        let index = self.playback.as_ref()?.current()?;
        self.pairs.get(index)
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.retry_at.is_some_and(|at| at <= now) {
            self.clear_drawing();
            changed = true;
        }
        if let Some(playback) = self.playback.as_mut() {
            changed |= playback.advance(now);
        }
        changed
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        let playback = self.playback.as_ref().and_then(Playback::next_deadline);
        match (self.retry_at, playback) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
