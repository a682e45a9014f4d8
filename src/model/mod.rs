// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Walkthrough state.
//!
//! Everything mutable lives here and is owned by the caller: the path builder, one state value
//! per walkthrough step, and the step cursor. Time enters only as `Instant` arguments, so every
//! transition is testable without a clock.

pub mod drawing;
pub mod steps;
pub mod walkthrough;

pub use drawing::{CompletionTarget, DrawingState, ExtendRejection, PathBuilder};
pub use steps::{
    ChallengeStep, ConclusionAction, ConclusionPage, ConclusionStep, CountingStep, CountingView,
    DyckStep, GuessOutcome, IntroStep, ReflectedPair, ReflectionStep, ReflectionTimings,
    ReflectionView, SequenceStep,
};
pub use walkthrough::{ActiveStep, StepKind, Walkthrough, STEP_COUNT};

/// How a status line should read: plain, a success, or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Failure,
}

/// The feedback line under a step's grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub text: String,
    pub tone: Tone,
}

impl Status {
    pub fn neutral(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Neutral }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Failure }
    }
}
