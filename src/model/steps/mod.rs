// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One state type per walkthrough step.

mod challenge;
mod conclusion;
mod counting;
mod dyck;
mod intro;
mod reflection;
mod sequence;

pub use challenge::{random_target, ChallengeStep};
pub use conclusion::{ConclusionAction, ConclusionPage, ConclusionStep};
pub use counting::{evaluate_guess, CountingStep, CountingView, GuessOutcome};
pub use dyck::DyckStep;
pub use intro::IntroStep;
pub use reflection::{ReflectedPair, ReflectionStep, ReflectionTimings, ReflectionView};
pub use sequence::SequenceStep;
