// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::engine::catalan;
use crate::playback::StaggeredReveal;

const INTRO_TERMS: u32 = 5;
const INTRO_INTERVAL: Duration = Duration::from_millis(150);

/// The opening page: the first Catalan numbers appear one by one.
#[derive(Debug, Clone)]
pub struct IntroStep {
    numbers: Vec<BigUint>,
    reveal: StaggeredReveal,
}

impl IntroStep {
    pub fn new(now: Instant) -> Self {
        let numbers = (0..INTRO_TERMS).map(catalan).collect::<Vec<_>>();
        let reveal = StaggeredReveal::new(numbers.len(), INTRO_INTERVAL, now);
        Self { numbers, reveal }
    }

    pub fn visible_numbers(&self, now: Instant) -> &[BigUint] {
        &self.numbers[..self.reveal.visible(now)]
    }

    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.reveal.next_deadline(now)
    }
}
