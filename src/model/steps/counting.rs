// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use num_bigint::{BigInt, BigUint};

use crate::engine::{generate_all_paths, total_path_count, LatticePath};
use crate::model::Status;
use crate::playback::{Countdown, Playback, RevealTiming};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingView {
    Question,
    Result,
    Visualizing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Invalid,
    Correct { guess: BigInt },
    Incorrect { guess: BigInt, answer: BigUint },
}

impl GuessOutcome {
    pub fn status(&self) -> Status {
        match self {
            Self::Invalid => Status::failure("Please enter a valid number."),
            Self::Correct { guess } => {
                Status::success(format!("Correct! Your guess of {guess} is spot on."))
            }
            Self::Incorrect { guess, answer } => Status::failure(format!(
                "Not quite. Your guess was {guess}. The correct answer is {answer}."
            )),
        }
    }
}

/// Whole-number guesses only; surrounding whitespace is ignored.
///
/// The whole trimmed input must be an integer. Leading digits are not salvaged, so `"2.5"` and
/// `"252abc"` are both [`GuessOutcome::Invalid`] rather than guesses of 2 and 252.
pub fn evaluate_guess(input: &str, answer: &BigUint) -> GuessOutcome {
    let Ok(guess) = input.trim().parse::<BigInt>() else {
        return GuessOutcome::Invalid;
    };
    if guess == BigInt::from(answer.clone()) {
        GuessOutcome::Correct { guess }
    } else {
        GuessOutcome::Incorrect { guess, answer: answer.clone() }
    }
}

/// Guess the number of paths, read the explanation, then watch every path go by.
#[derive(Debug, Clone)]
pub struct CountingStep {
    n: u32,
    answer: BigUint,
    view: CountingView,
    input: String,
    outcome: Option<GuessOutcome>,
    timing: RevealTiming,
    countdown: Countdown,
    paths: Vec<LatticePath>,
    playback: Option<Playback>,
}

impl CountingStep {
    pub fn new(n: u32, timing: RevealTiming, countdown: Countdown) -> Self {
        Self {
            n,
            answer: total_path_count(n),
            view: CountingView::Question,
            input: String::new(),
            outcome: None,
            timing,
            countdown,
            paths: Vec::new(),
            playback: None,
        }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn answer(&self) -> &BigUint {
        &self.answer
    }

    pub fn view(&self) -> CountingView {
        self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outcome(&self) -> Option<&GuessOutcome> {
        self.outcome.as_ref()
    }

    pub fn push_input(&mut self, ch: char) {
        if self.view == CountingView::Question && !ch.is_control() {
            self.input.push(ch);
        }
    }

    pub fn pop_input(&mut self) {
        if self.view == CountingView::Question {
            self.input.pop();
        }
    }

    /// Evaluates the typed guess and moves on to the explanation.
    pub fn reveal(&mut self) {
        if self.view != CountingView::Question {
            return;
        }
        self.outcome = Some(evaluate_guess(&self.input, &self.answer));
        self.view = CountingView::Result;
    }

    /// Enumerates the paths on first use and starts the countdown.
    pub fn visualize(&mut self, now: Instant) {
        if self.view != CountingView::Result {
            return;
        }
        if self.paths.is_empty() {
            self.paths = generate_all_paths(self.n);
        }
        self.view = CountingView::Visualizing;
        self.playback = Some(Playback::start(self.paths.len(), self.timing, self.countdown, now));
    }

    pub fn replay(&mut self, now: Instant) {
        if let Some(playback) = self.playback.as_mut() {
            playback.restart(now);
        }
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn paths(&self) -> &[LatticePath] {
        &self.paths
    }

    pub fn current_path(&self) -> Option<&LatticePath> {
        let index = self.playback.as_ref()?.current()?;
        self.paths.get(index)
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.playback.as_mut().is_some_and(|playback| playback.advance(now))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.playback.as_ref().and_then(Playback::next_deadline)
    }
}
