// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! What each walkthrough step puts on screen: prose, grid scene and primary action.

use std::time::Instant;

use ratatui::text::{Line, Span};

use super::theme::TuiTheme;
use crate::model::{
    ActiveStep, ChallengeStep, ConclusionPage, ConclusionStep, CountingStep, CountingView,
    DyckStep, IntroStep, PathBuilder, ReflectionStep, ReflectionView, SequenceStep, Status, Tone,
};
use crate::playback::{Playback, PlaybackPhase};
use crate::render::formula;
use crate::render::{render_grid, CanvasError, GridLayer, GridRender, GridScene};

/// The action bound to Enter on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PrimaryAction {
    pub(super) label: String,
    pub(super) enabled: bool,
}

impl PrimaryAction {
    fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), enabled: true }
    }
}

pub(super) fn primary_action(active: &ActiveStep) -> Option<PrimaryAction> {
    let action = match active {
        ActiveStep::Intro(_) | ActiveStep::Sequence(_) | ActiveStep::Dyck(_) => {
            PrimaryAction::new("Next")
        }
        ActiveStep::Challenge(step) => {
            PrimaryAction { label: "Validate".to_owned(), enabled: step.can_validate() }
        }
        ActiveStep::Counting(step) => match step.view() {
            CountingView::Question => PrimaryAction::new("Reveal the Answer"),
            CountingView::Result => PrimaryAction::new(format!("See All {} Paths", step.answer())),
            CountingView::Visualizing => PrimaryAction::new("Replay"),
        },
        ActiveStep::Reflection(step) => match step.view() {
            ReflectionView::Initial => PrimaryAction::new("Show Grid"),
            ReflectionView::Drawing => return None,
            ReflectionView::Drawn => PrimaryAction::new("Reflect Path"),
            ReflectionView::Reflected => PrimaryAction::new("Visualize Bad Paths"),
            ReflectionView::Visualizing => PrimaryAction::new("Replay"),
        },
        ActiveStep::Conclusion(step) => PrimaryAction::new(step.page().action_label()),
    };
    Some(action)
}

/// Label of the reset key on the current screen, when a reset is possible.
pub(super) fn reset_action(active: &ActiveStep) -> Option<&'static str> {
    match active {
        ActiveStep::Sequence(step) if step.builder().path().len() > 1 => Some("Reset"),
        ActiveStep::Challenge(step) if step.builder().path().len() > 1 => Some("Reset"),
        ActiveStep::Dyck(step) if step.builder().path().len() > 1 => Some("Reset"),
        ActiveStep::Reflection(step) if step.can_reset() => match step.view() {
            ReflectionView::Reflected => Some("Try Another Path"),
            _ => Some("Reset Path"),
        },
        _ => None,
    }
}

pub(super) fn is_replaying(active: &ActiveStep) -> bool {
    match active {
        ActiveStep::Counting(step) => step.playback().is_some(),
        ActiveStep::Reflection(step) => step.playback().is_some(),
        _ => false,
    }
}

/// A rendered grid plus the panel title it goes under.
#[derive(Debug, Clone)]
pub(super) struct StepGrid {
    pub(super) title: String,
    pub(super) render: GridRender,
    /// The drawn path crossed the diagonal.
    pub(super) invalid: bool,
}

pub(super) fn step_grid(active: &ActiveStep) -> Option<StepGrid> {
    let result = match active {
        ActiveStep::Intro(_) | ActiveStep::Conclusion(_) => return None,
        ActiveStep::Sequence(step) => drawing_grid(step.builder(), false)
            .map(|render| grid("Draw a Path", render, false)),
        ActiveStep::Challenge(step) => drawing_grid(step.builder(), false)
            .map(|render| grid("Recreate the Target", render, false)),
        ActiveStep::Dyck(step) => drawing_grid(step.builder(), true)
            .map(|render| grid("Draw a Dyck Path", render, !step.is_path_valid())),
        ActiveStep::Counting(step) => {
            if step.view() != CountingView::Visualizing {
                return None;
            }
            let n = step.n();
            let scene = GridScene { path: step.current_path(), ..GridScene::new(n, n) };
            render_grid(&scene).map(|render| grid(format!("All Paths on {n}x{n}"), render, false))
        }
        ActiveStep::Reflection(step) => reflection_grid(step)?,
    };

    match result {
        Ok(grid) => Some(grid),
        Err(err) => {
            tracing::warn!(%err, "grid render failed");
            None
        }
    }
}

fn grid(title: impl Into<String>, render: GridRender, invalid: bool) -> StepGrid {
    StepGrid { title: title.into(), render, invalid }
}

fn drawing_grid(builder: &PathBuilder, diagonal: bool) -> Result<GridRender, CanvasError> {
    let moves = builder.valid_moves();
    let scene = GridScene {
        diagonal,
        path: Some(builder.path()),
        valid_moves: &moves,
        marker: Some(builder.end()),
        ..GridScene::new(builder.width(), builder.height())
    };
    render_grid(&scene)
}

fn reflection_grid(step: &ReflectionStep) -> Option<Result<StepGrid, CanvasError>> {
    let n = step.n();
    let base = GridScene {
        drawable_height: Some(n),
        diagonal: true,
        reflection_line: step.shows_reflection_line(),
        ..GridScene::new(n, step.display_height())
    };
    let builder = step.builder();

    let result = match step.view() {
        ReflectionView::Initial => return None,
        ReflectionView::Drawing => {
            let moves = builder.valid_moves();
            let scene = GridScene {
                path: Some(builder.path()),
                valid_moves: &moves,
                marker: Some(builder.end()),
                ..base
            };
            render_grid(&scene)
        }
        ReflectionView::Drawn => render_grid(&GridScene { path: Some(builder.path()), ..base }),
        ReflectionView::Reflected => render_grid(&GridScene {
            faded_path: Some(builder.path()),
            reflected: step.reflection().map(|reflection| reflection.path()),
            ..base
        }),
        ReflectionView::Visualizing => {
            let pair = step.current_pair();
            render_grid(&GridScene {
                faded_path: pair.map(|pair| &pair.bad),
                reflected: pair.map(|pair| &pair.reflected),
                ..base
            })
        }
    };
    let title = format!("{n}x{} Reflection Grid", step.display_height());
    Some(result.map(|render| grid(title, render, false)))
}

/// Lines of the text panel for the step on screen.
pub(super) fn step_text(active: &ActiveStep, theme: &TuiTheme, now: Instant) -> Vec<Line<'static>> {
    let mut page = Page { theme, lines: Vec::new() };
    match active {
        ActiveStep::Intro(step) => intro(&mut page, step, now),
        ActiveStep::Sequence(step) => sequence(&mut page, step),
        ActiveStep::Challenge(step) => challenge(&mut page, step),
        ActiveStep::Counting(step) => counting(&mut page, step),
        ActiveStep::Dyck(step) => dyck(&mut page, step),
        ActiveStep::Reflection(step) => reflection(&mut page, step),
        ActiveStep::Conclusion(step) => conclusion(&mut page, step),
    }
    page.lines
}

struct Page<'a> {
    theme: &'a TuiTheme,
    lines: Vec<Line<'static>>,
}

impl Page<'_> {
    fn para(&mut self, text: impl Into<String>) {
        self.lines.push(Line::styled(text.into(), self.theme.base_style()));
        self.blank();
    }

    fn heading(&mut self, text: impl Into<String>) {
        self.lines.push(Line::styled(text.into(), self.theme.title_style()));
    }

    fn formula(&mut self, text: impl Into<String>) {
        self.lines.push(Line::styled(format!("    {}", text.into()), self.theme.accent_style()));
    }

    fn status(&mut self, status: &Status) {
        self.lines.push(Line::styled(status.text.clone(), self.theme.tone_style(status.tone)));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn playback(&mut self, playback: &Playback) {
        let phase = playback.phase();
        let style = match phase {
            PlaybackPhase::Done => self.theme.tone_style(Tone::Success),
            _ => self.theme.accent_style(),
        };
        self.lines.push(Line::styled(phase.to_string(), style));
        if playback.counter() > 0 {
            self.lines.push(Line::styled(
                format!("{} / {}", playback.counter(), playback.total()),
                self.theme.title_style(),
            ));
        }
    }
}

fn intro(page: &mut Page<'_>, step: &IntroStep, now: Instant) {
    page.para(
        "Catalan numbers are a sequence of natural numbers that appear in many counting \
         problems in combinatorics.",
    );
    page.lines.push(Line::styled("The sequence starts:", page.theme.base_style()));
    let mut spans = step
        .visible_numbers(now)
        .iter()
        .map(|number| Span::styled(format!("{number}  "), page.theme.accent_style()))
        .collect::<Vec<_>>();
    spans.insert(0, Span::raw("    "));
    spans.push(Span::styled("...", page.theme.muted_style()));
    page.lines.push(Line::from(spans));
    page.blank();
    page.para("Let's understand them by building them ourselves.");
}

fn sequence(page: &mut Page<'_>, step: &SequenceStep) {
    let n = step.builder().width();
    page.para(format!(
        "Any path from the bottom-left to top-right on a {n}x{n} grid must use exactly {n} \
         'Up' (U) and {n} 'Right' (R) moves."
    ));
    page.para(
        "This means every path has a unique corresponding sequence. Draw a path to see this in \
         action!",
    );
    page.heading("Your Path's Sequence");
    page.formula(step.moves().to_string());
    page.blank();
    page.status(step.status());
}

fn challenge(page: &mut Page<'_>, step: &ChallengeStep) {
    page.para(
        "You've seen how paths create sequences. Now, do the reverse! Draw the path that \
         matches this target sequence.",
    );
    page.heading("Target Sequence");
    page.formula(step.target().to_string());
    page.blank();
    page.heading("Your Path");
    page.formula(step.builder().path().moves().to_string());
    page.blank();
    page.status(step.status());
}

fn counting(page: &mut Page<'_>, step: &CountingStep) {
    let n = step.n();
    match step.view() {
        CountingView::Question => {
            page.para(format!(
                "You've seen how paths are formed. Now for the big question: how many unique \
                 paths exist on a {n}x{n} grid?"
            ));
            page.lines.push(Line::from(vec![
                Span::styled("Your guess: ", page.theme.base_style()),
                Span::styled(format!("{}▏", step.input()), page.theme.accent_style()),
            ]));
        }
        CountingView::Result => {
            if let Some(outcome) = step.outcome() {
                page.status(&outcome.status());
                page.blank();
            }
            page.para(
                "For an n x n grid, any path from the bottom-left to the top-right must consist \
                 of exactly n 'Right' moves and n 'Up' moves. This gives us a total of 2n moves.",
            );
            page.para(
                "The problem then becomes: out of 2n total moves, how many ways can we choose n \
                 of them to be 'Up' moves? This is a classic combination problem, solved with \
                 the binomial coefficient \"2n choose n\":",
            );
            page.formula(formula::total_paths(n));
        }
        CountingView::Visualizing => {
            page.para(format!("Every one of the {} paths on the {n}x{n} grid:", step.answer()));
            if let Some(playback) = step.playback() {
                page.playback(playback);
            }
        }
    }
}

fn dyck(page: &mut Page<'_>, step: &DyckStep) {
    page.para("A special path, called a Dyck Path, never goes above the main diagonal.");
    page.para(
        "Try to draw a complete path that is valid. These are the paths that Catalan numbers \
         truly count.",
    );
    page.status(step.status());
}

fn reflection(page: &mut Page<'_>, step: &ReflectionStep) {
    match step.view() {
        ReflectionView::Initial => {
            page.para(
                "Instead of counting good paths, we can subtract the 'bad' paths from the total. \
                 But how to count the bad paths? We'll use a visual trick.",
            );
            page.status(step.status());
        }
        ReflectionView::Drawing | ReflectionView::Drawn | ReflectionView::Reflected => {
            page.status(step.status());
            if let Some(reflection) = step.reflection() {
                let pivot = reflection.pivot();
                page.blank();
                page.lines.push(Line::styled(
                    format!("Pivot: first touch of y = x + 1 at ({}, {})", pivot.x, pivot.y),
                    page.theme.muted_style(),
                ));
                page.formula(reflection.path().moves().to_string());
            }
        }
        ReflectionView::Visualizing => {
            page.para(format!(
                "Visualizing all {} 'bad' paths and their reflections.",
                step.pairs().len()
            ));
            page.lines.push(Line::from(vec![
                Span::styled("― Bad Path", page.theme.layer_style(GridLayer::FadedPath, false)),
                Span::raw("   "),
                Span::styled(
                    "― Reflected Path",
                    page.theme.layer_style(GridLayer::Reflected, false),
                ),
            ]));
            page.blank();
            if let Some(playback) = step.playback() {
                page.playback(playback);
            }
        }
    }
}

fn conclusion(page: &mut Page<'_>, step: &ConclusionStep) {
    let n = step.n();
    let current = step.page();
    page.lines.push(Line::styled(
        format!("({}/{}) {}", current.index() + 1, ConclusionPage::ALL.len(), current.title()),
        page.theme.title_style(),
    ));
    page.blank();
    match current {
        ConclusionPage::BadPaths => {
            page.para(
                "The Reflection Principle shows that every 'bad' path from (0,0) to (n,n) \
                 corresponds to a unique path to the reflected endpoint (n-1, n+1).",
            );
            page.para(
                "A path to (n-1, n+1) requires n-1 Right moves and n+1 Up moves. The number of \
                 such paths is:",
            );
            page.formula(formula::BAD_PATHS_GENERAL);
            page.formula(formula::bad_paths(n));
        }
        ConclusionPage::PuttingTogether => {
            page.para(
                "The number of valid Dyck paths is the total paths minus the 'bad' paths:",
            );
            page.formula(formula::SUBTRACTION_IN_WORDS);
            page.formula(formula::SUBTRACTION_GENERAL);
            page.blank();
            page.para(format!("For n={n}, we get the {} Catalan Number:", ordinal(n)));
            page.formula(formula::subtraction(n));
        }
        ConclusionPage::GeneralFormula => {
            page.para(
                "Through algebraic simplification, our subtraction formula transforms into the \
                 more common, compact form of the Catalan number.",
            );
            for (label, line) in formula::DERIVATION {
                page.heading(label);
                page.formula(line);
            }
            page.blank();
            page.para("This gives us the famous formula:");
            page.formula(formula::SIMPLIFIED_GENERAL);
            page.formula(formula::simplified(n));
        }
        ConclusionPage::Applications => {
            page.para(
                "We've only scratched the surface! Catalan numbers also count the number of:",
            );
            for item in [
                "Full binary trees with n+1 leaves.",
                "Ways to form a \"mountain range\" with n upstrokes and n downstrokes.",
                "And many other combinatorial structures.",
            ] {
                page.lines.push(Line::styled(format!("  • {item}"), page.theme.base_style()));
            }
        }
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, `12th`, `13th`, `21st`.
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
