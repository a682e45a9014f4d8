// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

use super::{draw_at, footer_help_line, poll_timeout, styled_grid_text, App, TuiTheme};
use crate::config::ExplorerConfig;
use crate::engine::{GridPoint, LatticePath, MoveSequence};
use crate::model::{ActiveStep, CountingView, GuessOutcome, ReflectionView, StepKind, Walkthrough};
use crate::render::{render_grid, GridScene};

fn app(now: Instant) -> App {
    let walkthrough =
        Walkthrough::with_rng(ExplorerConfig::default(), StdRng::seed_from_u64(7), now);
    App::new(walkthrough, TuiTheme::default())
}

fn goto(app: &mut App, kind: StepKind, now: Instant) {
    while app.walkthrough.kind() != kind {
        assert!(app.walkthrough.next(now), "step {kind:?} not reachable");
    }
}

fn press(app: &mut App, codes: &[KeyCode], now: Instant) {
    for &code in codes {
        assert!(!app.handle_key_code(code, now), "{code:?} quit the app");
    }
}

fn render(app: &mut App, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
    terminal.draw(|frame| draw_at(frame, app, now)).expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

#[test]
fn header_shows_the_step_counter_and_title() {
    let t0 = Instant::now();
    let mut app = app(t0);
    let screen = render(&mut app, t0 + Duration::from_secs(1));
    assert!(screen.contains("Catalan Numbers Explorer │ Step 1 of 7 │ What are Catalan Numbers?"));
    assert!(screen.contains("1  1  2  5  14  ..."));
}

#[test]
fn intro_numbers_appear_one_by_one() {
    let t0 = Instant::now();
    let mut app = app(t0);
    let screen = render(&mut app, t0 + Duration::from_millis(160));
    assert!(screen.contains("1  1  ..."));
    assert!(!screen.contains("1  1  2"));
}

#[test]
fn brackets_navigate_and_q_quits() {
    let t0 = Instant::now();
    let mut app = app(t0);
    press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')], t0);
    assert_eq!(app.walkthrough.kind(), StepKind::Challenge);
    press(&mut app, &[KeyCode::Char('['), KeyCode::BackTab], t0);
    assert_eq!(app.walkthrough.kind(), StepKind::Intro);
    press(&mut app, &[KeyCode::Enter], t0);
    assert_eq!(app.walkthrough.kind(), StepKind::Sequence);

    app.handle_key(crossterm::event::KeyEvent::from(KeyCode::Char('q')), t0);
    assert!(app.should_quit);
}

#[test]
fn help_overlay_swallows_keys_until_closed() {
    let t0 = Instant::now();
    let mut app = app(t0);
    press(&mut app, &[KeyCode::Char('?')], t0);
    assert!(app.show_help);
    assert!(render(&mut app, t0).contains("--- Global ---"));

    press(&mut app, &[KeyCode::Char(']'), KeyCode::Esc], t0);
    assert!(!app.show_help);
    assert_eq!(app.walkthrough.kind(), StepKind::Intro);
}

#[test]
fn guess_editor_captures_letters() {
    let t0 = Instant::now();
    let mut app = app(t0);
    goto(&mut app, StepKind::Counting, t0);
    assert!(app.editing_guess());

    press(&mut app, &[KeyCode::Char('q'), KeyCode::Backspace], t0);
    press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('5'), KeyCode::Char('2')], t0);
    assert!(render(&mut app, t0).contains("Your guess: 252"));
    press(&mut app, &[KeyCode::Enter], t0);

    let ActiveStep::Counting(step) = app.walkthrough.active() else {
        panic!("expected the counting step");
    };
    assert_eq!(step.view(), CountingView::Result);
    assert!(matches!(step.outcome(), Some(GuessOutcome::Correct { .. })));
    assert!(render(&mut app, t0).contains("Correct! Your guess of 252 is spot on."));

    press(&mut app, &[KeyCode::Enter], t0);
    let ActiveStep::Counting(step) = app.walkthrough.active() else {
        panic!("expected the counting step");
    };
    assert_eq!(step.view(), CountingView::Visualizing);
    assert_eq!(step.paths().len(), 252);
    assert!(app.handle_key_code(KeyCode::Char('q'), t0));
}

#[test]
fn left_click_on_a_dot_extends_the_path() {
    let t0 = Instant::now();
    let mut app = app(t0);
    goto(&mut app, StepKind::Sequence, t0);
    render(&mut app, t0);

    let hit = app.grid_hit.as_ref().expect("grid drawn");
    let (col, row) = hit.render.cell_of(GridPoint::new(1, 0)).expect("on grid");
    let (column, row) = (hit.x + col as u16, hit.y + row as u16);
    let click = |kind| MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE };

    app.handle_mouse(click(MouseEventKind::Down(MouseButton::Right)), t0);
    assert_eq!(app.walkthrough.builder().map(|b| b.end()), Some(GridPoint::ORIGIN));

    app.handle_mouse(click(MouseEventKind::Down(MouseButton::Left)), t0);
    assert_eq!(app.walkthrough.builder().map(|b| b.end()), Some(GridPoint::new(1, 0)));
    assert!(render(&mut app, t0).contains("Keep going!"));
}

#[test]
fn clicks_outside_the_grid_are_ignored() {
    let t0 = Instant::now();
    let mut app = app(t0);
    goto(&mut app, StepKind::Sequence, t0);
    render(&mut app, t0);
    let hit = app.grid_hit.as_ref().expect("grid drawn");
    assert_eq!(app.grid_point_at(hit.x.saturating_sub(3), hit.y), None);
    assert_eq!(app.grid_point_at(hit.x, hit.y + 1), None);
    assert_eq!(app.grid_point_at(hit.x, hit.y), Some(GridPoint::new(0, 5)));
}

#[test]
fn reflection_walkthrough_by_keyboard() {
    let t0 = Instant::now();
    let mut app = app(t0);
    goto(&mut app, StepKind::Reflection, t0);
    press(&mut app, &[KeyCode::Enter], t0);

    let moves = "U U R R R R R U U U".parse::<MoveSequence>().expect("moves");
    for mv in moves.moves() {
        let code = match mv {
            crate::engine::Move::Up => KeyCode::Up,
            crate::engine::Move::Right => KeyCode::Right,
        };
        press(&mut app, &[code], t0);
    }
    let ActiveStep::Reflection(step) = app.walkthrough.active() else {
        panic!("expected the reflection step");
    };
    assert_eq!(step.view(), ReflectionView::Drawn);

    press(&mut app, &[KeyCode::Enter], t0);
    let ActiveStep::Reflection(step) = app.walkthrough.active() else {
        panic!("expected the reflection step");
    };
    assert_eq!(step.view(), ReflectionView::Reflected);
    assert_eq!(step.reflection().map(|r| r.pivot()), Some(GridPoint::new(0, 1)));
    assert!(render(&mut app, t0).contains("Pivot: first touch of y = x + 1 at (0, 1)"));

    press(&mut app, &[KeyCode::Enter], t0);
    assert!(app.walkthrough.next_deadline(t0).is_some());
    let screen = render(&mut app, t0);
    assert!(screen.contains("Visualizing all 210 'bad' paths and their reflections."));
    assert!(screen.contains("Get ready..."));
}

#[test]
fn footer_greys_out_unavailable_actions() {
    let t0 = Instant::now();
    let mut app = app(t0);
    goto(&mut app, StepKind::Challenge, t0);

    let footer = footer_help_line(&app, false);
    let text = line_to_string(&footer);
    assert!(text.starts_with("Validate:Enter | Prev:[ | Next:] | Draw:↑/→ | New Challenge:c"));
    let enter = footer.spans.iter().find(|span| span.content == "Enter").expect("enter key");
    assert_eq!(enter.style.fg, Some(Color::DarkGray));

    let compact = line_to_string(&footer_help_line(&app, true));
    assert_eq!(compact, "Validate:Enter | Prev:[ | Next:] | Help:? | Quit:q");
}

#[test]
fn invalid_dyck_paths_are_drawn_red() {
    let path = LatticePath::from_moves(&"U".parse::<MoveSequence>().expect("moves"));
    let scene = GridScene { diagonal: true, path: Some(&path), ..GridScene::new(2, 2) };
    let render = render_grid(&scene).expect("render");
    let text = styled_grid_text(&render, &TuiTheme::default(), true);

    assert_eq!(text.lines.len(), render.rows());
    let segment = text
        .lines
        .iter()
        .flat_map(|line| line.spans.iter())
        .find(|span| span.content.contains('│'))
        .expect("vertical segment");
    assert_eq!(segment.style.fg, Some(Color::LightRed));
    let plain = text.lines.iter().map(line_to_string).collect::<Vec<_>>().join("\n");
    assert_eq!(plain, render.text);
}

#[test]
fn poll_timeout_is_bounded_by_the_next_deadline() {
    let t0 = Instant::now();
    assert_eq!(poll_timeout(None, t0), Duration::from_millis(250));
    assert_eq!(poll_timeout(Some(t0 + Duration::from_millis(40)), t0), Duration::from_millis(40));
    assert_eq!(poll_timeout(Some(t0 + Duration::from_secs(3)), t0), Duration::from_millis(250));
    assert_eq!(poll_timeout(Some(t0), t0 + Duration::from_millis(5)), Duration::ZERO);
}
