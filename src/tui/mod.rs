// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive walkthrough shell (ratatui + crossterm). All state lives in
//! [`Walkthrough`]; this module maps keys and mouse clicks onto it and draws it.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::config::ExplorerConfig;
use crate::engine::{GridPoint, Move};
use crate::model::{ActiveStep, CountingView, ReflectionView, StepKind, Walkthrough, STEP_COUNT};
use crate::render::{text_len, truncate_with_ellipsis, GridLayer, GridRender, LineSpan};

mod pages;
mod theme;

pub use theme::{PaletteError, ThemeError, TuiTheme};

const APP_TITLE: &str = "Catalan Numbers Explorer";
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Columns of space kept around the grid inside its panel.
const GRID_PANEL_PADDING: u16 = 2;

include!("chrome.rs");

/// Runs the interactive walkthrough until the user quits.
pub fn run(config: ExplorerConfig, theme: TuiTheme) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(Walkthrough::new(config, Instant::now()), theme);
    tracing::info!(grid_size = app.walkthrough.config().grid_size, "tui started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        let now = Instant::now();
        if event::poll(poll_timeout(app.walkthrough.next_deadline(now), now))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
        app.walkthrough.tick(Instant::now());
    }

    Ok(())
}

fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    deadline.map_or(MAX_POLL_INTERVAL, |deadline| {
        deadline.saturating_duration_since(now).min(MAX_POLL_INTERVAL)
    })
}

/// Where the grid was last drawn, so mouse clicks can be mapped back to grid points.
#[derive(Debug, Clone)]
struct GridHit {
    x: u16,
    y: u16,
    render: GridRender,
}

struct App {
    walkthrough: Walkthrough,
    theme: TuiTheme,
    show_help: bool,
    help_scroll: u16,
    should_quit: bool,
    grid_hit: Option<GridHit>,
}

impl App {
    fn new(walkthrough: Walkthrough, theme: TuiTheme) -> Self {
        Self {
            walkthrough,
            theme,
            show_help: false,
            help_scroll: 0,
            should_quit: false,
            grid_hit: None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_key_code(key.code, now) {
            self.should_quit = true;
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0;
        }
    }

    /// Handles a key press; returns whether the app should quit.
    fn handle_key_code(&mut self, code: KeyCode, now: Instant) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                KeyCode::Home => self.help_scroll = 0,
                _ => {}
            }
            return false;
        }

        if self.editing_guess() && self.handle_guess_key(code) {
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Char(']') | KeyCode::Tab | KeyCode::PageDown => {
                self.walkthrough.next(now);
            }
            KeyCode::Char('[') | KeyCode::BackTab | KeyCode::PageUp => {
                self.walkthrough.prev(now);
            }
            KeyCode::Enter => self.activate(now),
            KeyCode::Up | KeyCode::Char('k') => {
                self.walkthrough.draw_move(Move::Up, now);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.walkthrough.draw_move(Move::Right, now);
            }
            KeyCode::Char('r') | KeyCode::Backspace => self.walkthrough.reset_path(),
            KeyCode::Char('c') => self.walkthrough.new_challenge(),
            KeyCode::Char('v') => self.validate(),
            KeyCode::Char(' ') => self.walkthrough.replay(now),
            _ => {}
        }

        false
    }

    fn editing_guess(&self) -> bool {
        matches!(
            self.walkthrough.active(),
            ActiveStep::Counting(step) if step.view() == CountingView::Question
        )
    }

    /// Printable characters go to the guess; everything else falls through to the global keys.
    fn handle_guess_key(&mut self, code: KeyCode) -> bool {
        let ActiveStep::Counting(step) = self.walkthrough.active_mut() else {
            return false;
        };
        match code {
            KeyCode::Char(ch) => step.push_input(ch),
            KeyCode::Backspace => step.pop_input(),
            _ => return false,
        }
        true
    }

    fn validate(&mut self) {
        if let ActiveStep::Challenge(step) = self.walkthrough.active_mut() {
            step.validate();
        }
    }

    /// Enter: the step's primary action, or the next step when it has none.
    fn activate(&mut self, now: Instant) {
        match self.walkthrough.kind() {
            StepKind::Intro | StepKind::Sequence | StepKind::Dyck => {
                self.walkthrough.next(now);
                return;
            }
            StepKind::Conclusion => {
                self.walkthrough.conclude(now);
                return;
            }
            StepKind::Challenge | StepKind::Counting | StepKind::Reflection => {}
        }

        match self.walkthrough.active_mut() {
            ActiveStep::Challenge(step) => {
                step.validate();
            }
            ActiveStep::Counting(step) => match step.view() {
                CountingView::Question => step.reveal(),
                CountingView::Result => step.visualize(now),
                CountingView::Visualizing => step.replay(now),
            },
            ActiveStep::Reflection(step) => match step.view() {
                ReflectionView::Initial => step.show_grid(),
                ReflectionView::Drawing => {}
                ReflectionView::Drawn => {
                    step.reflect();
                }
                ReflectionView::Reflected => step.visualize(now),
                ReflectionView::Visualizing => step.replay(now),
            },
            ActiveStep::Intro(_) | ActiveStep::Sequence(_) | ActiveStep::Dyck(_) => {}
            ActiveStep::Conclusion(_) => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(point) = self.grid_point_at(mouse.column, mouse.row) {
            self.walkthrough.click(point, now);
        }
    }

    fn grid_point_at(&self, column: u16, row: u16) -> Option<GridPoint> {
        let hit = self.grid_hit.as_ref()?;
        let col = column.checked_sub(hit.x)?;
        let row = row.checked_sub(hit.y)?;
        hit.render.point_at(usize::from(col), usize::from(row))
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    draw_at(frame, app, Instant::now());
}

fn draw_at(frame: &mut Frame<'_>, app: &mut App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let (header_area, main_area, footer_area) = (layout[0], layout[1], layout[2]);

    frame.render_widget(Paragraph::new(header_line(app, header_area.width)), header_area);

    let text = pages::step_text(app.walkthrough.active(), &app.theme, now);
    app.grid_hit = None;
    match pages::step_grid(app.walkthrough.active()) {
        Some(grid) => {
            let wanted = u16::try_from(grid.render.columns())
                .unwrap_or(u16::MAX)
                .saturating_add(2 * GRID_PANEL_PADDING + 2);
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(wanted)])
                .split(main_area);
            render_text_panel(frame, app, text, panes[0]);
            render_grid_panel(frame, app, grid, panes[1]);
        }
        None => render_text_panel(frame, app, text, main_area),
    }

    let compact = footer_uses_compact_mode(area);
    frame.render_widget(Paragraph::new(footer_help_line(app, compact)), footer_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_text_panel(frame: &mut Frame<'_>, app: &App, lines: Vec<Line<'static>>, area: Rect) {
    let panel = Paragraph::new(Text::from(lines))
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title(app.walkthrough.kind().title()))
                .border_style(app.theme.panel_border_style(false)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

fn render_grid_panel(frame: &mut Frame<'_>, app: &mut App, grid: pages::StepGrid, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(&grid.title))
        .border_style(app.theme.panel_border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = u16::try_from(grid.render.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.render.rows()).unwrap_or(u16::MAX);
    let left_pad = inner.width.saturating_sub(columns) / 2;
    let top_pad = inner.height.saturating_sub(rows) / 2;
    let origin = Rect {
        x: inner.x + left_pad,
        y: inner.y + top_pad,
        width: inner.width - left_pad,
        height: inner.height - top_pad,
    };

    let text = styled_grid_text(&grid.render, &app.theme, grid.invalid);
    frame.render_widget(Paragraph::new(text), origin);
    app.grid_hit = Some(GridHit { x: origin.x, y: origin.y, render: grid.render });
}

/// Marks every cell covered by `spans` with `layer`. Later calls win.
fn apply_layer_spans(
    layers_by_line: &mut [Vec<Option<GridLayer>>],
    spans: &[LineSpan],
    layer: GridLayer,
) {
    for (y, x0, x1) in spans {
        let Some(line) = layers_by_line.get_mut(*y) else {
            continue;
        };
        if line.is_empty() {
            continue;
        }

        let max_x = line.len().saturating_sub(1);
        let start = (*x0).min(max_x);
        let end = (*x1).min(max_x);
        for cell in line.iter_mut().take(end + 1).skip(start) {
            *cell = Some(layer);
        }
    }
}

fn styled_grid_text(render: &GridRender, theme: &TuiTheme, invalid: bool) -> Text<'static> {
    let lines = render
        .text
        .split('\n')
        .map(|line| line.chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let mut layers_by_line = lines.iter().map(|line| vec![None; line.len()]).collect::<Vec<_>>();
    // Layers iterate in precedence order.
    for (&layer, spans) in &render.layers {
        apply_layer_spans(&mut layers_by_line, spans, layer);
    }

    let cell_style = |layer: Option<GridLayer>| match layer {
        Some(layer) => theme.layer_style(layer, invalid),
        None => theme.base_style(),
    };

    let mut out = Text::default();
    for (chars, layers) in lines.iter().zip(&layers_by_line) {
        let mut spans = Vec::<Span<'static>>::new();
        let mut buf = String::new();
        let mut current = None;
        for (&ch, &layer) in chars.iter().zip(layers) {
            if layer != current && !buf.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut buf), cell_style(current)));
            }
            current = layer;
            buf.push(ch);
        }
        if !buf.is_empty() {
            spans.push(Span::styled(buf, cell_style(current)));
        }
        out.lines.push(Line::from(spans));
    }
    out
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
