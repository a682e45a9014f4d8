// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Header, footer, help and panel helpers used by TUI rendering.
fn footer_uses_compact_mode(area: Rect) -> bool {
    area.width < 90
}

fn view_title(label: &str) -> String {
    format!("─ {label} ")
}

fn step_counter_label(index: usize, total: usize) -> String {
    format!("Step {} of {total}", index + 1)
}

fn header_line(app: &App, width: u16) -> Line<'static> {
    let counter = step_counter_label(app.walkthrough.index(), STEP_COUNT);
    let separator = " │ ";
    let used = text_len(APP_TITLE) + text_len(&counter) + 2 * text_len(separator) + 1;
    let title = truncate_with_ellipsis(
        app.walkthrough.kind().title(),
        usize::from(width).saturating_sub(used),
    );

    let muted = app.theme.muted_style();
    Line::from(vec![
        Span::styled(format!(" {APP_TITLE}"), app.theme.title_style()),
        Span::styled(separator.to_owned(), muted),
        Span::styled(counter, app.theme.accent_style()),
        Span::styled(separator.to_owned(), muted),
        Span::styled(title, app.theme.base_style()),
    ])
}

fn footer_help_line(app: &App, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let active = app.walkthrough.active();

    if app.editing_guess() {
        push_footer_entry(&mut spans, app, "Guess", "type", false);
    }
    if let Some(action) = pages::primary_action(active) {
        push_footer_entry(&mut spans, app, &action.label, "Enter", !action.enabled);
    }
    push_footer_entry(&mut spans, app, "Prev", "[", app.walkthrough.is_first());
    push_footer_entry(&mut spans, app, "Next", "]", app.walkthrough.is_last());

    if !compact {
        if app.walkthrough.builder().is_some() && !app.editing_guess() {
            push_footer_entry(&mut spans, app, "Draw", "↑/→", false);
        }
        if let Some(label) = pages::reset_action(active) {
            push_footer_entry(&mut spans, app, label, "r", false);
        }
        if app.walkthrough.kind() == StepKind::Challenge {
            push_footer_entry(&mut spans, app, "New Challenge", "c", false);
        }
        if pages::is_replaying(active) {
            push_footer_entry(&mut spans, app, "Replay", "space", false);
        }
    }

    push_footer_entry(&mut spans, app, "Help", "?", false);
    let quit_key = if app.editing_guess() { "Esc" } else { "q" };
    push_footer_entry(&mut spans, app, "Quit", quit_key, false);
    Line::from(spans)
}

fn push_footer_entry(
    spans: &mut Vec<Span<'static>>,
    app: &App,
    label: &str,
    key: &str,
    disabled: bool,
) {
    let label_style = app.theme.muted_style();
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), label_style));
    }
    spans.push(Span::styled(format!("{label}:"), label_style));
    let key_style =
        if disabled { app.theme.disabled_key_style() } else { app.theme.key_style() };
    spans.push(Span::styled(key.to_owned(), key_style));
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Help (toggle)"),
            ("q/Esc", "Quit"),
            ("]/Tab/PgDn", "Next step"),
            ("[/Shift-Tab/PgUp", "Previous step"),
            ("Enter", "Primary action of the step (shown in the footer)"),
        ],
    ),
    (
        "Drawing",
        &[
            ("click", "Extend the path to an adjacent dot"),
            ("↑/k", "Move Up"),
            ("→/l", "Move Right"),
            ("r/Backspace", "Reset the path"),
            ("v", "Validate (challenge)"),
            ("c", "New challenge"),
        ],
    ),
    (
        "Counting",
        &[
            ("type", "Enter a guess"),
            ("Backspace", "Delete the last character"),
            ("space", "Replay the animation"),
        ],
    ),
];

fn render_help(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(70, 70, main_area);
    frame.render_widget(Clear, area);

    let key_style = app.theme.key_style();
    let header_style = app.theme.title_style();
    let key_col_width = HELP_SECTIONS
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|(key, _)| text_len(key))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    for (idx, (section, entries)) in HELP_SECTIONS.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(format!("--- {section} ---"), header_style)));
        for (key, desc) in entries.iter() {
            lines.push(help_kv(key, desc, key_col_width, key_style));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc or ? closes this help. j/k scroll.",
        app.theme.muted_style(),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(view_title("Help"))
                .border_style(app.theme.panel_border_style(true)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0));
    frame.render_widget(paragraph, area);
}
