// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};

use crate::model::Tone;
use crate::render::GridLayer;

const PALETTE_ENV: &str = "CATALAN_TUI_PALETTE";
const PALETTE_ENV_FALLBACK: &str = "CATALAN_PALETTE";

#[derive(Debug, Clone, Default)]
pub struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    /// Reads `CATALAN_TUI_PALETTE`, falling back to `CATALAN_PALETTE`. Unset or blank means
    /// the terminal's own palette.
    pub fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi_color(&self, color: Ansi16) -> Color {
        match &self.palette {
            Some(palette) => palette.ansi[color as usize],
            None => color.into(),
        }
    }

    fn fg(&self, color: Ansi16) -> Style {
        self.base_style().fg(self.ansi_color(color))
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.fg(Ansi16::BrightGreen)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn title_style(&self) -> Style {
        self.fg(Ansi16::BrightWhite).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.fg(Ansi16::BrightCyan).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.fg(Ansi16::BrightBlack)
    }

    pub(crate) fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => self.base_style(),
            Tone::Success => self.fg(Ansi16::BrightGreen).add_modifier(Modifier::BOLD),
            Tone::Failure => self.fg(Ansi16::BrightRed).add_modifier(Modifier::BOLD),
        }
    }

    /// Style of one grid layer. An `invalid` path (one that crossed the diagonal) is red.
    pub(crate) fn layer_style(&self, layer: GridLayer, invalid: bool) -> Style {
        match layer {
            GridLayer::Diagonal => self.fg(Ansi16::BrightBlack),
            GridLayer::ReflectionLine => self.fg(Ansi16::Magenta),
            GridLayer::ExtendedDot => self.fg(Ansi16::BrightBlack).add_modifier(Modifier::DIM),
            GridLayer::FadedPath => self.fg(Ansi16::Yellow).add_modifier(Modifier::DIM),
            GridLayer::Path if invalid => self.fg(Ansi16::BrightRed).add_modifier(Modifier::BOLD),
            GridLayer::Path => self.fg(Ansi16::BrightYellow).add_modifier(Modifier::BOLD),
            GridLayer::Reflected => self.fg(Ansi16::BrightGreen).add_modifier(Modifier::BOLD),
            GridLayer::ValidMove => self.fg(Ansi16::BrightCyan),
            GridLayer::Marker => self.fg(Ansi16::BrightWhite).add_modifier(Modifier::BOLD),
        }
    }

    pub(crate) fn key_style(&self) -> Style {
        self.fg(Ansi16::BrightGreen).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn disabled_key_style(&self) -> Style {
        self.fg(Ansi16::BrightBlack)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl TuiPalette {
    const CSV_LEN: usize = 18;

    fn parse_csv(value: &str) -> Result<Self, PaletteError> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(PaletteError::WrongLength { expected: Self::CSV_LEN, got: parts.len() });
        }

        let fg = parse_palette_color(parts[0])?;
        let bg = parse_palette_color(parts[1])?;

        let mut ansi = [Color::Reset; 16];
        for (slot, part) in ansi.iter_mut().zip(parts.iter().skip(2)) {
            *slot = parse_palette_color(part)?;
        }

        Ok(Self { fg, bg, ansi })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    for name in [PALETTE_ENV, PALETTE_ENV_FALLBACK] {
        match env::var(name) {
            Ok(value) => return palette_from_value(name, &value),
            Err(env::VarError::NotPresent) => continue,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name,
                    value: "<non-unicode>".to_owned(),
                    source: PaletteError::NotUnicode,
                });
            }
        }
    }
    Ok(None)
}

fn palette_from_value(name: &'static str, value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    TuiPalette::parse_csv(trimmed)
        .map(Some)
        .map_err(|source| ThemeError::InvalidEnv { name, value: trimmed.to_owned(), source })
}

fn parse_palette_color(value: &str) -> Result<Color, PaletteError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PaletteError::EmptyColor);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(PaletteError::InvalidColor(trimmed.to_owned()));
        };
        return Ok(Color::Rgb(parse_hex_channel(r)?, parse_hex_channel(g)?, parse_hex_channel(b)?));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidColor(trimmed.to_owned()));
    }
    let rgb = u32::from_str_radix(hex, 16)
        .map_err(|_| PaletteError::InvalidColor(trimmed.to_owned()))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

/// `rgb:` channels are 2 or 4 hex digits; 4-digit channels keep their high byte.
fn parse_hex_channel(value: &str) -> Result<u8, PaletteError> {
    let value = value.trim();
    let invalid = || PaletteError::InvalidChannel(value.to_owned());
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| invalid()),
        4 => u16::from_str_radix(value, 16).map(|wide| (wide >> 8) as u8).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
enum Ansi16 {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<Ansi16> for Color {
    fn from(value: Ansi16) -> Self {
        match value {
            Ansi16::Black => Color::Black,
            Ansi16::Red => Color::Red,
            Ansi16::Green => Color::Green,
            Ansi16::Yellow => Color::Yellow,
            Ansi16::Blue => Color::Blue,
            Ansi16::Magenta => Color::Magenta,
            Ansi16::Cyan => Color::Cyan,
            Ansi16::White => Color::Gray,
            Ansi16::BrightBlack => Color::DarkGray,
            Ansi16::BrightRed => Color::LightRed,
            Ansi16::BrightGreen => Color::LightGreen,
            Ansi16::BrightYellow => Color::LightYellow,
            Ansi16::BrightBlue => Color::LightBlue,
            Ansi16::BrightMagenta => Color::LightMagenta,
            Ansi16::BrightCyan => Color::LightCyan,
            Ansi16::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error(
        "expected {expected} comma-separated colors (fg,bg,black,red,green,yellow,blue,magenta,\
         cyan,white,bright_black,bright_red,bright_green,bright_yellow,bright_blue,\
         bright_magenta,bright_cyan,bright_white), got {got}"
    )]
    WrongLength { expected: usize, got: usize },
    #[error("empty color")]
    EmptyColor,
    #[error("invalid color {0} (expected #RRGGBB or rgb:RR/GG/BB)")]
    InvalidColor(String),
    #[error("invalid rgb: component {0} (expected 2 or 4 hex digits)")]
    InvalidChannel(String),
    #[error("value is not valid unicode")]
    NotUnicode,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid env {name}={value}: {source}")]
    InvalidEnv { name: &'static str, value: String, source: PaletteError },
}
