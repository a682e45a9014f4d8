// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Explorer configuration.
//!
//! Every field has a default, so an absent file and an empty file are equivalent. The file is
//! TOML:
//!
//! ```toml
//! grid_size = 5
//! retry_reset_ms = 2500
//!
//! [countdown]
//! from = 3
//! step_ms = 1000
//!
//! [counting_reveal]
//! min_delay_ms = 20
//! max_delay_ms = 150
//!
//! [reflection_reveal]
//! min_delay_ms = 10
//! max_delay_ms = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::playback::{Countdown, RevealTiming};

pub const DEFAULT_GRID_SIZE: u32 = 5;

/// Largest grid the interactive walkthrough accepts; `C(14, 7)` = 3432 paths to animate.
pub const MAX_GRID_SIZE: u32 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub grid_size: u32,
    pub retry_reset_ms: u64,
    pub countdown: CountdownConfig,
    pub counting_reveal: RevealConfig,
    pub reflection_reveal: RevealConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            retry_reset_ms: 2500,
            countdown: CountdownConfig::default(),
            counting_reveal: RevealConfig { min_delay_ms: 20, max_delay_ms: 150 },
            reflection_reveal: RevealConfig { min_delay_ms: 10, max_delay_ms: 100 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    pub from: u8,
    pub step_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self { from: 3, step_ms: 1000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RevealConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl RevealConfig {
    pub fn timing(self) -> RevealTiming {
        RevealTiming::from_millis(self.min_delay_ms, self.max_delay_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("grid_size must be between 1 and {max}, got {value}")]
    GridSize { value: u32, max: u32 },
    #[error("{section}: min_delay_ms ({min}) must not exceed max_delay_ms ({max})")]
    RevealBounds {
        section: &'static str,
        min: u64,
        max: u64,
    },
    #[error("countdown.step_ms must be positive")]
    CountdownStep,
}

impl ExplorerConfig {
    /// Loads `path` when given, otherwise returns the defaults. The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .map_err(|source| ConfigError::Read { path: path.to_owned(), source })?;
                let config = Self::from_toml_str(&raw)
                    .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })?;
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize { value: self.grid_size, max: MAX_GRID_SIZE });
        }
        for (section, reveal) in [
            ("counting_reveal", self.counting_reveal),
            ("reflection_reveal", self.reflection_reveal),
        ] {
            if reveal.min_delay_ms > reveal.max_delay_ms {
                return Err(ConfigError::RevealBounds {
                    section,
                    min: reveal.min_delay_ms,
                    max: reveal.max_delay_ms,
                });
            }
        }
        if self.countdown.step_ms == 0 {
            return Err(ConfigError::CountdownStep);
        }
        Ok(())
    }

    pub fn countdown(&self) -> Countdown {
        Countdown { from: self.countdown.from, step: Duration::from_millis(self.countdown.step_ms) }
    }

    pub fn retry_reset(&self) -> Duration {
        Duration::from_millis(self.retry_reset_ms)
    }
}
