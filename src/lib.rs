// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalan Explorer: a terminal walkthrough that derives the Catalan numbers from lattice paths.
//!
//! [`engine`] holds the pure path mathematics. [`model`] owns the walkthrough state, [`playback`]
//! schedules the timed reveals, [`render`] turns grids and formulas into text, and [`tui`] drives
//! it all from a crossterm event loop.

pub mod config;
pub mod engine;
pub mod model;
pub mod playback;
pub mod render;
pub mod tui;
