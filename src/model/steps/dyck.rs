// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::engine::GridPoint;
use crate::model::{DrawingState, PathBuilder, Status};

/// Draw a path that stays on or below the diagonal.
#[derive(Debug, Clone)]
pub struct DyckStep {
    builder: PathBuilder,
    status: Status,
}

impl DyckStep {
    pub fn new(n: u32) -> Self {
        Self { builder: PathBuilder::square(n), status: Self::initial_status() }
    }

    fn initial_status() -> Status {
        Status::neutral("Draw a path that never goes above the main diagonal.")
    }

    pub fn builder(&self) -> &PathBuilder {
        &self.builder
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_path_valid(&self) -> bool {
        self.builder.classification().is_valid()
    }

    /// A finished valid path ignores clicks; a finished invalid one is cleared by the next click.
    pub fn click(&mut self, point: GridPoint) -> bool {
        match self.builder.state() {
            DrawingState::CompleteValid => return false,
            DrawingState::CompleteInvalid => {
                self.reset();
                return true;
            }
            DrawingState::Empty | DrawingState::Drawing => {}
        }

        let Ok(state) = self.builder.try_extend(point) else {
            return false;
        };
        self.status = if !self.is_path_valid() {
            Status::failure("Invalid path! A Dyck path cannot cross above the diagonal.")
        } else if state == DrawingState::CompleteValid {
            Status::success("Congratulations! You drew a valid Dyck path.")
        } else {
            Status::neutral("Good! Stay on or below the diagonal.")
        };
        true
    }

    pub fn reset(&mut self) {
        self.builder.reset();
        self.status = Self::initial_status();
    }
}
