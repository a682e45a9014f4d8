// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalan Explorer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConclusionPage {
    BadPaths,
    PuttingTogether,
    GeneralFormula,
    Applications,
}

impl ConclusionPage {
    pub const ALL: [Self; 4] =
        [Self::BadPaths, Self::PuttingTogether, Self::GeneralFormula, Self::Applications];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BadPaths => "Counting the 'Bad' Paths",
            Self::PuttingTogether => "Putting It All Together",
            Self::GeneralFormula => "The General Formula",
            Self::Applications => "Endless Applications",
        }
    }

    /// Label of the action that leaves this page.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::BadPaths => "Next",
            Self::PuttingTogether => "Derive General Formula",
            Self::GeneralFormula => "What are they used for?",
            Self::Applications => "Restart Explorer",
        }
    }

    fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

/// Result of activating the current conclusion page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConclusionAction {
    Advanced(ConclusionPage),
    RestartRequested,
}

#[derive(Debug, Clone)]
pub struct ConclusionStep {
    n: u32,
    page: ConclusionPage,
}

impl ConclusionStep {
    pub fn new(n: u32) -> Self {
        Self { n, page: ConclusionPage::BadPaths }
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn page(&self) -> ConclusionPage {
        self.page
    }

    /// Moves to the next page; on the last page asks the walkthrough to start over.
    pub fn activate(&mut self) -> ConclusionAction {
        match self.page.next() {
            Some(page) => {
                self.page = page;
                ConclusionAction::Advanced(page)
            }
            None => ConclusionAction::RestartRequested,
        }
    }
}
