//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::SortKey;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // List view
    // ─────────────────────────────────────────────────────────────────────────
    /// Sort by a column (toggles direction on the active column)
    SortBy(SortKey),
    /// Materialize the next page of matches
    LoadMore,
    /// Switch between page-only and global sorting
    ToggleSortPolicy,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    ExitSearchMode,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Rows
    // ─────────────────────────────────────────────────────────────────────────
    /// Add or remove the selected college from the compare set
    ToggleCompare,
    ClearCompare,
    /// Write displayed rows to CSV
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Show the selected college's full details
    OpenDetail,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::SortBy(key) => write!(f, "SortBy({})", key),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            other => write!(f, "{:?}", other),
        }
    }
}
